// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Conversion of unix times into the RFC 3339 timestamps the API expects.

use jiff::Timestamp;
use ytapi_core::{Error, Result};

/// Inclusive range of unix seconds accepted for timestamp fields, from
/// `0001-01-01T00:00:00Z` to `9999-12-30T21:59:59Z`, just below the upper
/// bound of `jiff::Timestamp`.
pub const UNIX_TIME_RANGE: (i64, i64) = (-62_135_596_800, 253_402_207_199);

/// Converts seconds since the unix epoch into an RFC 3339 UTC timestamp.
///
/// # Errors
///
/// Returns [`Error::VariableValueError`] if `unix_time` cannot be represented.
pub fn to_provider_timestamp(unix_time: i64) -> Result<String> {
    Timestamp::from_second(unix_time)
        .map(|timestamp| timestamp.to_string())
        .map_err(|err| {
            Error::variable_value(format!(
                "Unix time {unix_time} cannot be converted to a timestamp: {err}."
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(to_provider_timestamp(0).unwrap(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_known_date() {
        assert_eq!(
            to_provider_timestamp(1_609_459_200).unwrap(),
            "2021-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_range_bounds() {
        let (min, max) = UNIX_TIME_RANGE;
        assert!(to_provider_timestamp(min).is_ok());
        assert!(to_provider_timestamp(max).is_ok());
        assert_eq!(to_provider_timestamp(min).unwrap(), "0001-01-01T00:00:00Z");
        assert_eq!(to_provider_timestamp(max).unwrap(), "9999-12-30T21:59:59Z");
        assert!(to_provider_timestamp(i64::MAX).unwrap_err().is_validation());
    }
}
