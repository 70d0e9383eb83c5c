// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use ytapi_core::{Error, ErrorKind};
use ytapi_macros::ApiValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ApiValue)]
enum SearchType {
    #[value(id = "video")]
    Video,
    #[value(id = "channel")]
    Channel,
    #[value(id = "playlist")]
    Playlist,
}

#[test]
fn test_as_ref_and_display() {
    assert_eq!(SearchType::Channel.as_ref(), "channel");
    assert_eq!(SearchType::Playlist.to_string(), "playlist");
}

#[test]
fn test_try_from_valid() {
    for value in SearchType::VALUES {
        let parsed = SearchType::try_from(*value).unwrap();
        assert_eq!(parsed.as_ref(), *value);
    }
}

#[test]
fn test_try_from_invalid_is_value_error() {
    let err = SearchType::try_from("movie").unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::VariableValueError));
    assert_eq!(
        err.message(),
        Some(
            "Acceptable values for \"SearchType\" are (video, channel, playlist), current value is movie."
        )
    );
}

#[test]
fn test_from_str() {
    let parsed: SearchType = "video".parse().unwrap();
    assert_eq!(parsed, SearchType::Video);
    assert!(matches!(
        "".parse::<SearchType>(),
        Err(Error::VariableValueError(_))
    ));
}

#[test]
fn test_serde_uses_wire_values() {
    let json = serde_json::to_value([SearchType::Video, SearchType::Channel]).unwrap();
    assert_eq!(json, serde_json::json!(["video", "channel"]));

    let back: Vec<SearchType> = serde_json::from_value(json).unwrap();
    assert_eq!(back, vec![SearchType::Video, SearchType::Channel]);

    let err = serde_json::from_value::<SearchType>(serde_json::json!("movie")).unwrap_err();
    assert!(err.to_string().contains("unknown variant `movie`"));
}
