// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Caller-side validation of endpoint arguments.
//!
//! Each endpoint declares a static table of [`ValidationRule`]s. Arguments are
//! checked against the table top to bottom and the first violated rule is
//! reported, so the outcome for a given input never depends on map ordering.

use serde_json::{Map, Value};
use ytapi_core::{Error, Result};

use crate::EndpointParams;

/// The primitive type expected for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Str,
    Int,
    StrList,
}

impl FieldType {
    fn describe(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Int => "an integer",
            Self::StrList => "a list of strings",
        }
    }
}

/// Constraint on a single named argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub field: &'static str,
    pub expected: FieldType,
    /// Inclusive bounds, integers only.
    pub range: Option<(i64, i64)>,
    /// Accepted values; for lists every element must belong to the set.
    pub allowed: Option<&'static [&'static str]>,
}

impl ValidationRule {
    pub const fn string(field: &'static str) -> Self {
        Self {
            field,
            expected: FieldType::Str,
            range: None,
            allowed: None,
        }
    }

    pub const fn integer(field: &'static str) -> Self {
        Self {
            field,
            expected: FieldType::Int,
            range: None,
            allowed: None,
        }
    }

    pub const fn list(field: &'static str) -> Self {
        Self {
            field,
            expected: FieldType::StrList,
            range: None,
            allowed: None,
        }
    }

    pub const fn range(self, min: i64, max: i64) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }

    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self {
            allowed: Some(allowed),
            ..self
        }
    }

    /// Checks a present, non-null value: type first, then range, then allowed set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VariableTypeError`] for a value of the wrong type and
    /// [`Error::VariableValueError`] for a value outside the range or set.
    pub fn check(&self, value: &Value) -> Result<()> {
        match self.expected {
            FieldType::Str => {
                let Some(text) = value.as_str() else {
                    return Err(self.type_error(json_type(value)));
                };
                self.check_allowed(text)
            }
            FieldType::Int => {
                if let Some(number) = value.as_i64() {
                    return self.check_range(number);
                }
                if value.is_u64() {
                    // Larger than any bound we declare.
                    return match self.range {
                        Some((min, max)) => Err(self.range_error(min, max, value)),
                        None => Ok(()),
                    };
                }
                Err(self.type_error(json_type(value)))
            }
            FieldType::StrList => {
                let Some(items) = value.as_array() else {
                    return Err(self.type_error(json_type(value)));
                };
                if let Some(item) = items.iter().find(|item| !item.is_string()) {
                    return Err(Error::variable_type(format!(
                        "Argument \"{}\" must be {}, current element type is {}.",
                        self.field,
                        self.expected.describe(),
                        json_type(item)
                    )));
                }
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .try_for_each(|item| self.check_allowed(item))
            }
        }
    }

    fn check_range(&self, number: i64) -> Result<()> {
        match self.range {
            Some((min, max)) if !(min..=max).contains(&number) => {
                Err(self.range_error(min, max, number))
            }
            _ => Ok(()),
        }
    }

    fn check_allowed(&self, text: &str) -> Result<()> {
        match self.allowed {
            Some(allowed) if !allowed.contains(&text) => Err(Error::variable_value(format!(
                "Acceptable values for argument \"{}\" are ({}), current value is {text}.",
                self.field,
                allowed.join(", ")
            ))),
            _ => Ok(()),
        }
    }

    fn type_error(&self, actual: &str) -> Error {
        Error::variable_type(format!(
            "Argument \"{}\" must be {}, current type is {actual}.",
            self.field,
            self.expected.describe()
        ))
    }

    fn range_error(&self, min: i64, max: i64, current: impl std::fmt::Display) -> Error {
        Error::variable_value(format!(
            "Argument \"{}\" must be in range from {min} to {max}, current value is {current}.",
            self.field
        ))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn is_present(args: &Map<String, Value>, field: &str) -> bool {
    args.get(field).is_some_and(|value| !value.is_null())
}

/// Validates named arguments against `rules`, then checks that exactly one of
/// `exactly_one_of` is present when that list is not empty.
///
/// Absent and `null` arguments are never checked against their rule.
///
/// # Errors
///
/// Returns the error of the first violated rule.
pub fn validate_args(
    rules: &[ValidationRule],
    exactly_one_of: &[&str],
    args: &Map<String, Value>,
) -> Result<()> {
    for rule in rules {
        match args.get(rule.field) {
            None | Some(Value::Null) => continue,
            Some(value) => rule.check(value)?,
        }
    }

    if exactly_one_of.is_empty() {
        return Ok(());
    }

    let supplied = exactly_one_of
        .iter()
        .filter(|field| is_present(args, field))
        .count();

    match supplied {
        1 => Ok(()),
        0 => Err(Error::variable_value(format!(
            "One of arguments ({}) is required.",
            exactly_one_of.join(", ")
        ))),
        _ => Err(Error::variable_value(format!(
            "Arguments ({}) are mutually exclusive, pass only one of them.",
            exactly_one_of.join(", ")
        ))),
    }
}

/// Validates typed endpoint parameters with the same rules as untyped arguments.
///
/// # Errors
///
/// Returns the error of the first violated rule.
pub fn validate<P: EndpointParams>(params: &P) -> Result<()> {
    match serde_json::to_value(params)? {
        Value::Object(args) => validate_args(P::RULES, P::EXACTLY_ONE_OF, &args),
        _ => Err(Error::variable_type(format!(
            "Arguments of \"{}\" must be named.",
            P::ENDPOINT
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ytapi_core::ErrorKind;

    const RULES: &[ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("order").one_of(&["date", "rating"]),
        ValidationRule::list("part").one_of(&["id", "snippet"]),
    ];

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn kind_of(result: Result<()>) -> Option<ErrorKind> {
        result.err().and_then(|err| err.kind())
    }

    #[test]
    fn test_empty_arguments_pass() {
        assert!(validate_args(RULES, &[], &Map::new()).is_ok());
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let args = args(json!({"key": null, "max_results": null}));
        assert!(validate_args(RULES, &[], &args).is_ok());
    }

    #[test]
    fn test_wrong_string_type_names_field() {
        let args = args(json!({"key": 42}));
        let err = validate_args(RULES, &[], &args).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::VariableTypeError));
        assert_eq!(
            err.message(),
            Some("Argument \"key\" must be a string, current type is integer.")
        );
    }

    #[test]
    fn test_integer_type_and_range() {
        let float = args(json!({"max_results": 5.5}));
        assert_eq!(
            kind_of(validate_args(RULES, &[], &float)),
            Some(ErrorKind::VariableTypeError)
        );

        for out_of_range in [json!(0), json!(51), json!(-3), json!(u64::MAX)] {
            let args = args(json!({ "max_results": out_of_range }));
            assert_eq!(
                kind_of(validate_args(RULES, &[], &args)),
                Some(ErrorKind::VariableValueError)
            );
        }

        let bounds = args(json!({"max_results": 50}));
        assert!(validate_args(RULES, &[], &bounds).is_ok());
    }

    #[test]
    fn test_enumerated_string() {
        let args = args(json!({"order": "views"}));
        let err = validate_args(RULES, &[], &args).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::VariableValueError));
        assert_eq!(
            err.message(),
            Some("Acceptable values for argument \"order\" are (date, rating), current value is views.")
        );
    }

    #[test]
    fn test_list_must_hold_strings_from_set() {
        let not_a_list = args(json!({"part": "snippet"}));
        assert_eq!(
            kind_of(validate_args(RULES, &[], &not_a_list)),
            Some(ErrorKind::VariableTypeError)
        );

        let bad_element = args(json!({"part": ["id", 3]}));
        assert_eq!(
            kind_of(validate_args(RULES, &[], &bad_element)),
            Some(ErrorKind::VariableTypeError)
        );

        let unknown_element = args(json!({"part": ["id", "statistics"]}));
        assert_eq!(
            kind_of(validate_args(RULES, &[], &unknown_element)),
            Some(ErrorKind::VariableValueError)
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Both fields are invalid; "key" comes first in the table.
        let args = args(json!({"order": "views", "key": 1}));
        assert_eq!(
            kind_of(validate_args(RULES, &[], &args)),
            Some(ErrorKind::VariableTypeError)
        );
    }

    #[test]
    fn test_exactly_one_of() {
        let fields = &["channel_id", "user_name"];

        let both = args(json!({"channel_id": "c", "user_name": "u"}));
        let err = validate_args(&[], fields, &both).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::VariableValueError));

        let neither = args(json!({"user_name": null}));
        let err = validate_args(&[], fields, &neither).unwrap_err();
        assert_eq!(
            err.message(),
            Some("One of arguments (channel_id, user_name) is required.")
        );

        let one = args(json!({"user_name": "u"}));
        assert!(validate_args(&[], fields, &one).is_ok());
    }
}
