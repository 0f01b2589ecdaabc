//! Typed decoding of collection responses
//!
//! A collection endpoint must answer with a JSON array whose elements match
//! the record shape of its resource. Each way that can go wrong has its own
//! error kind so callers never end up rendering blank cells.

use serde_json::Value;

use crate::resources::{Resource, ResourceKind};

/// Why a collection body could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Response is not valid JSON: {0}")]
    Syntax(String),

    #[error("Expected a JSON array of {kind}, found {found}")]
    NotAnArray {
        kind: ResourceKind,
        found: &'static str,
    },

    #[error("Element {index} of {kind} does not match the record shape: {message}")]
    Shape {
        kind: ResourceKind,
        index: usize,
        message: String,
    },
}

/// Decode a response body into the records of `R`, preserving order
pub fn decode_collection<R: Resource>(body: &str) -> Result<Vec<R>, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::Syntax(e.to_string()))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(DecodeError::NotAnArray {
                kind: R::KIND,
                found: json_type_name(&other),
            })
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<R>(element).map_err(|e| DecodeError::Shape {
                kind: R::KIND,
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Activity, Team, User, Workout};

    #[test]
    fn test_decode_preserves_order_and_length() {
        let body = r#"[
            {"id": 2, "name": "Crossfit", "description": "Training for a crossfit competition"},
            {"id": 1, "name": "Cycling Training", "description": "Training for a road cycling event"},
            {"id": 2, "name": "Crossfit", "description": "Training for a crossfit competition"}
        ]"#;

        let workouts = decode_collection::<Workout>(body).unwrap();
        assert_eq!(workouts.len(), 3);
        assert_eq!(workouts[0].name, "Crossfit");
        assert_eq!(workouts[1].name, "Cycling Training");
        // duplicates are kept as sent
        assert_eq!(workouts[0], workouts[2]);
    }

    #[test]
    fn test_decode_empty_array() {
        let users = decode_collection::<User>("[]").unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_decode_syntax_error() {
        let err = decode_collection::<User>("<html>Not Found</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn test_decode_not_an_array() {
        let err = decode_collection::<Team>(r#"{"teams": []}"#).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotAnArray { kind: ResourceKind::Teams, found: "an object" }
        );
    }

    #[test]
    fn test_decode_shape_mismatch_reports_index() {
        let body = r#"[
            {"id": 1, "name": "Blue Team", "members": ["thundergod"]},
            {"id": 2, "name": "Gold Team"}
        ]"#;

        match decode_collection::<Team>(body).unwrap_err() {
            DecodeError::Shape { kind, index, message } => {
                assert_eq!(kind, ResourceKind::Teams);
                assert_eq!(index, 1);
                assert!(message.contains("members"), "message: {}", message);
            }
            other => panic!("Wrong error kind: {:?}", other),
        }
    }

    #[test]
    fn test_decode_extra_fields_ignored() {
        let body = r#"[{"id": "65f0c1", "name": "Swimming", "duration": 75, "user": "sleeptoken"}]"#;
        let activities = decode_collection::<Activity>(body).unwrap();
        assert_eq!(activities[0].name, "Swimming");
    }
}
