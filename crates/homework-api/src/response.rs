//! Shape checks for the homework statuses payload.

use homework_common::{Cursor, HomeworkError, Result};
use serde_json::Value;

/// Key holding the list of homework items.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side cursor.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// A payload whose envelope has been checked.
///
/// Items are kept raw; each one is checked when it is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Homework items, most recent first.
    pub homeworks: Vec<Value>,
    /// Cursor reported by the server, if any.
    pub current_date: Option<Cursor>,
}

impl ApiResponse {
    /// The item the bot reports on, if there is one.
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }

    /// Cursor for the next query: the server's value, or now.
    pub fn next_cursor(&self) -> Cursor {
        self.current_date.unwrap_or_else(Cursor::now)
    }
}

/// Checks that `response` is a mapping carrying a `homeworks` sequence and,
/// when present, a non-negative integer `current_date`.
pub fn check_response(response: &Value) -> Result<ApiResponse> {
    let object = response
        .as_object()
        .ok_or_else(|| HomeworkError::wrong_type("response", "object", response))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| HomeworkError::missing_field(HOMEWORKS_KEY, "response"))?;
    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| HomeworkError::wrong_type(HOMEWORKS_KEY, "array", homeworks))?;

    let current_date = object
        .get(CURRENT_DATE_KEY)
        .map(|value| {
            value.as_u64().map(Cursor).ok_or_else(|| {
                HomeworkError::wrong_type(CURRENT_DATE_KEY, "non-negative integer", value)
            })
        })
        .transpose()?;

    Ok(ApiResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use homework_common::test_utils::payload_fixtures::{
        empty_response, homework, response, response_without_cursor,
    };
    use homework_common::PayloadError;
    use serde_json::json;

    fn payload_error(value: &Value) -> PayloadError {
        match check_response(value) {
            Err(HomeworkError::MalformedPayload(e)) => e,
            other => panic!("expected a payload error, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_response_with_cursor() {
        let checked = check_response(&response(vec![homework("hw1", "approved")], 1_700_000_000)).unwrap();

        assert_eq!(checked.homeworks.len(), 1);
        assert_eq!(checked.current_date, Some(Cursor(1_700_000_000)));
        assert_eq!(checked.next_cursor(), Cursor(1_700_000_000));
        assert_eq!(checked.latest().unwrap()["homework_name"], "hw1");
    }

    #[test]
    fn test_accepts_empty_list() {
        let checked = check_response(&empty_response(42)).unwrap();
        assert!(checked.homeworks.is_empty());
        assert!(checked.latest().is_none());
    }

    #[test]
    fn test_missing_cursor_falls_back_to_now() {
        let before = Cursor::now();
        let checked = check_response(&response_without_cursor(vec![])).unwrap();

        assert_eq!(checked.current_date, None);
        assert!(checked.next_cursor() >= before);
    }

    #[test]
    fn test_rejects_non_mapping_top_level() {
        for value in [json!([]), json!(5), json!("homeworks"), Value::Null] {
            assert!(matches!(
                payload_error(&value),
                PayloadError::WrongType { expected: "object", .. }
            ));
        }
    }

    #[test]
    fn test_rejects_missing_homeworks() {
        let err = payload_error(&json!({ "current_date": 1 }));
        assert!(matches!(err, PayloadError::MissingField { ref field, .. } if field == "homeworks"));
    }

    #[test]
    fn test_rejects_homeworks_of_wrong_type() {
        for homeworks in [json!("hw"), json!({ "homework_name": "hw" }), json!(1)] {
            let err = payload_error(&json!({ "homeworks": homeworks, "current_date": 1 }));
            assert!(matches!(err, PayloadError::WrongType { expected: "array", .. }));
        }
    }

    #[test]
    fn test_rejects_bad_cursor() {
        for current_date in [json!(-1), json!("1700000000"), json!(1.5), Value::Null] {
            let err = payload_error(&json!({ "homeworks": [], "current_date": current_date }));
            assert!(matches!(
                err,
                PayloadError::WrongType { expected: "non-negative integer", .. }
            ));
        }
    }
}
