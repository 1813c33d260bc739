//! Integration tests for homework-common crate.

use homework_common::{
    json_type_name, mask_secret, truncate_string, ChatId, Cursor, HomeworkError, PayloadError,
};
use serde_json::json;

#[test]
fn test_cursor_display() {
    let cursor = Cursor(1_700_000_100);
    assert_eq!(format!("{cursor}"), "1700000100");
}

#[test]
fn test_cursor_now_is_monotonic_enough() {
    let before = Cursor::now();
    let after = Cursor::now();
    assert!(after >= before);
}

#[test]
fn test_chat_id_serializes_transparently() {
    let chat_id = ChatId::from("123456789");
    assert_eq!(serde_json::to_string(&chat_id).unwrap(), "\"123456789\"");
    assert_eq!(chat_id.as_str(), "123456789");

    let channel: ChatId = serde_json::from_str("\"@homework_updates\"").unwrap();
    assert_eq!(channel.to_string(), "@homework_updates");
}

#[test]
fn test_payload_errors_are_distinguishable() {
    let missing = HomeworkError::missing_field("homeworks", "API response");
    let wrong = HomeworkError::wrong_type("API response", "object", &json!([]));

    assert!(matches!(
        missing,
        HomeworkError::MalformedPayload(PayloadError::MissingField { ref field, .. }) if field == "homeworks"
    ));
    assert!(matches!(
        wrong,
        HomeworkError::MalformedPayload(PayloadError::WrongType { found: "array", .. })
    ));
}

#[test]
fn test_error_kinds() {
    assert_eq!(HomeworkError::network("down").kind(), "network");
    assert_eq!(
        HomeworkError::bad_response("https://example.com", 404, "Not Found", "").kind(),
        "bad_response"
    );
    assert_eq!(HomeworkError::unexpected_status("x").kind(), "unexpected_status");
    assert_eq!(HomeworkError::config("x").kind(), "config");
}

#[test]
fn test_helpers() {
    assert_eq!(json_type_name(&json!(42)), "number");
    assert_eq!(truncate_string("abcdef", 5), "ab...");
    assert_eq!(mask_secret("123456:ABCDEF"), "*********CDEF");
}
