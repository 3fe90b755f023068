use super::*;

#[test]
fn http_error_message_names_path_and_reason() {
    let err = NetError::Http {
        path: "/api/avatars".to_owned(),
        reason: "status 500".to_owned(),
    };
    assert_eq!(err.to_string(), "request to /api/avatars failed: status 500");
}

#[test]
fn decode_error_keeps_serde_source() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = NetError::Decode(source);
    assert!(err.to_string().starts_with("failed to decode frame"));
    assert!(std::error::Error::source(&err).is_some());
}
