//! Unit tests for error module.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 400,
        message: "Bad request".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("400"));
    assert!(display.contains("Bad request"));
}

#[test]
fn test_api_error_status() {
    let error = Error::Api {
        status: 500,
        message: "Database error".to_string(),
    };
    assert_eq!(error.status(), Some(500));
}

#[test]
fn test_invalid_url_error() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let error: Error = parse_error.into();

    assert!(format!("{}", error).contains("Invalid URL"));
    assert_eq!(error.status(), None);
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();

    assert!(format!("{}", error).contains("JSON error"));
}
