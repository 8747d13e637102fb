//! Validation entry points backed by the process-wide schema.

use serde_json::Value;
use tracing::{debug, warn};

use crate::schema::schema;
use crate::{REQUEST_KEY, RESPONSE_KEY, SchemaViolation};

/// Validate a request document.
pub fn validate_request(data: &Value) -> Result<(), SchemaViolation> {
    let schema = schema().map_err(|e| SchemaViolation::SchemaUnavailable(e.to_string()))?;
    schema.validate_request(data).inspect_err(|e| {
        debug!(error = %e, "Request document rejected");
    })
}

/// Validate a response document.
pub fn validate_response(data: &Value) -> Result<(), SchemaViolation> {
    let schema = schema().map_err(|e| SchemaViolation::SchemaUnavailable(e.to_string()))?;
    schema.validate_response(data).inspect_err(|e| {
        debug!(error = %e, "Response document rejected");
    })
}

/// Parse `text` as JSON and validate it as whichever document kind it is.
///
/// A document carrying `request` is treated as a request even if it also
/// carries `response`. On success the parsed document is returned.
pub fn validate_encoded(text: &str) -> Result<Value, SchemaViolation> {
    let data: Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Exchange document is not valid JSON");
        SchemaViolation::Parse(e.to_string())
    })?;

    let has = |key: &str| data.as_object().is_some_and(|obj| obj.contains_key(key));

    if has(REQUEST_KEY) {
        validate_request(&data)?;
    } else if has(RESPONSE_KEY) {
        validate_response(&data)?;
    } else {
        return Err(SchemaViolation::NoDiscriminator);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!({
            "response": {
                "action": "COMPLETED",
                "summary_for_supervisor": "Implemented the parser.",
                "evidence_files": ["src/parser.rs"]
            },
            "metadata": {"attempt": 1}
        })
    }

    #[test]
    fn valid_request_passes() {
        let data = json!({"request": {"prompt": "Implement the parser", "phase": "implement"}});
        assert_eq!(validate_request(&data), Ok(()));
    }

    #[test]
    fn response_document_passes_response_check() {
        assert_eq!(validate_response(&sample_response()), Ok(()));
    }

    #[test]
    fn response_document_fails_request_check_with_missing_key() {
        let err = validate_request(&sample_response()).unwrap_err();
        assert_eq!(err, SchemaViolation::MissingKey("request"));
        assert!(err.to_string().contains("'request'"));
    }

    #[test]
    fn request_document_fails_response_check() {
        let data = json!({"request": {"prompt": "go"}});
        assert_eq!(
            validate_response(&data),
            Err(SchemaViolation::MissingKey("response"))
        );
    }

    #[test]
    fn schema_violation_reported_before_missing_key() {
        let data = json!({"response": {"action": "DANCE", "summary_for_supervisor": "x"}});
        assert!(matches!(
            validate_request(&data),
            Err(SchemaViolation::Schema(_))
        ));
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(validate_request(&json!([1, 2, 3])).is_err());
        assert!(validate_response(&json!("response")).is_err());
    }

    #[test]
    fn missing_required_response_field() {
        let data = json!({"response": {"action": "STUCK"}});
        let err = validate_response(&data).unwrap_err();
        assert!(matches!(err, SchemaViolation::Schema(ref m) if m.contains("summary_for_supervisor")));
    }

    #[test]
    fn encoded_parse_error() {
        let err = validate_encoded("{not json").unwrap_err();
        assert!(matches!(err, SchemaViolation::Parse(_)));
        assert!(err.to_string().starts_with("parse error: "));
    }

    #[test]
    fn encoded_dispatches_to_response() {
        let text = serde_json::to_string(&sample_response()).unwrap();
        let parsed = validate_encoded(&text).unwrap();
        assert_eq!(parsed, sample_response());
    }

    #[test]
    fn encoded_dispatches_to_request() {
        let parsed = validate_encoded(r#"{"request": {"prompt": "hello"}}"#).unwrap();
        assert_eq!(parsed["request"]["prompt"], "hello");
    }

    #[test]
    fn encoded_without_discriminator() {
        let err = validate_encoded(r#"{"metadata": {}}"#).unwrap_err();
        assert_eq!(err, SchemaViolation::NoDiscriminator);
        let msg = err.to_string();
        assert!(msg.contains("neither 'request' nor 'response' is present"));
    }

    #[test]
    fn encoded_array_has_no_discriminator() {
        assert_eq!(
            validate_encoded("[]").unwrap_err(),
            SchemaViolation::NoDiscriminator
        );
    }

    #[test]
    fn encoded_with_both_keys_prefers_request() {
        let text = r#"{
            "request": {"prompt": "go"},
            "response": {"action": "RETRY", "summary_for_supervisor": "again"}
        }"#;
        let parsed = validate_encoded(text).unwrap();
        assert!(parsed.get("request").is_some());

        // An invalid request is reported even though the response half is valid.
        let text = r#"{
            "request": {"prompt": ""},
            "response": {"action": "RETRY", "summary_for_supervisor": "again"}
        }"#;
        assert!(matches!(
            validate_encoded(text),
            Err(SchemaViolation::Schema(_))
        ));
    }
}
