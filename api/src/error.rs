use serde_json::Value;

/// Errors surfaced by the API gateway.
///
/// `InvalidArgument` is raised locally, before any request is issued.
/// Everything else maps a transport- or server-side failure. The `Display`
/// text is what page controllers show to the user, so server-supplied
/// `message`/`error` fields are preferred over generic wording.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally for a missing or malformed identifier/keyword.
    #[error("{0}")]
    InvalidArgument(String),

    /// Structured refusal from the login endpoint; both fields are shown
    /// to the user verbatim.
    #[error("{message} - {reason}")]
    Denied { message: String, reason: String },

    /// Non-success HTTP status, with the server's own message when it
    /// sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Network-level failure from the underlying client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a non-success response body,
    /// preferring the server's `message` or `error` field.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Status { status, message }
    }

    /// Build the structured 403 refusal the login endpoint produces.
    pub(crate) fn denied(body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self::Denied {
            message: field("message").unwrap_or_else(|| "Access denied".to_string()),
            reason: field("reason").unwrap_or_else(|| "No reason provided".to_string()),
        }
    }
}

/// Extract a human-readable message from a JSON or plain-text error body.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| value.as_str().map(str::to_string)),
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_server_message_field() {
        let err = ApiError::from_status(500, r#"{"message":"title is required"}"#);
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn test_status_falls_back_to_error_field_then_generic() {
        let err = ApiError::from_status(400, r#"{"error":"bad tags"}"#);
        assert_eq!(err.to_string(), "bad tags");

        let err = ApiError::from_status(502, "");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_plain_text_body_is_used_as_is() {
        let err = ApiError::from_status(500, "boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_denied_carries_message_and_reason_verbatim() {
        let err = ApiError::denied(
            r#"{"message":"Your account has been banned","reason":"spam"}"#,
        );
        match err {
            ApiError::Denied { message, reason } => {
                assert_eq!(message, "Your account has been banned");
                assert_eq!(reason, "spam");
            }
            other => panic!("expected Denied, got {other:?}"),
        }
    }

    #[test]
    fn test_denied_fills_missing_reason() {
        let err = ApiError::denied(r#"{"message":"Your account has been banned"}"#);
        assert_eq!(
            err.to_string(),
            "Your account has been banned - No reason provided"
        );
    }
}
