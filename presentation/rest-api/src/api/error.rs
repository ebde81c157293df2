use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Failure half of the response envelope: `{success: false, message, error?}`.
#[derive(Object, Debug)]
pub struct ErrorEnvelope {
    /// Always false
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// Diagnostic detail, present for internal errors
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorEnvelope>);
}
