#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client.request_failed: {0}")]
    RequestFailed(String),
    #[error("client.invalid_response: {0}")]
    InvalidResponse(String),
}
