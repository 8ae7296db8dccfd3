use thiserror::Error;

/// Failure of a single REST call against one of the backend services.
///
/// The three cases mirror what can actually go wrong on the wire: the request
/// never completed, the service answered with a non-success status, or the
/// body could not be decoded. No retries or circuit breaking happen at this
/// level; callers decide whether a failed call aborts their workflow.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status. `message` carries the body's `error` field
    /// when the service supplied one, otherwise the status line itself.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
