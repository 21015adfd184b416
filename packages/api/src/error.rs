use thiserror::Error;

/// Errors surfaced by the request gateway.
///
/// The UI layer is responsible for user-facing messaging; data-access
/// operations propagate these unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An authenticated call was attempted without a token. This is a
    /// programming-contract violation, not a user-facing condition. UI
    /// flows only reach authenticated endpoints with a live session.
    #[error("authentication token required")]
    AuthRequired,

    /// The server responded with a non-2xx status. `message` carries the
    /// server-supplied error text when the body had one.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Transport failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for server-rejected requests, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
