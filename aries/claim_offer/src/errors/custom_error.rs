use serde::{Deserialize, Serialize};

/// Code of the error recorded when the offer's sender has no pairwise connection.
pub const NO_PAIRWISE_CONNECTION_CODE: &str = "OCS-002";

/// Error value stored on a claim offer record. Collaborators report failures
/// with it and the accept flow passes it through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct CustomError {
    pub code: String,
    pub message: String,
}

impl CustomError {
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn no_pairwise_connection() -> Self {
        Self::new(NO_PAIRWISE_CONNECTION_CODE, "No pairwise connection found")
    }
}
