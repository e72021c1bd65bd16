use thiserror::Error as ThisError;

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, ThisError)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    message: String,
    status: Option<u16>,
}

impl HttpError {
    pub fn from_msg<D>(message: D) -> Self
    where
        D: std::fmt::Display,
    {
        Self {
            message: message.to_string(),
            status: None,
        }
    }

    pub fn with_status<D>(status: u16, message: D) -> Self
    where
        D: std::fmt::Display,
    {
        Self {
            message: message.to_string(),
            status: Some(status),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status returned by the remote side, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}
