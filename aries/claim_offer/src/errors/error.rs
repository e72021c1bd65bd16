use std::{error::Error, fmt};

pub mod prelude {
    pub use super::{err_msg, ClaimOfferError, ClaimOfferErrorKind, ClaimOfferResult};
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ClaimOfferErrorKind {
    #[error("Claim offer not found")]
    NotFound,
    #[error("Object is in invalid state for requested operation")]
    InvalidState,
    #[error("Invalid Configuration")]
    InvalidConfiguration,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid DID")]
    InvalidDid,
    #[error("Unable to acquire lock")]
    LockError,
    #[error("Unable to serialize")]
    SerializationError,
    #[error("Message failed in post")]
    PostMessageFailed,
    #[error("Superseded by a newer accept")]
    Superseded,
}

impl ClaimOfferErrorKind {
    /// Code reported in a claim offer's `error` when this kind ends an accept run.
    pub fn code(self) -> &'static str {
        match self {
            ClaimOfferErrorKind::NotFound => "OCS-001",
            ClaimOfferErrorKind::InvalidConfiguration
            | ClaimOfferErrorKind::InvalidUrl
            | ClaimOfferErrorKind::InvalidDid => "OCS-003",
            ClaimOfferErrorKind::PostMessageFailed => "OCS-004",
            ClaimOfferErrorKind::InvalidState
            | ClaimOfferErrorKind::LockError
            | ClaimOfferErrorKind::SerializationError
            | ClaimOfferErrorKind::Superseded => "OCS-000",
        }
    }
}

#[derive(thiserror::Error)]
pub struct ClaimOfferError {
    msg: String,
    kind: ClaimOfferErrorKind,
}

fn format_error(err: &ClaimOfferError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Error: {}", err.msg())?;
    let mut current = err.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n{cause}")?;
        current = cause.source();
    }
    Ok(())
}

impl fmt::Display for ClaimOfferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error(self, f)
    }
}

impl fmt::Debug for ClaimOfferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: ", self.kind)?;
        format_error(self, f)
    }
}

impl ClaimOfferError {
    pub fn from_msg<D>(kind: ClaimOfferErrorKind, msg: D) -> ClaimOfferError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        ClaimOfferError {
            msg: msg.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> ClaimOfferErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn extend<D>(self, msg: D) -> ClaimOfferError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        ClaimOfferError {
            msg: format!("{}\n{}", self.msg, msg),
            kind: self.kind,
        }
    }
}

pub fn err_msg<D>(kind: ClaimOfferErrorKind, msg: D) -> ClaimOfferError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    ClaimOfferError::from_msg(kind, msg)
}

pub type ClaimOfferResult<T> = Result<T, ClaimOfferError>;
