use shared::errors::{
    http_error::HttpError,
    validation::{ValidationError, ValidationErrorKind},
};

use crate::errors::{
    custom_error::CustomError,
    error::{ClaimOfferError, ClaimOfferErrorKind},
};

impl From<ValidationError> for ClaimOfferError {
    fn from(err: ValidationError) -> ClaimOfferError {
        let kind = match err.kind() {
            ValidationErrorKind::InvalidDid | ValidationErrorKind::NotBase58 => {
                ClaimOfferErrorKind::InvalidDid
            }
            ValidationErrorKind::InvalidUrl => ClaimOfferErrorKind::InvalidUrl,
        };
        ClaimOfferError::from_msg(kind, err.msg().to_string())
    }
}

impl From<serde_json::Error> for ClaimOfferError {
    fn from(err: serde_json::Error) -> ClaimOfferError {
        ClaimOfferError::from_msg(
            ClaimOfferErrorKind::SerializationError,
            format!("(De)serialization failed; err: {err}"),
        )
    }
}

impl From<ClaimOfferError> for CustomError {
    fn from(err: ClaimOfferError) -> CustomError {
        CustomError::new(err.kind().code(), err.msg())
    }
}

impl From<HttpError> for CustomError {
    fn from(err: HttpError) -> CustomError {
        let message = match err.status() {
            Some(status) => format!("Agency responded with status {status}: {}", err.message()),
            None => err.message().to_string(),
        };
        CustomError::new(ClaimOfferErrorKind::PostMessageFailed.code(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_kind() {
        let err: ClaimOfferError =
            ValidationError::from_msg(ValidationErrorKind::NotBase58, "bad did").into();
        assert_eq!(err.kind(), ClaimOfferErrorKind::InvalidDid);
        assert_eq!(err.msg(), "bad did");
    }

    #[test]
    fn test_claim_offer_error_becomes_custom_error() {
        let err = ClaimOfferError::from_msg(ClaimOfferErrorKind::InvalidUrl, "no agency url");
        let custom: CustomError = err.into();
        assert_eq!(custom, CustomError::new("OCS-003", "no agency url"));
    }

    #[test]
    fn test_http_error_with_status_becomes_custom_error() {
        let custom: CustomError = HttpError::with_status(503, "unavailable").into();
        assert_eq!(custom.code, "OCS-004");
        assert_eq!(custom.message, "Agency responded with status 503: unavailable");
    }
}
