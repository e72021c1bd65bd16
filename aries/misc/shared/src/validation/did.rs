use regex::Regex;

use crate::errors::validation::{ValidationError, ValidationErrorKind, ValidationResult};

lazy_static! {
    static ref QUALIFIED_DID: Regex =
        Regex::new("^did:([a-z0-9]+):([a-zA-Z0-9:._-]+)$").expect("unexpected regex error occurred.");
}

const UNQUALIFIED_DID_BYTES: usize = 16;

pub fn is_fully_qualified(entity: &str) -> bool {
    QUALIFIED_DID.is_match(entity)
}

/// Accepts either a fully qualified DID (`did:<method>:<id>`) or a legacy
/// unqualified DID, which must be the base58 encoding of 16 bytes.
pub fn validate_did(did: &str) -> ValidationResult<String> {
    trace!("validate_did >>> did: {}", did);
    if is_fully_qualified(did) {
        return Ok(did.to_string());
    }
    match bs58::decode(did).into_vec() {
        Ok(ref bytes) if bytes.len() == UNQUALIFIED_DID_BYTES => Ok(did.to_string()),
        Ok(bytes) => Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidDid,
            format!(
                "Invalid DID length, expected {} bytes, decoded {} bytes",
                UNQUALIFIED_DID_BYTES,
                bytes.len()
            ),
        )),
        Err(err) => Err(ValidationError::from_msg(
            ValidationErrorKind::NotBase58,
            format!("DID is not valid base58, details: {err}"),
        )),
    }
}
