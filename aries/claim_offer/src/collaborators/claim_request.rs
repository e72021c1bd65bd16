use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::custom_error::CustomError;

/// What the claim request generator needs to know about the offer's issuer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerDescriptor {
    pub issuer_did: String,
    pub schema_sequence_number: u64,
}

/// Signed claim request as produced by the generator. Opaque to this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimRequestBlob(String);

impl ClaimRequestBlob {
    pub fn new(claim_request: impl Into<String>) -> Self {
        Self(claim_request.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimRequestGenerator: Send + Sync {
    async fn generate_claim_request(
        &self,
        remote_did: &str,
        issuer: &IssuerDescriptor,
    ) -> Result<ClaimRequestBlob, CustomError>;
}
