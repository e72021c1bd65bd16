use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{http_client, validation::url::validate_url};
use typed_builder::TypedBuilder;

use crate::{
    collaborators::claim_request::ClaimRequestBlob,
    errors::{custom_error::CustomError, error::ClaimOfferError},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequestPayload {
    pub claim_request: ClaimRequestBlob,
    #[builder(setter(into))]
    pub agency_url: String,
    #[builder(setter(into))]
    pub user_pairwise_did: String,
    /// The claim offer's `uid`, so the issuer can correlate its answer.
    #[builder(setter(into))]
    pub response_msg_id: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgencyTransport: Send + Sync {
    async fn send_claim_request(&self, payload: &ClaimRequestPayload) -> Result<(), CustomError>;
}

/// Submits claim requests to the agency over HTTP as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpAgencyTransport;

#[async_trait]
impl AgencyTransport for HttpAgencyTransport {
    async fn send_claim_request(&self, payload: &ClaimRequestPayload) -> Result<(), CustomError> {
        let url = validate_url(&payload.agency_url)
            .map_err(|err| CustomError::from(ClaimOfferError::from(err)))?;
        debug!(
            "Sending claim request for {} to agency {}",
            payload.response_msg_id, url
        );
        let response = http_client::post_json(payload, &url).await?;
        trace!(
            "Agency accepted claim request for {}, response length: {}",
            payload.response_msg_id,
            response.len()
        );
        Ok(())
    }
}
