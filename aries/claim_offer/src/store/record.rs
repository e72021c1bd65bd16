use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    collaborators::claim_request::IssuerDescriptor,
    errors::custom_error::CustomError,
    payload::{AdditionalData, AdditionalDataPayload, Issuer, NotificationPayloadInfo},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimOfferStatus {
    Received,
    Shown,
    Accepted,
    Ignored,
    Rejected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimRequestStatus {
    #[default]
    None,
    SendingClaimRequest,
    ClaimRequestSuccess,
    ClaimRequestFail,
}

impl fmt::Display for ClaimOfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ClaimOfferStatus::Received => f.write_str("RECEIVED"),
            ClaimOfferStatus::Shown => f.write_str("SHOWN"),
            ClaimOfferStatus::Accepted => f.write_str("ACCEPTED"),
            ClaimOfferStatus::Ignored => f.write_str("IGNORED"),
            ClaimOfferStatus::Rejected => f.write_str("REJECTED"),
        }
    }
}

impl fmt::Display for ClaimRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ClaimRequestStatus::None => f.write_str("NONE"),
            ClaimRequestStatus::SendingClaimRequest => f.write_str("SENDING_CLAIM_REQUEST"),
            ClaimRequestStatus::ClaimRequestSuccess => f.write_str("CLAIM_REQUEST_SUCCESS"),
            ClaimRequestStatus::ClaimRequestFail => f.write_str("CLAIM_REQUEST_FAIL"),
        }
    }
}

/// One claim offer as tracked by the wallet, keyed by the agency assigned `uid`.
///
/// `issuer`, `data`, `sender_logo_url` and `remote_pairwise_did` come from the
/// notification and are never changed afterwards. `status` follows the user's
/// decision while `claim_request_status` and `error` follow the accept flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOfferRecord {
    pub uid: String,
    pub issuer: Issuer,
    pub data: AdditionalData,
    pub sender_logo_url: String,
    #[serde(rename = "remotePairwiseDID")]
    pub remote_pairwise_did: String,
    pub status: ClaimOfferStatus,
    pub claim_request_status: ClaimRequestStatus,
    pub error: Option<CustomError>,
}

impl ClaimOfferRecord {
    pub fn from_notification(payload: AdditionalDataPayload, info: NotificationPayloadInfo) -> Self {
        let AdditionalDataPayload { data, issuer, .. } = payload;
        let NotificationPayloadInfo {
            uid,
            sender_logo_url,
            remote_pairwise_did,
        } = info;
        Self {
            uid,
            issuer,
            data,
            sender_logo_url,
            remote_pairwise_did,
            status: ClaimOfferStatus::Received,
            claim_request_status: ClaimRequestStatus::None,
            error: None,
        }
    }

    pub fn issuer_descriptor(&self) -> IssuerDescriptor {
        IssuerDescriptor {
            issuer_did: self.issuer.did.clone(),
            schema_sequence_number: self.data.claim_definition_schema_sequence_number,
        }
    }
}
