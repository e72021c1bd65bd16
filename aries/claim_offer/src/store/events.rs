use crate::{
    errors::custom_error::CustomError,
    payload::{AdditionalDataPayload, NotificationPayloadInfo},
};

/// Everything that can happen to a claim offer. The store folds these into
/// its records; nothing else writes to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimOfferEvent {
    Received {
        payload: AdditionalDataPayload,
        info: NotificationPayloadInfo,
    },
    Shown(String),
    Accepted(String),
    Ignored(String),
    Rejected(String),
    SendClaimRequest(String),
    ClaimRequestSuccess(String),
    ClaimRequestFail {
        uid: String,
        error: CustomError,
    },
}

impl ClaimOfferEvent {
    pub fn received(payload: AdditionalDataPayload, info: NotificationPayloadInfo) -> Self {
        Self::Received { payload, info }
    }

    // Marks the offer as presented so it is not shown to the user again.
    pub fn shown(uid: impl Into<String>) -> Self {
        Self::Shown(uid.into())
    }

    pub fn accepted(uid: impl Into<String>) -> Self {
        Self::Accepted(uid.into())
    }

    pub fn ignored(uid: impl Into<String>) -> Self {
        Self::Ignored(uid.into())
    }

    pub fn rejected(uid: impl Into<String>) -> Self {
        Self::Rejected(uid.into())
    }

    pub fn send_claim_request(uid: impl Into<String>) -> Self {
        Self::SendClaimRequest(uid.into())
    }

    pub fn claim_request_success(uid: impl Into<String>) -> Self {
        Self::ClaimRequestSuccess(uid.into())
    }

    pub fn claim_request_fail(uid: impl Into<String>, error: CustomError) -> Self {
        Self::ClaimRequestFail {
            uid: uid.into(),
            error,
        }
    }

    pub fn uid(&self) -> &str {
        match self {
            Self::Received { info, .. } => &info.uid,
            Self::Shown(uid)
            | Self::Accepted(uid)
            | Self::Ignored(uid)
            | Self::Rejected(uid)
            | Self::SendClaimRequest(uid)
            | Self::ClaimRequestSuccess(uid)
            | Self::ClaimRequestFail { uid, .. } => uid,
        }
    }

    /// Only `Received` may introduce a `uid` the store has not seen yet.
    pub fn creates_record(&self) -> bool {
        matches!(self, Self::Received { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Received { .. } => "CLAIM_OFFER_RECEIVED",
            Self::Shown(_) => "CLAIM_OFFER_SHOWN",
            Self::Accepted(_) => "CLAIM_OFFER_ACCEPTED",
            Self::Ignored(_) => "CLAIM_OFFER_IGNORED",
            Self::Rejected(_) => "CLAIM_OFFER_REJECTED",
            Self::SendClaimRequest(_) => "SEND_CLAIM_REQUEST",
            Self::ClaimRequestSuccess(_) => "CLAIM_REQUEST_SUCCESS",
            Self::ClaimRequestFail { .. } => "CLAIM_REQUEST_FAIL",
        }
    }
}
