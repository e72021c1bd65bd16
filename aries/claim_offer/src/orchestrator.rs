use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::{
    collaborators::{
        agency_config::AgencyUrlSource, claim_request::ClaimRequestGenerator,
        pairwise::PairwiseDirectory,
        transport::{AgencyTransport, ClaimRequestPayload},
    },
    errors::{custom_error::CustomError, error::prelude::*},
    store::{events::ClaimOfferEvent, ClaimOfferDispatcher, ClaimOfferLookup},
};

/// How an accept run ended, mirroring the terminal event it emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    ClaimRequestSent,
    ClaimRequestFailed(CustomError),
}

/// Runs the accept flow of one claim offer: resolve the pairwise DID, generate
/// the claim request and submit it to the agency. Progress is only ever
/// reported as events handed to the dispatcher.
#[derive(TypedBuilder)]
pub struct AcceptanceOrchestrator {
    claim_offers: Arc<dyn ClaimOfferLookup>,
    pairwise_directory: Arc<dyn PairwiseDirectory>,
    claim_request_generator: Arc<dyn ClaimRequestGenerator>,
    agency_transport: Arc<dyn AgencyTransport>,
    agency_url: Arc<dyn AgencyUrlSource>,
}

impl std::fmt::Debug for AcceptanceOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptanceOrchestrator").finish_non_exhaustive()
    }
}

fn ensure_active(events: &dyn ClaimOfferDispatcher, uid: &str) -> ClaimOfferResult<()> {
    if events.is_active() {
        Ok(())
    } else {
        Err(ClaimOfferError::from_msg(
            ClaimOfferErrorKind::Superseded,
            format!("Accept run for claim offer {uid} was superseded"),
        ))
    }
}

fn emit_failure(
    uid: &str,
    error: CustomError,
    events: &dyn ClaimOfferDispatcher,
) -> ClaimOfferResult<AcceptOutcome> {
    events.dispatch(ClaimOfferEvent::claim_request_fail(uid, error.clone()))?;
    Ok(AcceptOutcome::ClaimRequestFailed(error))
}

impl AcceptanceOrchestrator {
    /// Emits `SendClaimRequest` followed by exactly one of `ClaimRequestSuccess`
    /// or `ClaimRequestFail`, except when no pairwise connection exists, in
    /// which case only `ClaimRequestFail` (`OCS-002`) is emitted.
    ///
    /// Returns an error without emitting anything if the offer is unknown, and
    /// stops with `Superseded` as soon as `events` no longer forwards.
    pub async fn claim_offer_accepted(
        &self,
        uid: &str,
        events: &dyn ClaimOfferDispatcher,
    ) -> ClaimOfferResult<AcceptOutcome> {
        trace!("AcceptanceOrchestrator::claim_offer_accepted >>> uid: {}", uid);
        let claim_offer = self.claim_offers.lookup_claim_offer(uid).ok_or_else(|| {
            ClaimOfferError::from_msg(
                ClaimOfferErrorKind::NotFound,
                format!("Cannot accept claim offer, not found for uid: {uid}"),
            )
        })?;
        let issuer = claim_offer.issuer_descriptor();
        let remote_did = claim_offer.remote_pairwise_did;

        let user_pairwise_did = self.pairwise_directory.resolve_pairwise_did(&remote_did).await;
        ensure_active(events, uid)?;
        let Some(user_pairwise_did) = user_pairwise_did else {
            warn!("No pairwise connection found for remote did {}", remote_did);
            return emit_failure(uid, CustomError::no_pairwise_connection(), events);
        };

        events.dispatch(ClaimOfferEvent::send_claim_request(uid))?;

        let claim_request = match self
            .claim_request_generator
            .generate_claim_request(&remote_did, &issuer)
            .await
        {
            Ok(claim_request) => claim_request,
            Err(err) => {
                ensure_active(events, uid)?;
                error!("Failed to generate claim request for {}: {}", uid, err);
                return emit_failure(uid, err, events);
            }
        };
        ensure_active(events, uid)?;

        let agency_url = match self.agency_url.agency_url() {
            Ok(agency_url) => agency_url,
            Err(err) => {
                error!("Cannot read agency url for {}: {}", uid, err);
                return emit_failure(uid, err.into(), events);
            }
        };
        let payload = ClaimRequestPayload::builder()
            .claim_request(claim_request)
            .agency_url(agency_url)
            .user_pairwise_did(user_pairwise_did)
            .response_msg_id(uid)
            .build();

        let sent = self.agency_transport.send_claim_request(&payload).await;
        ensure_active(events, uid)?;
        match sent {
            Ok(()) => {
                info!("Claim request for {} sent", uid);
                events.dispatch(ClaimOfferEvent::claim_request_success(uid))?;
                Ok(AcceptOutcome::ClaimRequestSent)
            }
            Err(err) => {
                error!("Failed to send claim request for {}: {}", uid, err);
                emit_failure(uid, err, events)
            }
        }
    }
}
