use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::store::{
    events::ClaimOfferEvent,
    record::{ClaimOfferRecord, ClaimOfferStatus, ClaimRequestStatus},
};

/// All known claim offers, keyed by `uid`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimOfferState {
    offers: HashMap<String, ClaimOfferRecord>,
}

impl ClaimOfferState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uid: &str) -> Option<&ClaimOfferRecord> {
        self.offers.get(uid)
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.offers.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ClaimOfferRecord> {
        self.offers.values()
    }

    /// Folds one event into the state. `Received` replaces the whole record;
    /// every other event only touches its own field(s) of an existing record.
    /// Events for a `uid` that was never received leave the state unchanged.
    pub fn reduce(mut self, event: ClaimOfferEvent) -> Self {
        trace!("ClaimOfferState::reduce >>> event: {}", event.name());
        match event {
            ClaimOfferEvent::Received { payload, info } => {
                let record = ClaimOfferRecord::from_notification(payload, info);
                debug!("Claim offer {} received", record.uid);
                self.offers.insert(record.uid.clone(), record);
            }
            ClaimOfferEvent::Shown(uid) => {
                self.set_status(&uid, ClaimOfferStatus::Shown);
            }
            ClaimOfferEvent::Accepted(uid) => {
                self.set_status(&uid, ClaimOfferStatus::Accepted);
            }
            ClaimOfferEvent::Ignored(uid) => {
                self.set_status(&uid, ClaimOfferStatus::Ignored);
            }
            ClaimOfferEvent::Rejected(uid) => {
                self.set_status(&uid, ClaimOfferStatus::Rejected);
            }
            ClaimOfferEvent::SendClaimRequest(uid) => {
                self.set_claim_request_status(&uid, ClaimRequestStatus::SendingClaimRequest);
            }
            ClaimOfferEvent::ClaimRequestSuccess(uid) => {
                self.set_claim_request_status(&uid, ClaimRequestStatus::ClaimRequestSuccess);
            }
            ClaimOfferEvent::ClaimRequestFail { uid, error } => {
                self.update(&uid, move |record| {
                    record.claim_request_status = ClaimRequestStatus::ClaimRequestFail;
                    record.error = Some(error);
                });
            }
        }
        self
    }

    fn set_status(&mut self, uid: &str, status: ClaimOfferStatus) {
        self.update(uid, |record| record.status = status);
    }

    fn set_claim_request_status(&mut self, uid: &str, status: ClaimRequestStatus) {
        self.update(uid, |record| record.claim_request_status = status);
    }

    fn update<F>(&mut self, uid: &str, update: F)
    where
        F: FnOnce(&mut ClaimOfferRecord),
    {
        match self.offers.get_mut(uid) {
            Some(record) => {
                update(record);
                debug!(
                    "Claim offer {} is now status: {}, claim request status: {}",
                    uid, record.status, record.claim_request_status
                );
            }
            None => warn!("Ignoring event for unknown claim offer {}", uid),
        }
    }
}
