pub mod events;
pub mod record;
pub mod state;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use self::{
    events::ClaimOfferEvent,
    record::{ClaimOfferRecord, ClaimOfferStatus},
    state::ClaimOfferState,
};
use crate::errors::error::prelude::*;

/// Read access to claim offers, as needed by the accept flow.
#[cfg_attr(test, mockall::automock)]
pub trait ClaimOfferLookup: Send + Sync {
    fn lookup_claim_offer(&self, uid: &str) -> Option<ClaimOfferRecord>;
}

/// Sink for claim offer events. The accept flow never touches records
/// directly, it only hands events to one of these.
pub trait ClaimOfferDispatcher: Send + Sync {
    fn dispatch(&self, event: ClaimOfferEvent) -> ClaimOfferResult<()>;

    /// Whether events handed to this dispatcher still reach the store.
    fn is_active(&self) -> bool {
        true
    }
}

/// Owns every claim offer record. All writes go through [`ClaimOfferStore::dispatch`],
/// which folds one event at a time under the write lock.
#[derive(Debug)]
pub struct ClaimOfferStore {
    store_name: String,
    state: RwLock<ClaimOfferState>,
}

impl Default for ClaimOfferStore {
    fn default() -> Self {
        Self::new("claim-offers")
    }
}

impl ClaimOfferStore {
    pub fn new(store_name: &str) -> Self {
        Self::from_state(store_name, ClaimOfferState::new())
    }

    pub fn from_state(store_name: &str, state: ClaimOfferState) -> Self {
        Self {
            store_name: store_name.to_string(),
            state: RwLock::new(state),
        }
    }

    fn lock_state_read(&self) -> ClaimOfferResult<RwLockReadGuard<'_, ClaimOfferState>> {
        self.state.read().map_err(|err| {
            error!("Unable to read-lock claim offer store: {:?}", err);
            ClaimOfferError::from_msg(
                ClaimOfferErrorKind::LockError,
                format!("[ClaimOfferStore: {}] Unable to lock store: {err}", self.store_name),
            )
        })
    }

    fn lock_state_write(&self) -> ClaimOfferResult<RwLockWriteGuard<'_, ClaimOfferState>> {
        self.state.write().map_err(|err| {
            error!("Unable to write-lock claim offer store: {:?}", err);
            ClaimOfferError::from_msg(
                ClaimOfferErrorKind::LockError,
                format!("[ClaimOfferStore: {}] Unable to lock store: {err}", self.store_name),
            )
        })
    }

    /// Applies `event`. Fails with `NotFound`, leaving the store untouched, when
    /// the event targets a claim offer that was never received.
    pub fn dispatch(&self, event: ClaimOfferEvent) -> ClaimOfferResult<()> {
        trace!(
            "ClaimOfferStore::dispatch >>> event: {}, uid: {}",
            event.name(),
            event.uid()
        );
        let mut state = self.lock_state_write()?;
        if !event.creates_record() && !state.contains(event.uid()) {
            return Err(ClaimOfferError::from_msg(
                ClaimOfferErrorKind::NotFound,
                format!(
                    "[ClaimOfferStore: {}] Cannot apply {}, claim offer not found for uid: {}",
                    self.store_name,
                    event.name(),
                    event.uid()
                ),
            ));
        }
        let current = std::mem::take(&mut *state);
        *state = current.reduce(event);
        Ok(())
    }

    pub fn get_claim_offer(&self, uid: &str) -> ClaimOfferResult<ClaimOfferRecord> {
        let state = self.lock_state_read()?;
        state.get(uid).cloned().ok_or_else(|| {
            ClaimOfferError::from_msg(
                ClaimOfferErrorKind::NotFound,
                format!(
                    "[ClaimOfferStore: {}] Claim offer not found for uid: {}",
                    self.store_name, uid
                ),
            )
        })
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.lock_state_read()
            .map(|state| state.contains(uid))
            .unwrap_or(false)
    }

    pub fn claim_offers(&self) -> ClaimOfferResult<Vec<ClaimOfferRecord>> {
        let state = self.lock_state_read()?;
        Ok(state.records().cloned().collect())
    }

    /// Offers currently in `status`, e.g. the ones received but not yet shown.
    pub fn claim_offers_with_status(
        &self,
        status: ClaimOfferStatus,
    ) -> ClaimOfferResult<Vec<ClaimOfferRecord>> {
        let state = self.lock_state_read()?;
        Ok(state
            .records()
            .filter(|record| record.status == status)
            .cloned()
            .collect())
    }

    /// Serializes every record so the wallet can persist them between sessions.
    pub fn snapshot(&self) -> ClaimOfferResult<String> {
        let state = self.lock_state_read()?;
        Ok(serde_json::to_string(&*state)?)
    }

    /// Replaces the whole store content with a previously taken snapshot.
    pub fn restore(&self, snapshot: &str) -> ClaimOfferResult<()> {
        let restored: ClaimOfferState = serde_json::from_str(snapshot).map_err(|err| {
            ClaimOfferError::from(err).extend(format!(
                "[ClaimOfferStore: {}] Unable to restore snapshot",
                self.store_name
            ))
        })?;
        debug!(
            "Restoring {} claim offers into store {}",
            restored.len(),
            self.store_name
        );
        *self.lock_state_write()? = restored;
        Ok(())
    }
}

impl ClaimOfferLookup for ClaimOfferStore {
    fn lookup_claim_offer(&self, uid: &str) -> Option<ClaimOfferRecord> {
        self.get_claim_offer(uid).ok()
    }
}

impl ClaimOfferDispatcher for ClaimOfferStore {
    fn dispatch(&self, event: ClaimOfferEvent) -> ClaimOfferResult<()> {
        ClaimOfferStore::dispatch(self, event)
    }
}
