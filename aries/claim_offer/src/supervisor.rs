use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;

use crate::{
    errors::error::prelude::*,
    orchestrator::{AcceptOutcome, AcceptanceOrchestrator},
    store::{events::ClaimOfferEvent, ClaimOfferDispatcher, ClaimOfferStore},
};

fn lock_generation(generation: &Mutex<u64>) -> ClaimOfferResult<MutexGuard<'_, u64>> {
    generation.lock().map_err(|err| {
        error!("Unable to lock accept generation: {:?}", err);
        err_msg(
            ClaimOfferErrorKind::LockError,
            format!("Unable to lock accept generation: {err}"),
        )
    })
}

/// Forwards the events of one accept run to the store for as long as that run
/// is the latest one. The generation lock is held while forwarding, so a newer
/// `accept` either happens before the event is checked or after it is applied.
struct RunGuard {
    generation: u64,
    current: Arc<Mutex<u64>>,
    store: Arc<ClaimOfferStore>,
}

impl ClaimOfferDispatcher for RunGuard {
    fn dispatch(&self, event: ClaimOfferEvent) -> ClaimOfferResult<()> {
        let current = lock_generation(&self.current)?;
        if *current != self.generation {
            warn!(
                "Dropping {} for {}, run {} was superseded by run {}",
                event.name(),
                event.uid(),
                self.generation,
                *current
            );
            return Err(err_msg(
                ClaimOfferErrorKind::Superseded,
                format!("Accept run {} was superseded", self.generation),
            ));
        }
        self.store.dispatch(event)
    }

    fn is_active(&self) -> bool {
        lock_generation(&self.current)
            .map(|current| *current == self.generation)
            .unwrap_or(false)
    }
}

#[derive(Debug)]
struct ActiveRun {
    generation: u64,
    uid: String,
    handle: JoinHandle<()>,
}

/// Gate in front of [`AcceptanceOrchestrator`]: every accepted claim offer
/// starts a fresh run and cancels whichever run was started before it.
#[derive(Debug)]
pub struct LatestAcceptSupervisor {
    store: Arc<ClaimOfferStore>,
    orchestrator: Arc<AcceptanceOrchestrator>,
    generation: Arc<Mutex<u64>>,
    active: Mutex<Option<ActiveRun>>,
}

impl LatestAcceptSupervisor {
    pub fn new(store: Arc<ClaimOfferStore>, orchestrator: Arc<AcceptanceOrchestrator>) -> Self {
        Self {
            store,
            orchestrator,
            generation: Arc::new(Mutex::new(0)),
            active: Mutex::new(None),
        }
    }

    fn lock_active(&self) -> ClaimOfferResult<MutexGuard<'_, Option<ActiveRun>>> {
        self.active.lock().map_err(|err| {
            error!("Unable to lock active accept run: {:?}", err);
            err_msg(
                ClaimOfferErrorKind::LockError,
                format!("Unable to lock active accept run: {err}"),
            )
        })
    }

    /// Records `Accepted(uid)` and starts the accept flow for it on the current
    /// tokio runtime. Once this returns, no event of an earlier run reaches the
    /// store anymore.
    ///
    /// Fails with `NotFound` for an unknown `uid`, in which case the active run
    /// is left alone.
    pub fn accept(&self, uid: &str) -> ClaimOfferResult<()> {
        trace!("LatestAcceptSupervisor::accept >>> uid: {}", uid);
        if !self.store.contains(uid) {
            return Err(err_msg(
                ClaimOfferErrorKind::NotFound,
                format!("Cannot accept claim offer, not found for uid: {uid}"),
            ));
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|err| {
            err_msg(
                ClaimOfferErrorKind::InvalidState,
                format!("Claim offers can only be accepted within a tokio runtime: {err}"),
            )
        })?;

        let mut active = self.lock_active()?;
        let generation = {
            let mut current = lock_generation(&self.generation)?;
            *current += 1;
            *current
        };
        self.store.dispatch(ClaimOfferEvent::accepted(uid))?;

        let guard = RunGuard {
            generation,
            current: self.generation.clone(),
            store: self.store.clone(),
        };
        let orchestrator = self.orchestrator.clone();
        let run_uid = uid.to_string();
        let handle = runtime.spawn(async move {
            match orchestrator.claim_offer_accepted(&run_uid, &guard).await {
                Ok(AcceptOutcome::ClaimRequestSent) => {
                    info!("Accept run {} for {} finished", generation, run_uid)
                }
                Ok(AcceptOutcome::ClaimRequestFailed(err)) => {
                    warn!(
                        "Accept run {} for {} finished with failure: {}",
                        generation, run_uid, err
                    )
                }
                Err(err) if err.kind() == ClaimOfferErrorKind::Superseded => {
                    info!("Accept run {} for {} superseded", generation, run_uid)
                }
                Err(err) => error!("Accept run {} for {} failed: {}", generation, run_uid, err),
            }
        });

        let previous = active.replace(ActiveRun {
            generation,
            uid: uid.to_string(),
            handle,
        });
        if let Some(previous) = previous {
            if !previous.handle.is_finished() {
                info!(
                    "Cancelling accept run {} for {} in favour of run {} for {}",
                    previous.generation, previous.uid, generation, uid
                );
            }
            previous.handle.abort();
        }
        Ok(())
    }

    /// `uid` of the most recently started run, whether or not it has finished.
    pub fn active_uid(&self) -> Option<String> {
        self.lock_active()
            .ok()
            .and_then(|active| active.as_ref().map(|run| run.uid.clone()))
    }

    /// Waits until the most recently started run has finished.
    pub async fn settle(&self) -> ClaimOfferResult<()> {
        let run = self.lock_active()?.take();
        let Some(run) = run else {
            return Ok(());
        };
        run.handle.await.map_err(|err| {
            err_msg(
                ClaimOfferErrorKind::InvalidState,
                format!("Accept run {} for {} did not complete: {err}", run.generation, run.uid),
            )
        })
    }
}

impl Drop for LatestAcceptSupervisor {
    fn drop(&mut self) {
        if let Ok(mut active) = self.active.lock() {
            if let Some(run) = active.take() {
                run.handle.abort();
            }
        }
    }
}
