use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use claim_offer::{
    collaborators::{
        claim_request::{ClaimRequestBlob, ClaimRequestGenerator, IssuerDescriptor},
        transport::{AgencyTransport, ClaimRequestPayload},
    },
    errors::custom_error::CustomError,
};
use tokio::sync::Notify;

pub struct StaticClaimRequestGenerator {
    result: Result<ClaimRequestBlob, CustomError>,
    requests: Mutex<Vec<(String, IssuerDescriptor)>>,
}

impl StaticClaimRequestGenerator {
    pub fn succeeding(claim_request: &str) -> Self {
        Self {
            result: Ok(ClaimRequestBlob::new(claim_request)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CustomError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, IssuerDescriptor)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClaimRequestGenerator for StaticClaimRequestGenerator {
    async fn generate_claim_request(
        &self,
        remote_did: &str,
        issuer: &IssuerDescriptor,
    ) -> Result<ClaimRequestBlob, CustomError> {
        self.requests
            .lock()
            .unwrap()
            .push((remote_did.to_string(), issuer.clone()));
        self.result.clone()
    }
}

/// Transport that records every payload and answers with a fixed result.
pub struct RecordingTransport {
    result: Result<(), CustomError>,
    sent: Mutex<Vec<ClaimRequestPayload>>,
}

impl RecordingTransport {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CustomError) -> Self {
        Self {
            result: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ClaimRequestPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgencyTransport for RecordingTransport {
    async fn send_claim_request(&self, payload: &ClaimRequestPayload) -> Result<(), CustomError> {
        self.sent.lock().unwrap().push(payload.clone());
        self.result.clone()
    }
}

/// Holds the first submission until [`GatedTransport::release`] is called and
/// then fails it with `first_error`. Later submissions succeed right away.
pub struct GatedTransport {
    first_error: CustomError,
    calls: AtomicUsize,
    sent: Mutex<Vec<ClaimRequestPayload>>,
    entered: Notify,
    gate: Notify,
}

impl GatedTransport {
    pub fn new(first_error: CustomError) -> Self {
        Self {
            first_error,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            entered: Notify::new(),
            gate: Notify::new(),
        }
    }

    /// Resolves once the first submission is parked at the gate.
    pub async fn first_call_parked(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn sent(&self) -> Vec<ClaimRequestPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgencyTransport for GatedTransport {
    async fn send_claim_request(&self, payload: &ClaimRequestPayload) -> Result<(), CustomError> {
        self.sent.lock().unwrap().push(payload.clone());
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.gate.notified().await;
            return Err(self.first_error.clone());
        }
        Ok(())
    }
}
