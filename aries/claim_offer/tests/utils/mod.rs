pub mod fakes;

use std::sync::Arc;

use claim_offer::{
    collaborators::{
        agency_config::{AgencyConfig, SharedAgencyConfig},
        claim_request::ClaimRequestGenerator,
        pairwise::PairwiseConnections,
        transport::AgencyTransport,
    },
    payload::{
        AdditionalData, AdditionalDataPayload, Attribute, Issuer, NotificationPayloadInfo,
    },
    AcceptanceOrchestrator, ClaimOfferEvent, ClaimOfferStore, LatestAcceptSupervisor,
};
use test_utils::constants::{AGENCY_URL, ISSUER_DID, REMOTE_PAIRWISE_DID, USER_PAIRWISE_DID};

pub fn home_address_offer(uid: &str) -> ClaimOfferEvent {
    let payload = AdditionalDataPayload {
        data: AdditionalData::builder()
            .name("Home Address")
            .version("1.0.0")
            .revealed_attributes(vec![
                Attribute::builder()
                    .label("Address 1")
                    .data("Address Address Address")
                    .build(),
                Attribute::builder()
                    .label("Address 2")
                    .data("Address 2 Address 2 Address 2")
                    .build(),
            ])
            .claim_definition_schema_sequence_number(36)
            .build(),
        issuer: Issuer::new("Test Issuer", ISSUER_DID),
        status_msg: None,
    };
    let info = NotificationPayloadInfo {
        uid: uid.to_string(),
        sender_logo_url: "https://logo.example.org/issuer.png".to_string(),
        remote_pairwise_did: REMOTE_PAIRWISE_DID.to_string(),
    };
    ClaimOfferEvent::received(payload, info)
}

/// Everything a wallet wires together to accept claim offers.
pub struct TestWallet {
    pub store: Arc<ClaimOfferStore>,
    pub connections: Arc<PairwiseConnections>,
    pub agency_config: Arc<SharedAgencyConfig>,
    pub supervisor: LatestAcceptSupervisor,
}

impl TestWallet {
    pub fn new(
        generator: Arc<dyn ClaimRequestGenerator>,
        transport: Arc<dyn AgencyTransport>,
    ) -> Self {
        let store = Arc::new(ClaimOfferStore::default());
        let connections = Arc::new(PairwiseConnections::new());
        connections
            .add_connection(REMOTE_PAIRWISE_DID, USER_PAIRWISE_DID)
            .unwrap();
        let agency_config = Arc::new(SharedAgencyConfig::new(
            AgencyConfig::new(AGENCY_URL).unwrap(),
        ));
        let orchestrator = AcceptanceOrchestrator::builder()
            .claim_offers(store.clone())
            .pairwise_directory(connections.clone())
            .claim_request_generator(generator)
            .agency_transport(transport)
            .agency_url(agency_config.clone())
            .build();
        let supervisor = LatestAcceptSupervisor::new(store.clone(), Arc::new(orchestrator));
        Self {
            store,
            connections,
            agency_config,
            supervisor,
        }
    }

    pub fn receive(&self, uid: &str) {
        self.store.dispatch(home_address_offer(uid)).unwrap();
    }
}
