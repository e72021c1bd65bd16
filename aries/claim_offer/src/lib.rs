#![allow(clippy::result_large_err)]

#[macro_use]
extern crate log;

pub mod collaborators;
pub mod errors;
pub mod orchestrator;
pub mod payload;
pub mod store;
pub mod supervisor;

pub use orchestrator::{AcceptOutcome, AcceptanceOrchestrator};
pub use store::{events::ClaimOfferEvent, state::ClaimOfferState, ClaimOfferStore};
pub use supervisor::LatestAcceptSupervisor;
