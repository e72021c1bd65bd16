//! Seams to the parts of the wallet the accept flow depends on but does not own.

pub mod agency_config;
pub mod claim_request;
pub mod pairwise;
pub mod transport;
