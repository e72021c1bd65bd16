//! DIDs shared by the claim offer test suites. All of them are valid
//! unqualified sov DIDs (base58 of 16 bytes).

pub const ISSUER_DID: &str = "V4SGRU86Z58d6TV7PBUe6f";
pub const REMOTE_PAIRWISE_DID: &str = "8XFh8yBzrpJQmNyZzgoTqB";
pub const USER_PAIRWISE_DID: &str = "VsKV7grR1BUE29mG2Fm2kX";
pub const UNKNOWN_REMOTE_DID: &str = "2hoqvcwupRTUNkXn6ArYzs";
pub const AGENCY_URL: &str = "https://agency.example.org/agency/msg";
