#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod errors;
pub mod http_client;
pub mod validation;
