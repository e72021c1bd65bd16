mod convertors;
pub mod custom_error;
pub mod error;
