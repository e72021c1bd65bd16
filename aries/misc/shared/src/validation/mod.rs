pub mod did;
pub mod url;
