pub mod error;
pub mod profile_api;
