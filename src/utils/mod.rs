// Helper functions shared by the profile widgets

pub mod data_state;
pub mod markdown;
pub mod time;

pub use data_state::DataState;
