pub mod activity_feed;
pub mod config_store;
pub mod follow_toggle;
pub mod pagination;
pub mod profile_seed;
pub mod toasts;
