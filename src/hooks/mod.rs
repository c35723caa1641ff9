pub mod use_follow_toggle;
pub mod use_infinite_scroll;

pub use use_follow_toggle::{use_follow_toggle, UseFollowToggle};
pub use use_infinite_scroll::use_infinite_scroll;
