// UI Components
// Widgets of the profile page

pub mod activity_feed;
pub mod follow_button;
pub mod follow_stats;
pub mod profile_tabs;
pub mod spinner;
pub mod toast;
pub mod user_list_modal;

pub use activity_feed::{enhance_activities, ActivityFeed};
pub use follow_button::FollowButton;
pub use follow_stats::FollowStats;
pub use profile_tabs::ProfileTabs;
pub use spinner::Spinner;
pub use toast::ToastProvider;
pub use user_list_modal::UserListModal;
