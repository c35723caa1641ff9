//! Lazy activities tab
//!
//! The first time the activities tab is shown, page 1 is fetched for the
//! profile owner. Once it arrives the feed is marked loaded and any further
//! paging goes through a [`PaginatorState`]. A failed first fetch leaves the
//! feed unloaded so the next activation tries again.

use crate::services::profile_api::owner_query_suffix;
use crate::stores::pagination::PaginatorState;

/// Tabs of the profile page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    About,
    Activities,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Activities => "Activities",
        }
    }
}

/// Request for the first activity page, handed out at most once per load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstPageRequest {
    pub owner_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityFeedState {
    owner_id: u64,
    loaded: bool,
    fetching: bool,
    pages: Vec<String>,
}

impl ActivityFeedState {
    pub fn new(owner_id: u64) -> Self {
        Self {
            owner_id,
            loaded: false,
            fetching: false,
            pages: Vec::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Rendered pages in display order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// React to a tab becoming visible.
    ///
    /// Only the activities tab of a feed that is neither loaded nor already
    /// fetching yields a request.
    pub fn on_tab_shown(&mut self, tab: ProfileTab) -> Option<FirstPageRequest> {
        if tab != ProfileTab::Activities || self.loaded || self.fetching {
            return None;
        }
        self.fetching = true;
        Some(FirstPageRequest { owner_id: self.owner_id })
    }

    /// Store page 1 and build the paginator for the pages after it
    pub fn first_page_loaded(&mut self, html: String, endpoint: &str) -> PaginatorState {
        self.fetching = false;
        self.loaded = true;
        self.pages = vec![html];
        PaginatorState::new(endpoint, owner_query_suffix(self.owner_id))
    }

    pub fn first_page_failed(&mut self) {
        self.fetching = false;
    }

    /// Append a page delivered by the paginator
    pub fn append_page(&mut self, html: String) {
        self.pages.push(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_requested_once() {
        let mut feed = ActivityFeedState::new(12);
        let mut issued = 0;

        for i in 0..5 {
            if let Some(request) = feed.on_tab_shown(ProfileTab::Activities) {
                assert_eq!(request.owner_id, 12);
                issued += 1;
            }
            if i == 1 {
                feed.first_page_loaded("<li>first</li>".to_string(), "/ajax/activities/");
            }
        }

        assert_eq!(issued, 1);
        assert!(feed.is_loaded());
        assert_eq!(feed.pages().to_vec(), vec!["<li>first</li>".to_string()]);
    }

    #[test]
    fn test_other_tab_never_fetches() {
        let mut feed = ActivityFeedState::new(12);
        assert!(feed.on_tab_shown(ProfileTab::About).is_none());
        assert!(!feed.is_fetching());
    }

    #[test]
    fn test_failure_retries_on_next_activation() {
        let mut feed = ActivityFeedState::new(3);
        assert!(feed.on_tab_shown(ProfileTab::Activities).is_some());
        feed.first_page_failed();
        assert!(!feed.is_loaded());

        assert!(feed.on_tab_shown(ProfileTab::Activities).is_some());
    }

    #[test]
    fn test_paginator_carries_owner_suffix() {
        let mut feed = ActivityFeedState::new(99);
        feed.on_tab_shown(ProfileTab::Activities);
        let mut paginator = feed.first_page_loaded("<li>a</li>".to_string(), "/ajax/activities/");

        assert_eq!(
            paginator.begin().as_deref(),
            Some("/ajax/activities/?page=2&owner_id=99")
        );

        feed.append_page("<li>b</li>".to_string());
        assert_eq!(feed.page_count(), 2);
        assert!(feed.on_tab_shown(ProfileTab::Activities).is_none());
    }
}
