//! Activity feed paginator
//!
//! Page 1 belongs to the tab controller. The paginator takes over from page 2,
//! requesting `<endpoint>?page=<n><suffix>` until the server answers with an
//! empty page.

use crate::services::profile_api::page_url;

/// First page number the paginator requests itself
pub const FIRST_PAGINATED_PAGE: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct PaginatorState {
    endpoint: String,
    query_suffix: String,
    next_page: u32,
    loading: bool,
    exhausted: bool,
    last_error: Option<String>,
}

impl PaginatorState {
    pub fn new(endpoint: impl Into<String>, query_suffix: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_suffix: query_suffix.into(),
            next_page: FIRST_PAGINATED_PAGE,
            loading: false,
            exhausted: false,
            last_error: None,
        }
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a next-page request may start now
    pub fn can_load(&self) -> bool {
        !self.loading && !self.exhausted
    }

    /// Start loading the next page, returning its URL
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_load() {
            return None;
        }
        self.loading = true;
        self.last_error = None;
        Some(page_url(&self.endpoint, self.next_page, &self.query_suffix))
    }

    /// Record a fetched page. Returns true when it carries content to append.
    pub fn page_loaded(&mut self, html: &str) -> bool {
        self.loading = false;
        if html.trim().is_empty() {
            log::debug!("Activity page {} is empty, pagination finished", self.next_page);
            self.exhausted = true;
            return false;
        }
        self.next_page += 1;
        true
    }

    /// Record a failed page; the same page is requested again next time
    pub fn page_failed(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator() -> PaginatorState {
        PaginatorState::new("/ajax/activities/", "&owner_id=7")
    }

    #[test]
    fn test_pages_advance_from_two() {
        let mut p = paginator();
        assert_eq!(p.begin().as_deref(), Some("/ajax/activities/?page=2&owner_id=7"));
        assert!(p.begin().is_none());

        assert!(p.page_loaded("<div>activity</div>"));
        assert_eq!(p.begin().as_deref(), Some("/ajax/activities/?page=3&owner_id=7"));
    }

    #[test]
    fn test_empty_page_ends_pagination() {
        let mut p = paginator();
        p.begin();
        assert!(!p.page_loaded("  \n "));
        assert!(!p.has_more());
        assert!(p.begin().is_none());
    }

    #[test]
    fn test_failed_page_is_retried() {
        let mut p = paginator();
        p.begin();
        p.page_failed("Server returned 500 Internal Server Error");
        assert_eq!(p.last_error(), Some("Server returned 500 Internal Server Error"));
        assert_eq!(p.next_page(), 2);

        assert_eq!(p.begin().as_deref(), Some("/ajax/activities/?page=2&owner_id=7"));
        assert!(p.last_error().is_none());
    }
}
