use gloo_net::http::{Request, Response};
use url::form_urlencoded;

use crate::services::error::{WidgetError, WidgetResult};
use crate::stores::follow_toggle::{FollowDirection, FollowResponse};

/// Header the server uses to tell widget requests from page loads
const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Form field holding the CSRF token
const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Which side of the follow relationship a user list shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserListKind {
    /// Users following the profile owner
    FollowersOf,
    /// Users the profile owner follows
    FollowedBy,
}

impl UserListKind {
    pub fn query_key(&self) -> &'static str {
        match self {
            UserListKind::FollowersOf => "followers_of",
            UserListKind::FollowedBy => "followed_by",
        }
    }

    /// Header shown next to the count, reused as the modal title
    pub fn label(&self) -> &'static str {
        match self {
            UserListKind::FollowersOf => "Followers",
            UserListKind::FollowedBy => "Following",
        }
    }
}

/// A follow/unfollow submission
#[derive(Clone, Debug, PartialEq)]
pub struct FollowForm {
    pub action: String,
    pub direction: FollowDirection,
    pub username: String,
    pub csrf_token: Option<String>,
}

impl FollowForm {
    /// Urlencoded body, `<direction>=<username>` plus the CSRF token
    pub fn body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(token) = &self.csrf_token {
            serializer.append_pair(CSRF_FIELD, token);
        }
        serializer.append_pair(self.direction.as_str(), &self.username);
        serializer.finish()
    }
}

pub fn user_list_url(endpoint: &str, kind: UserListKind, username: &str) -> String {
    format!("{}?{}={}", endpoint, kind.query_key(), urlencoding::encode(username))
}

/// URL of the first activity page for an owner
pub fn activities_url(endpoint: &str, owner_id: u64) -> String {
    format!("{}?owner_id={}", endpoint, owner_id)
}

/// Fixed query suffix the paginator appends to every page request
pub fn owner_query_suffix(owner_id: u64) -> String {
    format!("&owner_id={}", owner_id)
}

pub fn page_url(endpoint: &str, page: u32, query_suffix: &str) -> String {
    format!("{}?page={}{}", endpoint, page, query_suffix)
}

fn ensure_ok(response: &Response) -> WidgetResult<()> {
    if !response.ok() {
        return Err(WidgetError::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(())
}

async fn fetch_html(url: &str) -> WidgetResult<String> {
    let response = Request::get(url)
        .header(AJAX_HEADER.0, AJAX_HEADER.1)
        .send()
        .await?;

    ensure_ok(&response)?;

    response
        .text()
        .await
        .map_err(|e| WidgetError::Decode(e.to_string()))
}

/// Submit the follow form and decode the toggle response
pub async fn submit_follow(form: &FollowForm) -> WidgetResult<FollowResponse> {
    log::debug!("Submitting {} for {}", form.direction.as_str(), form.username);

    let response = Request::post(&form.action)
        .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
        .header(AJAX_HEADER.0, AJAX_HEADER.1)
        .body(form.body())?
        .send()
        .await?;

    ensure_ok(&response)?;

    response
        .json::<FollowResponse>()
        .await
        .map_err(|e| WidgetError::Decode(e.to_string()))
}

/// Fetch the pre-rendered followers/following list for a user
pub async fn fetch_user_list(endpoint: &str, kind: UserListKind, username: &str) -> WidgetResult<String> {
    fetch_html(&user_list_url(endpoint, kind, username)).await
}

/// Fetch one pre-rendered page of the activity feed
pub async fn fetch_activities_page(url: &str) -> WidgetResult<String> {
    log::debug!("Fetching activities: {}", url);
    fetch_html(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_list_url() {
        assert_eq!(
            user_list_url("/ajax/users/", UserListKind::FollowersOf, "alice"),
            "/ajax/users/?followers_of=alice"
        );
        assert_eq!(
            user_list_url("/ajax/users/", UserListKind::FollowedBy, "bob smith"),
            "/ajax/users/?followed_by=bob%20smith"
        );
    }

    #[test]
    fn test_activity_urls_share_owner_suffix() {
        assert_eq!(activities_url("/ajax/activities/", 42), "/ajax/activities/?owner_id=42");
        let suffix = owner_query_suffix(42);
        assert_eq!(page_url("/ajax/activities/", 2, &suffix), "/ajax/activities/?page=2&owner_id=42");
    }

    #[test]
    fn test_follow_form_body() {
        let form = FollowForm {
            action: "/user/alice/".to_string(),
            direction: FollowDirection::Unfollow,
            username: "alice".to_string(),
            csrf_token: Some("tok&en".to_string()),
        };
        assert_eq!(form.body(), "csrfmiddlewaretoken=tok%26en&unfollow=alice");

        let anonymous = FollowForm { csrf_token: None, direction: FollowDirection::Follow, ..form };
        assert_eq!(anonymous.body(), "follow=alice");
    }
}
