//! The HTTP client for the QuestVault API.
//!
//! A thin blocking wrapper around `reqwest`: every method is one request,
//! the bearer token is attached as a header once present, and non-success
//! statuses are mapped to [`ClientError::Api`] with the server's `detail`
//! message when it sends one.

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use qv_core::{Achievement, AchievementId, Profile, Quest, QuestId, QuestStatus};

use crate::error::{ClientError, ClientResult};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Fields accepted when creating a quest.
#[derive(Debug, Clone, Serialize)]
pub struct NewQuest {
    /// Quest title.
    pub title: String,
    /// Life dimension tag.
    pub dimension: String,
    /// What counts as done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victory_condition: Option<String>,
    /// Freeform tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Fields accepted when logging an achievement.
#[derive(Debug, Clone, Serialize)]
pub struct NewAchievement {
    /// Achievement title.
    pub title: String,
    /// Narrative context.
    pub context: String,
    /// When it was completed.
    pub date_completed: DateTime<Utc>,
    /// Life dimension tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    /// Quest this belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quest_id: Option<QuestId>,
    /// Card image URL, if the user supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial update for a quest; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestPatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New victory condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victory_condition: Option<String>,
    /// New status. Moving to `completed` makes the server mint a
    /// "Quest Complete: …" achievement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestStatus>,
}

/// Which collection a bulk visibility toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTarget {
    /// All of the user's quests.
    Quests,
    /// All of the user's achievements.
    Achievements,
}

impl VisibilityTarget {
    /// URL path segment for this target.
    pub fn path(self) -> &'static str {
        match self {
            VisibilityTarget::Quests => "quests",
            VisibilityTarget::Achievements => "achievements",
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
}

#[derive(Serialize)]
struct BulkVisibilityBody {
    is_hidden: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Issues requests against one QuestVault API instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach (or clear) the bearer token used for authenticated endpoints.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token, failing when none is stored.
    fn authed(&self, builder: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self
            .token
            .as_deref()
            .ok_or(ClientError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    /// Exchange credentials for a bearer token.
    pub fn login(&self, username: &str, password: &str) -> ClientResult<String> {
        let response = self
            .http
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()?;
        let body: TokenResponse = check(response)?.json()?;
        Ok(body.access_token)
    }

    /// Create a new account.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> ClientResult<()> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&RegisterBody {
                username,
                password,
                display_name,
            })
            .send()?;
        check(response)?;
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    pub fn profile(&self) -> ClientResult<Profile> {
        let response = self.authed(self.http.get(self.url("/profile")))?.send()?;
        Ok(check(response)?.json()?)
    }

    /// Fetch a public profile by username. No token required.
    pub fn public_profile(&self, username: &str) -> ClientResult<Profile> {
        let response = self
            .http
            .get(self.url(&format!("/public/profile/{username}")))
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Fetch all of the user's quests.
    pub fn quests(&self) -> ClientResult<Vec<Quest>> {
        let response = self.authed(self.http.get(self.url("/quests")))?.send()?;
        Ok(check(response)?.json()?)
    }

    /// Fetch one quest by id.
    pub fn quest(&self, id: QuestId) -> ClientResult<Quest> {
        let response = self
            .authed(self.http.get(self.url(&format!("/quests/{}", id.0))))?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Create a quest.
    pub fn create_quest(&self, quest: &NewQuest) -> ClientResult<Quest> {
        let response = self
            .authed(self.http.post(self.url("/quests")).json(quest))?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Apply a partial update to a quest.
    pub fn update_quest(&self, id: QuestId, patch: &QuestPatch) -> ClientResult<Quest> {
        let response = self
            .authed(
                self.http
                    .patch(self.url(&format!("/quests/{}", id.0)))
                    .json(patch),
            )?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Mark a quest completed.
    pub fn complete_quest(&self, id: QuestId) -> ClientResult<Quest> {
        self.update_quest(
            id,
            &QuestPatch {
                status: Some(QuestStatus::Completed),
                ..QuestPatch::default()
            },
        )
    }

    /// Delete a quest.
    pub fn delete_quest(&self, id: QuestId) -> ClientResult<()> {
        let response = self
            .authed(self.http.delete(self.url(&format!("/quests/{}", id.0))))?
            .send()?;
        check(response)?;
        Ok(())
    }

    /// Fetch all of the user's achievements.
    pub fn achievements(&self) -> ClientResult<Vec<Achievement>> {
        let response = self
            .authed(self.http.get(self.url("/achievements")))?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Fetch one achievement by id.
    pub fn achievement(&self, id: AchievementId) -> ClientResult<Achievement> {
        let response = self
            .authed(self.http.get(self.url(&format!("/achievements/{}", id.0))))?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Fetch a publicly visible achievement by id. No token required.
    pub fn public_achievement(&self, id: AchievementId) -> ClientResult<Achievement> {
        let response = self
            .http
            .get(self.url(&format!("/public/achievements/{}", id.0)))
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Log a new achievement.
    pub fn log_achievement(&self, achievement: &NewAchievement) -> ClientResult<Achievement> {
        let response = self
            .authed(self.http.post(self.url("/achievements")).json(achievement))?
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// Hide or show an entire collection on the public profile.
    pub fn set_bulk_visibility(
        &self,
        target: VisibilityTarget,
        hidden: bool,
    ) -> ClientResult<()> {
        let response = self
            .authed(
                self.http
                    .post(self.url(&format!("/{}/bulk-visibility", target.path())))
                    .json(&BulkVisibilityBody { is_hidden: hidden }),
            )?
            .send()?;
        check(response)?;
        Ok(())
    }

    /// Whether an achievement image URL actually loads. Used as the probe
    /// for the feed's visual fallback; any failure is reported as `false`,
    /// never as an error.
    pub fn probe_image(&self, url: &str) -> bool {
        self.http
            .head(url)
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Destructive full-data reset for the authenticated user.
    pub fn reset(&self) -> ClientResult<()> {
        let response = self.authed(self.http.post(self.url("/reset")))?.send()?;
        check(response)?;
        Ok(())
    }
}

/// Map a non-success response to [`ClientError::Api`].
fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: extract_detail(&body),
    })
}

/// Pull the `detail` field out of an error body, falling back to the raw
/// text.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/quests"), "http://localhost:8000/quests");
    }

    #[test]
    fn authed_without_token_fails() {
        let client = ApiClient::new(DEFAULT_API_URL).unwrap();
        let err = client.quests().unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
    }

    #[test]
    fn extract_detail_prefers_json_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Quest not found"}"#),
            "Quest not found"
        );
        assert_eq!(extract_detail("plain text"), "plain text");
    }

    #[test]
    fn visibility_target_paths() {
        assert_eq!(VisibilityTarget::Quests.path(), "quests");
        assert_eq!(VisibilityTarget::Achievements.path(), "achievements");
    }

    #[test]
    fn quest_patch_serializes_only_set_fields() {
        let patch = QuestPatch {
            status: Some(QuestStatus::Completed),
            ..QuestPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"status":"completed"}"#);
    }

    #[test]
    fn new_quest_omits_empty_optionals() {
        let quest = NewQuest {
            title: "Slay Dragon".to_string(),
            dimension: "physical".to_string(),
            victory_condition: None,
            tags: Vec::new(),
        };
        let json = serde_json::to_string(&quest).unwrap();
        assert_eq!(json, r#"{"title":"Slay Dragon","dimension":"physical"}"#);
    }
}
