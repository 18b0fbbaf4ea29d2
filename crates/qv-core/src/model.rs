use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QvError;

/// Unique identifier for an achievement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct AchievementId(pub Uuid);

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl FromStr for AchievementId {
    type Err = QvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| QvError::InvalidId(s.to_string()))
    }
}

/// Unique identifier for a quest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct QuestId(pub Uuid);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl FromStr for QuestId {
    type Err = QvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| QvError::InvalidId(s.to_string()))
    }
}

/// Lifecycle state of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// The quest is still being pursued.
    Active,
    /// The victory condition has been met.
    Completed,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestStatus::Active => write!(f, "active"),
            QuestStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for QuestStatus {
    type Err = QvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(QuestStatus::Active),
            "completed" => Ok(QuestStatus::Completed),
            _ => Err(QvError::UnknownStatus(s.to_string())),
        }
    }
}

/// A user-defined goal with a victory condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    /// Unique id.
    pub id: QuestId,
    /// Short quest title.
    pub title: String,
    /// What counts as done, if defined.
    pub victory_condition: Option<String>,
    /// Current lifecycle state.
    pub status: QuestStatus,
    /// Life dimension this quest is tagged with.
    pub dimension: Option<String>,
    /// Freeform tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the quest is hidden from the public profile.
    #[serde(default)]
    pub is_hidden: bool,
}

/// A logged accomplishment, optionally linked to a quest.
///
/// Owned and mutated only by the external API; the feed in
/// [`crate::timeline`] only ever borrows these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique id.
    pub id: AchievementId,
    /// Short achievement title.
    pub title: String,
    /// Narrative context written by the user.
    pub context: String,
    /// AI-generated flavor description, if the server produced one.
    pub ai_description: Option<String>,
    /// AI-generated reward line, if the server produced one.
    pub ai_reward: Option<String>,
    /// URL of the card image, if any.
    pub image_url: Option<String>,
    /// When the achievement was completed.
    pub date_completed: DateTime<Utc>,
    /// Life dimension this achievement is tagged with.
    pub dimension: Option<String>,
    /// Quest this achievement was minted from, if any.
    pub quest_id: Option<QuestId>,
    /// Whether the achievement is hidden from the public profile.
    #[serde(default)]
    pub is_hidden: bool,
}

/// Per-dimension level, one entry per dimension the user has activity in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionStat {
    /// Raw dimension tag as the API sends it.
    pub dimension: String,
    /// Level reached in that dimension.
    pub level: u32,
}

/// Aggregate counters shown on profile screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Quests currently active.
    pub quests_active: u32,
    /// Quests completed.
    pub quests_completed: u32,
    /// Achievements unlocked.
    pub achievements_unlocked: u32,
}

/// A user profile as returned by `/profile` and `/public/profile/{username}`.
///
/// The public variant additionally carries the full visible quest and
/// achievement collections; for the private variant those default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Account name.
    pub username: String,
    /// Optional display name shown instead of the username.
    pub display_name: Option<String>,
    /// Overall level (one level per five achievements).
    pub level: u32,
    /// Aggregate counters.
    pub stats: ProfileStats,
    /// The most recent achievements, newest last.
    #[serde(default)]
    pub recent_achievements: Vec<Achievement>,
    /// Per-dimension levels used for player classification.
    #[serde(default)]
    pub dimension_stats: Vec<DimensionStat>,
    /// Visible quests (public profiles only).
    #[serde(default)]
    pub quests: Vec<Quest>,
    /// Visible achievements (public profiles only).
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Profile {
    /// The name to show: display name when set, username otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_status_roundtrip() {
        assert_eq!("active".parse::<QuestStatus>().unwrap(), QuestStatus::Active);
        assert_eq!(
            "Completed".parse::<QuestStatus>().unwrap(),
            QuestStatus::Completed
        );
        assert!("done".parse::<QuestStatus>().is_err());
        assert_eq!(QuestStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn achievement_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "3f2b8c1a-0000-4000-8000-000000000001",
            "title": "First Steps",
            "context": "Walked 10k steps",
            "date_completed": "2024-01-05T14:30:00Z"
        }"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(a.title, "First Steps");
        assert!(a.ai_description.is_none());
        assert!(a.image_url.is_none());
        assert!(a.quest_id.is_none());
        assert!(!a.is_hidden);
    }

    #[test]
    fn profile_private_shape() {
        let json = r#"{
            "username": "veteran",
            "display_name": "Princess Donut",
            "level": 3,
            "stats": {"quests_active": 2, "quests_completed": 4, "achievements_unlocked": 11},
            "recent_achievements": []
        }"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.shown_name(), "Princess Donut");
        assert_eq!(p.stats.quests_completed, 4);
        assert!(p.quests.is_empty());
    }

    #[test]
    fn shown_name_falls_back_to_username() {
        let p = Profile {
            username: "noob".to_string(),
            display_name: None,
            level: 1,
            stats: ProfileStats::default(),
            recent_achievements: Vec::new(),
            dimension_stats: Vec::new(),
            quests: Vec::new(),
            achievements: Vec::new(),
        };
        assert_eq!(p.shown_name(), "noob");
    }

    #[test]
    fn id_display_is_short() {
        let id = AchievementId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000");
    }

    #[test]
    fn id_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<QuestId>().is_err());
        assert!(
            "3f2b8c1a-0000-4000-8000-000000000001"
                .parse::<QuestId>()
                .is_ok()
        );
    }
}
