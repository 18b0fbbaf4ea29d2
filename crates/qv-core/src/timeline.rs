use crate::dimension::{DimensionTheme, resolve_theme};
use crate::model::Achievement;

/// Title prefix the server uses for achievements minted by quest completion.
pub const QUEST_COMPLETE_PREFIX: &str = "Quest Complete:";

/// A single annotated entry in the feed.
#[derive(Debug)]
pub struct FeedItem<'a> {
    /// The underlying achievement record.
    pub achievement: &'a Achievement,
    /// True when the title carries the quest-completion prefix. Changes the
    /// visual treatment (node color, card background), not the position.
    pub quest_completion: bool,
}

/// What a renderer should show beside the entry.
#[derive(Debug, PartialEq, Eq)]
pub enum Visual<'a> {
    /// The achievement image at this URL.
    Image(&'a str),
    /// The dimension-themed icon fallback.
    Icon(&'static DimensionTheme),
}

impl<'a> FeedItem<'a> {
    /// The display theme for this entry's dimension.
    pub fn theme(&self) -> &'static DimensionTheme {
        resolve_theme(self.achievement.dimension.as_deref())
    }

    /// Resolve the entry's visual. `probe` is asked whether the image URL
    /// actually loads; a failed probe or a missing image degrades silently
    /// to the themed icon. Never an error.
    pub fn visual<F>(&self, probe: F) -> Visual<'a>
    where
        F: FnOnce(&str) -> bool,
    {
        match self.achievement.image_url.as_deref() {
            Some(url) if probe(url) => Visual::Image(url),
            _ => Visual::Icon(self.theme()),
        }
    }
}

/// An ordered, annotated view over a collection of achievements.
///
/// Borrows the input and never mutates it. Ordering is ascending by
/// `date_completed` with ascending id as the deterministic tie-break.
#[derive(Debug)]
pub struct Feed<'a> {
    items: Vec<FeedItem<'a>>,
}

impl<'a> Feed<'a> {
    /// Build the feed from achievements in any order, any size.
    pub fn from_achievements(achievements: &'a [Achievement]) -> Self {
        let mut items: Vec<FeedItem<'a>> = achievements
            .iter()
            .map(|a| FeedItem {
                achievement: a,
                quest_completion: a.title.starts_with(QUEST_COMPLETE_PREFIX),
            })
            .collect();

        items.sort_by_key(|item| (item.achievement.date_completed, item.achievement.id));
        Self { items }
    }

    /// All entries, oldest first.
    pub fn items(&self) -> &[FeedItem<'a>] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there is no history; renderers show the single placeholder.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a connecting segment follows the entry at `index`. The last
    /// entry has none.
    pub fn has_connector(&self, index: usize) -> bool {
        index + 1 < self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AchievementId;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn achievement(title: &str, ts: i64) -> Achievement {
        Achievement {
            id: AchievementId(Uuid::new_v4()),
            title: title.to_string(),
            context: format!("Context for {title}"),
            ai_description: None,
            ai_reward: None,
            image_url: None,
            date_completed: Utc.timestamp_opt(ts, 0).unwrap(),
            dimension: None,
            quest_id: None,
            is_hidden: false,
        }
    }

    #[test]
    fn feed_orders_oldest_first() {
        let records = vec![
            achievement("third", 300),
            achievement("first", 100),
            achievement("second", 200),
        ];
        let feed = Feed::from_achievements(&records);

        let titles: Vec<&str> = feed
            .items()
            .iter()
            .map(|i| i.achievement.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
        // Input order untouched.
        assert_eq!(records[0].title, "third");
    }

    #[test]
    fn equal_timestamps_break_ties_by_id() {
        let mut a = achievement("a", 100);
        let mut b = achievement("b", 100);
        a.id = AchievementId(Uuid::from_u128(2));
        b.id = AchievementId(Uuid::from_u128(1));

        let records = vec![a, b];
        let feed = Feed::from_achievements(&records);
        assert_eq!(feed.items()[0].achievement.title, "b");
        assert_eq!(feed.items()[1].achievement.title, "a");
    }

    #[test]
    fn empty_input_is_the_placeholder_state() {
        let feed = Feed::from_achievements(&[]);
        assert!(feed.is_empty());
        assert_eq!(feed.len(), 0);
    }

    #[test]
    fn quest_completion_prefix_is_exact() {
        let records = vec![
            achievement("Quest Complete: Slay Dragon", 100),
            achievement("quest complete: lowercase", 200),
            achievement("A Quest Complete: not at start", 300),
            achievement("Slay Dragon", 400),
        ];
        let feed = Feed::from_achievements(&records);
        let flags: Vec<bool> = feed.items().iter().map(|i| i.quest_completion).collect();
        assert_eq!(flags, [true, false, false, false]);
    }

    #[test]
    fn last_item_has_no_connector() {
        let records = vec![achievement("a", 1), achievement("b", 2)];
        let feed = Feed::from_achievements(&records);
        assert!(feed.has_connector(0));
        assert!(!feed.has_connector(1));
    }

    #[test]
    fn visual_prefers_a_loadable_image() {
        let mut rec = achievement("pictured", 1);
        rec.image_url = Some("https://example.com/card.png".to_string());
        let records = vec![rec];
        let feed = Feed::from_achievements(&records);

        let visual = feed.items()[0].visual(|_| true);
        assert_eq!(visual, Visual::Image("https://example.com/card.png"));
    }

    #[test]
    fn failed_image_probe_degrades_to_themed_icon() {
        let mut rec = achievement("broken image", 1);
        rec.image_url = Some("https://example.com/404.png".to_string());
        rec.dimension = Some("physical".to_string());
        let records = vec![rec];
        let feed = Feed::from_achievements(&records);

        match feed.items()[0].visual(|_| false) {
            Visual::Icon(theme) => assert_eq!(theme.key, "physical"),
            Visual::Image(_) => panic!("expected icon fallback"),
        }
    }

    #[test]
    fn missing_image_uses_default_scroll_icon() {
        let records = vec![achievement("plain", 1)];
        let feed = Feed::from_achievements(&records);

        match feed.items()[0].visual(|_| true) {
            Visual::Icon(theme) => assert_eq!(theme.key, "default"),
            Visual::Image(_) => panic!("expected icon fallback"),
        }
    }

    #[test]
    fn re_sorting_rendered_order_is_idempotent() {
        let records = vec![
            achievement("c", 300),
            achievement("a", 100),
            achievement("b", 100),
        ];
        let feed = Feed::from_achievements(&records);

        let rendered: Vec<Achievement> = feed
            .items()
            .iter()
            .map(|i| i.achievement.clone())
            .collect();
        let second = Feed::from_achievements(&rendered);

        let first_ids: Vec<_> = feed.items().iter().map(|i| i.achievement.id).collect();
        let second_ids: Vec<_> = second.items().iter().map(|i| i.achievement.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn arb_achievement()(ts in 0i64..4_000_000_000, quest in any::<bool>()) -> Achievement {
                let title = if quest {
                    "Quest Complete: something".to_string()
                } else {
                    "something".to_string()
                };
                achievement(&title, ts)
            }
        }

        proptest! {
            #[test]
            fn ordering_is_non_decreasing(records in prop::collection::vec(arb_achievement(), 0..64)) {
                let feed = Feed::from_achievements(&records);
                for pair in feed.items().windows(2) {
                    prop_assert!(
                        pair[0].achievement.date_completed <= pair[1].achievement.date_completed
                    );
                }
                prop_assert_eq!(feed.len(), records.len());
            }
        }
    }
}
