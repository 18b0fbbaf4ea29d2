use colored::Colorize;

use qv_core::timeline::{Feed, FeedItem, Visual};

use super::{format_timestamp, token_color};

pub fn run(api_url: &str) -> Result<(), String> {
    let client = super::client(api_url)?;
    let achievements = client.achievements().map_err(|e| e.to_string())?;

    let feed = Feed::from_achievements(&achievements);
    if feed.is_empty() {
        println!("  {}", "No history recorded yet.".italic());
        return Ok(());
    }

    for (index, item) in feed.items().iter().enumerate() {
        let achievement = item.achievement;
        let theme = item.theme();

        let visual = match item.visual(|url| client.probe_image(url)) {
            Visual::Image(url) => format!("{} {}", theme.icon, url.dimmed()),
            Visual::Icon(theme) => theme.icon.to_string(),
        };

        println!("{}", heading_line(item, &visual));

        let gutter = if feed.has_connector(index) { "│" } else { " " };
        println!("{gutter}   {}", achievement.context);
        if let Some(desc) = &achievement.ai_description {
            println!("{gutter}   \"{}\"", desc.italic());
        }
        if feed.has_connector(index) {
            println!("{gutter}");
        }
    }

    println!();
    println!("  {} achievements, oldest first", feed.len());
    Ok(())
}

/// The entry's heading: node glyph, timestamp, short id, title, visual.
/// The id is the handle into `qv achievement show <id>`.
fn heading_line(item: &FeedItem<'_>, visual: &str) -> String {
    // Quest completions get the gold node; everything else takes its
    // dimension color.
    let node = if item.quest_completion {
        "◆".yellow().bold()
    } else {
        "●".color(token_color(item.theme().color))
    };

    format!(
        "{node} {}  {}  {}  {visual}",
        format_timestamp(&item.achievement.date_completed).dimmed(),
        item.achievement.id.to_string().dimmed(),
        item.achievement.title.bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use qv_core::{Achievement, AchievementId};
    use uuid::Uuid;

    fn achievement() -> Achievement {
        Achievement {
            id: AchievementId(Uuid::from_u128(0xdead_beef_0000_4000_8000_0000_0000_0001)),
            title: "Slay Dragon".to_string(),
            context: "It was big".to_string(),
            ai_description: None,
            ai_reward: None,
            image_url: None,
            date_completed: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            dimension: None,
            quest_id: None,
            is_hidden: false,
        }
    }

    #[test]
    fn heading_carries_the_short_id_and_title() {
        let records = vec![achievement()];
        let feed = Feed::from_achievements(&records);
        let line = heading_line(&feed.items()[0], "📜");

        assert!(line.contains(&records[0].id.to_string()));
        assert!(line.contains("Slay Dragon"));
    }

    #[test]
    fn short_id_matches_the_detail_command_argument() {
        let records = vec![achievement()];
        let feed = Feed::from_achievements(&records);
        let line = heading_line(&feed.items()[0], "📜");

        // The printed handle is the first 8 hex chars of the uuid.
        assert!(line.contains("deadbeef"));
    }
}
