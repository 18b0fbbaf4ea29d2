use chrono::{NaiveDate, TimeZone, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qv_client::NewAchievement;
use qv_core::{Achievement, AchievementId, Dimension, QuestId, resolve_theme};

use super::format_timestamp;

pub fn list(api_url: &str) -> Result<(), String> {
    let client = super::client(api_url)?;
    let achievements = client.achievements().map_err(|e| e.to_string())?;

    if achievements.is_empty() {
        println!("  No achievements yet. Go get 'em!");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Date", "Dimension", "Context"]);

    for achievement in &achievements {
        table.add_row(vec![
            achievement.id.to_string(),
            achievement.title.clone(),
            format_timestamp(&achievement.date_completed),
            achievement
                .dimension
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            achievement.context.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} achievements", achievements.len());
    Ok(())
}

pub fn log(
    api_url: &str,
    title: &str,
    context: &str,
    dimension: Option<Dimension>,
    date: Option<&str>,
    quest: Option<QuestId>,
) -> Result<(), String> {
    let date_completed = match date {
        None => Utc::now(),
        Some(raw) => {
            let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("invalid date \"{raw}\", expected YYYY-MM-DD"))?;
            Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap_or_default())
        }
    };

    let client = super::client(api_url)?;
    let achievement = client
        .log_achievement(&NewAchievement {
            title: title.to_string(),
            context: context.to_string(),
            date_completed,
            dimension: dimension.map(|d| d.name().to_string()),
            quest_id: quest,
            image_url: None,
        })
        .map_err(|e| e.to_string())?;

    println!(
        "Achievement logged: {} ({})",
        achievement.title.bold(),
        achievement.id
    );
    if let Some(desc) = &achievement.ai_description {
        println!("  \"{}\"", desc.italic());
    }
    if let Some(reward) = &achievement.ai_reward {
        println!("  Reward: {reward}");
    }
    Ok(())
}

pub fn show(api_url: &str, id: AchievementId) -> Result<(), String> {
    let client = super::client(api_url)?;
    let achievement = client.achievement(id).map_err(|e| e.to_string())?;
    print_achievement(&achievement);
    Ok(())
}

fn print_achievement(achievement: &Achievement) {
    let theme = resolve_theme(achievement.dimension.as_deref());

    println!("{} {}", theme.icon, achievement.title.bold());
    println!("  id:        {}", achievement.id.0);
    println!(
        "  completed: {}",
        format_timestamp(&achievement.date_completed)
    );
    if let Some(dimension) = &achievement.dimension {
        println!("  dimension: {dimension}");
    }
    println!("  context:   {}", achievement.context);
    if let Some(desc) = &achievement.ai_description {
        println!("  \"{}\"", desc.italic());
    }
    if let Some(reward) = &achievement.ai_reward {
        println!("  reward:    {reward}");
    }
    if let Some(url) = &achievement.image_url {
        println!("  image:     {url}");
    }
    if let Some(quest_id) = achievement.quest_id {
        println!("  quest:     {}", quest_id.0);
    }
}
