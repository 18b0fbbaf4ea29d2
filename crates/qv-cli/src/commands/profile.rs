use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qv_core::{Profile, classify, resolve_theme};

use super::{format_timestamp, token_color};

pub fn run(api_url: &str, username: Option<&str>) -> Result<(), String> {
    let client = super::client(api_url)?;
    let profile = match username {
        Some(name) => client.public_profile(name),
        None => client.profile(),
    }
    .map_err(|e| e.to_string())?;

    print_header(&profile);
    print_stats(&profile);
    print_dimensions(&profile);
    print_recent(&profile);

    if username.is_some() {
        print_public_collections(&profile);
    }
    Ok(())
}

fn print_header(profile: &Profile) {
    let class = classify(&profile.dimension_stats);

    println!("{}", profile.shown_name().bold());
    if profile.display_name.is_some() {
        println!("@{}", profile.username.dimmed());
    }
    println!(
        "Level {} {} — {}",
        profile.level,
        class.name.bold(),
        class.flavor.italic()
    );
    println!();
}

fn print_stats(profile: &Profile) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Active Quests", "Completed", "Achievements"]);
    table.add_row(vec![
        profile.stats.quests_active.to_string(),
        profile.stats.quests_completed.to_string(),
        profile.stats.achievements_unlocked.to_string(),
    ]);
    println!("{table}");
}

fn print_dimensions(profile: &Profile) {
    if profile.dimension_stats.is_empty() {
        return;
    }
    println!();
    for stat in &profile.dimension_stats {
        let theme = resolve_theme(Some(&stat.dimension));
        println!(
            "  {} {:<14} level {}",
            theme.icon,
            stat.dimension.color(token_color(theme.color)),
            stat.level
        );
    }
}

fn print_recent(profile: &Profile) {
    if profile.recent_achievements.is_empty() {
        return;
    }
    println!();
    println!("{}", "Recent achievements".bold());
    // Newest first on the dashboard, mirroring the feed's reverse.
    for achievement in profile.recent_achievements.iter().rev() {
        println!(
            "  {}  {}",
            format_timestamp(&achievement.date_completed).dimmed(),
            achievement.title
        );
    }
}

fn print_public_collections(profile: &Profile) {
    if profile.quests.is_empty() && profile.achievements.is_empty() {
        println!();
        println!("  {}", "Nothing to see here.".italic());
        return;
    }

    if !profile.quests.is_empty() {
        println!();
        println!("{}", "Quests".bold());
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "Status", "Dimension", "Victory Condition"]);
        for quest in &profile.quests {
            table.add_row(vec![
                quest.title.clone(),
                quest.status.to_string(),
                quest.dimension.clone().unwrap_or_else(|| "—".to_string()),
                quest.victory_condition.clone().unwrap_or_default(),
            ]);
        }
        println!("{table}");
    }

    if !profile.achievements.is_empty() {
        println!();
        println!("{}", "Achievements".bold());
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "Date", "Context"]);
        for achievement in &profile.achievements {
            table.add_row(vec![
                achievement.title.clone(),
                format_timestamp(&achievement.date_completed),
                achievement.context.clone(),
            ]);
        }
        println!("{table}");
    }
}
