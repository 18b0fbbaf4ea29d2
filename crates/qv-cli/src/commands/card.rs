//! Print-friendly card views: one bordered card per record, front and back,
//! ready to be cut out for a physical achievement box.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use qv_core::{AchievementId, QuestId, classify, resolve_theme};

use super::format_timestamp;

pub fn quest(api_url: &str, id: QuestId) -> Result<(), String> {
    let client = super::client(api_url)?;
    let quest = client.quest(id).map_err(|e| e.to_string())?;
    let profile = client.profile().map_err(|e| e.to_string())?;
    let theme = resolve_theme(quest.dimension.as_deref());

    let mut card = card_table();
    card.add_row(vec![format!("{} {}", theme.icon, quest.title)]);
    card.add_row(vec![format!("status: {}", quest.status)]);
    if let Some(dimension) = &quest.dimension {
        card.add_row(vec![format!("dimension: {dimension}")]);
    }
    card.add_row(vec![
        quest
            .victory_condition
            .clone()
            .unwrap_or_else(|| "Victory condition: survival.".to_string()),
    ]);
    card.add_row(vec![profile.shown_name().to_string()]);

    print_card(&mut card);
    Ok(())
}

pub fn achievement(api_url: &str, id: AchievementId) -> Result<(), String> {
    let client = super::client(api_url)?;
    let achievement = client.achievement(id).map_err(|e| e.to_string())?;
    let profile = client.profile().map_err(|e| e.to_string())?;
    let theme = resolve_theme(achievement.dimension.as_deref());

    // The linked quest title is decoration; a failure to fetch it is logged
    // and the card prints without it.
    let quest_title = achievement.quest_id.and_then(|quest_id| {
        client
            .quest(quest_id)
            .map(|q| q.title)
            .map_err(|e| tracing::debug!(error = %e, "linked quest fetch failed"))
            .ok()
    });

    let mut card = card_table();
    card.add_row(vec![format!("{} {}", theme.icon, achievement.title)]);
    card.add_row(vec![format_timestamp(&achievement.date_completed)]);
    card.add_row(vec![achievement.context.clone()]);
    if let Some(desc) = &achievement.ai_description {
        card.add_row(vec![format!("\"{desc}\"")]);
    }
    if let Some(reward) = &achievement.ai_reward {
        card.add_row(vec![format!("Reward: {reward}")]);
    }
    if let Some(title) = quest_title {
        card.add_row(vec![format!("From quest: {title}")]);
    }
    card.add_row(vec![profile.shown_name().to_string()]);

    print_card(&mut card);
    Ok(())
}

pub fn character(api_url: &str) -> Result<(), String> {
    let client = super::client(api_url)?;
    let profile = client.profile().map_err(|e| e.to_string())?;
    let class = classify(&profile.dimension_stats);

    let mut card = card_table();
    card.add_row(vec![profile.shown_name().to_string()]);
    card.add_row(vec![format!("Level {} {}", profile.level, class.name)]);
    card.add_row(vec![class.flavor.to_string()]);
    card.add_row(vec![format!(
        "{} active / {} completed / {} unlocked",
        profile.stats.quests_active,
        profile.stats.quests_completed,
        profile.stats.achievements_unlocked
    )]);
    for stat in &profile.dimension_stats {
        let theme = resolve_theme(Some(&stat.dimension));
        card.add_row(vec![format!(
            "{} {}: level {}",
            theme.icon, stat.dimension, stat.level
        )]);
    }

    print_card(&mut card);
    Ok(())
}

fn card_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(44);
    table
}

/// Center every cell and print. Columns only exist once rows are added, so
/// the alignment pass has to happen here, not in [`card_table`].
fn print_card(card: &mut Table) {
    card.column_iter_mut()
        .for_each(|c| c.set_cell_alignment(CellAlignment::Center));
    println!("{card}");
}
