use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qv_client::NewQuest;
use qv_core::{Dimension, Quest, QuestId, QuestStatus, resolve_theme};

pub fn list(api_url: &str) -> Result<(), String> {
    let client = super::client(api_url)?;
    let quests = client.quests().map_err(|e| e.to_string())?;

    if quests.is_empty() {
        println!("  No quests. Start an adventure!");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Status", "Dimension", "Victory Condition"]);

    for quest in &quests {
        table.add_row(vec![
            quest.id.to_string(),
            quest.title.clone(),
            quest.status.to_string(),
            quest.dimension.clone().unwrap_or_else(|| "—".to_string()),
            quest
                .victory_condition
                .clone()
                .unwrap_or_else(|| "No victory condition defined.".to_string()),
        ]);
    }

    println!("{table}");
    let active = quests
        .iter()
        .filter(|q| q.status == QuestStatus::Active)
        .count();
    println!();
    println!("  {} quests ({} active)", quests.len(), active);
    Ok(())
}

pub fn new(
    api_url: &str,
    title: &str,
    dimension: Dimension,
    victory: Option<String>,
    tags: Vec<String>,
) -> Result<(), String> {
    let client = super::client(api_url)?;
    let quest = client
        .create_quest(&NewQuest {
            title: title.to_string(),
            dimension: dimension.name().to_string(),
            victory_condition: victory,
            tags,
        })
        .map_err(|e| e.to_string())?;

    println!("Quest started: {} ({})", quest.title.bold(), quest.id);
    Ok(())
}

pub fn show(api_url: &str, id: QuestId) -> Result<(), String> {
    let client = super::client(api_url)?;
    let quest = client.quest(id).map_err(|e| e.to_string())?;
    print_quest(&quest);
    Ok(())
}

pub fn complete(api_url: &str, id: QuestId) -> Result<(), String> {
    let client = super::client(api_url)?;
    let quest = client.complete_quest(id).map_err(|e| e.to_string())?;

    println!("Quest completed: {}", quest.title.bold());
    println!("  The achievement has been minted. See it with `qv timeline`.");
    Ok(())
}

pub fn delete(api_url: &str, id: QuestId) -> Result<(), String> {
    let client = super::client(api_url)?;
    client.delete_quest(id).map_err(|e| e.to_string())?;
    println!("Quest deleted.");
    Ok(())
}

fn print_quest(quest: &Quest) {
    let theme = resolve_theme(quest.dimension.as_deref());
    let status = match quest.status {
        QuestStatus::Active => "active".blue(),
        QuestStatus::Completed => "completed".green(),
    };

    println!("{} {}", theme.icon, quest.title.bold());
    println!("  id:        {}", quest.id.0);
    println!("  status:    {status}");
    if let Some(dimension) = &quest.dimension {
        println!("  dimension: {dimension}");
    }
    if let Some(victory) = &quest.victory_condition {
        println!("  victory:   {victory}");
    }
    if !quest.tags.is_empty() {
        println!("  tags:      {}", quest.tags.join(", "));
    }
    if quest.is_hidden {
        println!("  hidden from public profile");
    }
}
