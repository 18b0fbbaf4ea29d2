use std::fs;
use std::path::Path;

use serde::Serialize;

use qv_core::{Achievement, Quest};

#[derive(Serialize)]
struct ExportBundle {
    quests: Vec<Quest>,
    achievements: Vec<Achievement>,
}

pub fn run(api_url: &str, output: Option<&Path>) -> Result<(), String> {
    let client = super::client(api_url)?;
    let bundle = ExportBundle {
        quests: client.quests().map_err(|e| e.to_string())?,
        achievements: client.achievements().map_err(|e| e.to_string())?,
    };

    let json = serde_json::to_string_pretty(&bundle).map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            fs::write(path, json).map_err(|e| e.to_string())?;
            println!(
                "Exported {} quests and {} achievements to {}",
                bundle.quests.len(),
                bundle.achievements.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
