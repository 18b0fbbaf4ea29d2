use qv_client::VisibilityTarget;

pub fn run(api_url: &str, target: &str, hide: bool, show: bool, yes: bool) -> Result<(), String> {
    let target = match target.to_lowercase().as_str() {
        "quests" | "quest" => VisibilityTarget::Quests,
        "achievements" | "achievement" | "ach" => VisibilityTarget::Achievements,
        other => return Err(format!("unknown target \"{other}\", use: quests, achievements")),
    };

    let hidden = match (hide, show) {
        (true, false) => true,
        (false, true) => false,
        _ => return Err("pass exactly one of --hide or --show".to_string()),
    };

    let question = format!(
        "{} all {} {} your public profile?",
        if hidden { "Hide" } else { "Show" },
        target.path(),
        if hidden { "from" } else { "on" },
    );
    if !super::confirm(&question, yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let client = super::client(api_url)?;
    client
        .set_bulk_visibility(target, hidden)
        .map_err(|e| e.to_string())?;

    println!(
        "All {} are now {}.",
        target.path(),
        if hidden { "hidden" } else { "visible" }
    );
    Ok(())
}
