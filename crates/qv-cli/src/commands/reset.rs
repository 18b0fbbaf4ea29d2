use colored::Colorize;

pub fn run(api_url: &str, yes: bool) -> Result<(), String> {
    println!(
        "{}",
        "This permanently deletes ALL your quests and achievements.".red()
    );

    if !yes {
        let answer = super::prompt("Type \"reset\" to confirm")?;
        if answer != "reset" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let client = super::client(api_url)?;
    client.reset().map_err(|e| e.to_string())?;
    println!("Your data has been reset.");
    Ok(())
}
