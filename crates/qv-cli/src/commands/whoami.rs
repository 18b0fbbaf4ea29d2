use colored::Colorize;

use qv_client::{ApiClient, Session};

pub fn run(api_url: &str) -> Result<(), String> {
    let mut session = Session::load_default();
    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    let client = ApiClient::new(api_url)
        .map_err(|e| e.to_string())?
        .with_token(session.token().map(str::to_string));
    let profile = session
        .verify_with(|_| client.profile())
        .map_err(|e| e.to_string())?;

    match profile {
        Some(profile) => {
            println!(
                "{} (@{}), level {}",
                profile.shown_name().bold(),
                profile.username,
                profile.level
            );
        }
        // verify_with already discarded the stale token.
        None => println!("Not logged in."),
    }
    Ok(())
}
