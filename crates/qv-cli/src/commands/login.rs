use colored::Colorize;

use qv_client::{ApiClient, Session};

pub fn run(api_url: &str, username: &str, password: Option<&str>) -> Result<(), String> {
    let password = match password {
        Some(p) => p.to_string(),
        None => super::prompt("Password")?,
    };

    let client = ApiClient::new(api_url).map_err(|e| e.to_string())?;
    let token = client
        .login(username, &password)
        .map_err(|e| e.to_string())?;

    let mut session = Session::load_default();
    session.login(&token).map_err(|e| e.to_string())?;

    // Verify the fresh token resolves to a profile; a failure here wipes the
    // session again rather than leaving a broken token behind.
    let client = client.with_token(Some(token));
    let profile = session
        .verify_with(|_| client.profile())
        .map_err(|e| e.to_string())?;

    match profile {
        Some(profile) => {
            println!(
                "Logged in as {} (level {}).",
                profile.shown_name().bold(),
                profile.level
            );
            Ok(())
        }
        None => Err("login succeeded but the profile could not be fetched".to_string()),
    }
}
