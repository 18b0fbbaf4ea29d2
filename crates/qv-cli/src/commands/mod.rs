pub mod achievement;
pub mod card;
pub mod export;
pub mod login;
pub mod logout;
pub mod profile;
pub mod qr;
pub mod quest;
pub mod register;
pub mod reset;
pub mod timeline;
pub mod visibility;
pub mod whoami;

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::Color;

use qv_client::{ApiClient, Session};
use qv_core::ColorToken;

/// Build an API client carrying the stored session token, if any.
pub fn client(api_url: &str) -> Result<ApiClient, String> {
    let session = Session::load_default();
    let client = ApiClient::new(api_url).map_err(|e| e.to_string())?;
    Ok(client.with_token(session.token().map(str::to_string)))
}

/// Fixed timestamp rendering: date and time, UTC.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Map an abstract theme color onto the terminal palette.
pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Purple => Color::Magenta,
        ColorToken::Red => Color::Red,
        ColorToken::Yellow => Color::Yellow,
        ColorToken::Green => Color::Green,
        ColorToken::Blue => Color::Blue,
        ColorToken::Cyan => Color::Cyan,
        ColorToken::Magenta => Color::BrightMagenta,
        ColorToken::Gray => Color::BrightBlack,
    }
}

/// Read one line from stdin after printing a prompt.
pub fn prompt(label: &str) -> Result<String, String> {
    print!("{label}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; `yes` short-circuits to true.
pub fn confirm(question: &str, yes: bool) -> Result<bool, String> {
    if yes {
        return Ok(true);
    }
    let answer = prompt(&format!("{question} [y/N]"))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
