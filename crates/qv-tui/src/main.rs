//! Standalone TUI binary for QuestVault.

use std::process;

use clap::Parser;

use qv_client::{ApiClient, Session};

#[derive(Parser)]
#[command(
    name = "qv-tui",
    about = "Terminal UI for the QuestVault quest tracker",
    version
)]
struct Args {
    /// Base URL of the QuestVault API (env: QUESTVAULT_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Start on a specific tab (dashboard, timeline, sheet)
    #[arg(long, default_value = "dashboard")]
    tab: String,
}

fn main() {
    let args = Args::parse();
    let api_url = args
        .api_url
        .or_else(|| std::env::var("QUESTVAULT_API_URL").ok())
        .unwrap_or_else(|| qv_client::DEFAULT_API_URL.to_string());

    let (client, profile) = match authenticate(&api_url) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let tab = qv_tui::tabs::TabId::from_name(&args.tab).unwrap_or(qv_tui::tabs::TabId::Dashboard);

    let app = qv_tui::app::TuiApp::new(client, profile, tab);

    if let Err(e) = qv_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Build an authenticated client, verifying the stored token against the
/// API. A stale token is discarded and reported as not logged in.
fn authenticate(api_url: &str) -> Result<(ApiClient, qv_core::Profile), String> {
    let mut session = Session::load_default();
    let client = ApiClient::new(api_url)
        .map_err(|e| e.to_string())?
        .with_token(session.token().map(str::to_string));

    let profile = session
        .verify_with(|_| client.profile())
        .map_err(|e| e.to_string())?
        .ok_or("not logged in (run `qv login` first)")?;

    Ok((client, profile))
}
