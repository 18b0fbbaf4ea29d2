//! CLI frontend for QuestVault, the personal quest and achievement tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qv",
    about = "QuestVault — log quests and achievements across your life dimensions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Base URL of the QuestVault API (env: QUESTVAULT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the bearer token
    Login {
        /// Account name
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Discard the stored session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Create a new account and log in
    Register {
        /// Account name
        username: String,

        /// Display name shown on the profile
        #[arg(long)]
        display_name: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Manage quests
    Quest {
        #[command(subcommand)]
        command: QuestCommands,
    },

    /// Manage achievements
    #[command(alias = "ach")]
    Achievement {
        #[command(subcommand)]
        command: AchievementCommands,
    },

    /// Show the achievement history as a chronological feed
    Timeline,

    /// Show your dashboard, or someone's public profile
    Profile {
        /// Username of a public profile (omit for your own)
        username: Option<String>,
    },

    /// Render a print-friendly card
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },

    /// Print QR codes for quick quest/achievement entry
    Qr {
        /// Base URL the codes should point at
        #[arg(long, default_value = "http://localhost:5173")]
        base_url: String,
    },

    /// Export all quests and achievements as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bulk-toggle public visibility of quests or achievements
    Visibility {
        /// Collection to toggle: quests or achievements
        target: String,

        /// Hide the collection from the public profile
        #[arg(long, conflicts_with = "show")]
        hide: bool,

        /// Show the collection on the public profile
        #[arg(long)]
        show: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Permanently delete all quests and achievements
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum QuestCommands {
    /// List all quests
    List,

    /// Start a new quest
    New {
        /// Quest title
        title: String,

        /// Life dimension (intellectual, physical, financial, environmental,
        /// vocational, social, emotional, spiritual)
        #[arg(short, long)]
        dimension: qv_core::Dimension,

        /// What counts as done
        #[arg(short, long)]
        victory: Option<String>,

        /// Freeform tags
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Show one quest
    Show {
        /// Quest id
        id: qv_core::QuestId,
    },

    /// Mark a quest completed (the server mints the achievement)
    Complete {
        /// Quest id
        id: qv_core::QuestId,
    },

    /// Delete a quest
    Delete {
        /// Quest id
        id: qv_core::QuestId,
    },
}

#[derive(Subcommand)]
enum AchievementCommands {
    /// List all achievements
    List,

    /// Log a new achievement
    Log {
        /// Achievement title
        title: String,

        /// Narrative context
        #[arg(short, long)]
        context: String,

        /// Life dimension
        #[arg(short, long)]
        dimension: Option<qv_core::Dimension>,

        /// Completion date as YYYY-MM-DD (default: now)
        #[arg(long)]
        date: Option<String>,

        /// Quest this belongs to
        #[arg(short, long)]
        quest: Option<qv_core::QuestId>,
    },

    /// Show one achievement
    Show {
        /// Achievement id
        id: qv_core::AchievementId,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// Card for a quest
    Quest {
        /// Quest id
        id: qv_core::QuestId,
    },

    /// Card for an achievement
    Achievement {
        /// Achievement id
        id: qv_core::AchievementId,
    },

    /// Your character card
    Character,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli
        .api_url
        .or_else(|| std::env::var("QUESTVAULT_API_URL").ok())
        .unwrap_or_else(|| qv_client::DEFAULT_API_URL.to_string());

    let result = match cli.command {
        Commands::Login { username, password } => {
            commands::login::run(&api_url, &username, password.as_deref())
        }
        Commands::Logout => commands::logout::run(),
        Commands::Whoami => commands::whoami::run(&api_url),
        Commands::Register {
            username,
            display_name,
            password,
        } => commands::register::run(&api_url, &username, display_name.as_deref(), password.as_deref()),
        Commands::Quest { command } => match command {
            QuestCommands::List => commands::quest::list(&api_url),
            QuestCommands::New {
                title,
                dimension,
                victory,
                tag,
            } => commands::quest::new(&api_url, &title, dimension, victory, tag),
            QuestCommands::Show { id } => commands::quest::show(&api_url, id),
            QuestCommands::Complete { id } => commands::quest::complete(&api_url, id),
            QuestCommands::Delete { id } => commands::quest::delete(&api_url, id),
        },
        Commands::Achievement { command } => match command {
            AchievementCommands::List => commands::achievement::list(&api_url),
            AchievementCommands::Log {
                title,
                context,
                dimension,
                date,
                quest,
            } => commands::achievement::log(&api_url, &title, &context, dimension, date.as_deref(), quest),
            AchievementCommands::Show { id } => commands::achievement::show(&api_url, id),
        },
        Commands::Timeline => commands::timeline::run(&api_url),
        Commands::Profile { username } => commands::profile::run(&api_url, username.as_deref()),
        Commands::Card { command } => match command {
            CardCommands::Quest { id } => commands::card::quest(&api_url, id),
            CardCommands::Achievement { id } => commands::card::achievement(&api_url, id),
            CardCommands::Character => commands::card::character(&api_url),
        },
        Commands::Qr { base_url } => commands::qr::run(&base_url),
        Commands::Export { output } => commands::export::run(&api_url, output.as_deref()),
        Commands::Visibility {
            target,
            hide,
            show,
            yes,
        } => commands::visibility::run(&api_url, &target, hide, show, yes),
        Commands::Reset { yes } => commands::reset::run(&api_url, yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
