//! CLI frontend for the PMD reverse quiz.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use pmd_core::{Language, QuizConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pmd-quiz",
    about = "PMD reverse quiz: pick the answers that give you the starter you want",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory containing starters_map.json and questions_db_it.json
    #[arg(long, global = true, env = "PMD_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Display language: en or it
    #[arg(long, global = true, env = "PMD_LANG", default_value = "en")]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

/// Which starter the user is after.
#[derive(Args)]
struct Selection {
    /// Starter name (e.g. Pikachu)
    creature: String,

    /// Game version id or label (default: rescue_team)
    #[arg(short, long)]
    game: Option<String>,

    /// Gender: male or female (default: male)
    #[arg(short = 's', long)]
    gender: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported game versions
    Games,

    /// List starters obtainable in a game version
    Starters {
        /// Game version id or label (default: rescue_team)
        #[arg(short, long)]
        game: Option<String>,
    },

    /// Show the nature required for a starter
    Nature {
        #[command(flatten)]
        selection: Selection,
    },

    /// Show which quiz answers lead to a starter
    Solve {
        #[command(flatten)]
        selection: Selection,

        /// Only show questions or answers containing this text
        #[arg(short, long)]
        query: Option<String>,

        /// Hide answers that are not recommended
        #[arg(short, long)]
        best_only: bool,
    },

    /// Export the solved quiz as JSON
    Export {
        #[command(flatten)]
        selection: Selection,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = build_config(&cli).and_then(|config| match cli.command {
        Commands::Games => commands::games::run(&config),
        Commands::Starters { game } => commands::starters::run(&config, game.as_deref()),
        Commands::Nature { selection } => {
            commands::nature::run(&config, &selection.into_request())
        }
        Commands::Solve {
            selection,
            query,
            best_only,
        } => commands::solve::run(
            &config,
            &selection.into_request(),
            query.as_deref(),
            best_only,
        ),
        Commands::Export { selection, output } => {
            commands::export::run(&config, &selection.into_request(), output.as_deref())
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<QuizConfig, String> {
    let language: Language = cli.lang.parse().map_err(|e| format!("{e}"))?;
    Ok(QuizConfig::default()
        .with_data_dir(&cli.data_dir)
        .with_language(language))
}

impl Selection {
    fn into_request(self) -> commands::Request {
        commands::Request {
            creature: self.creature,
            game: self.game,
            gender: self.gender,
        }
    }
}
