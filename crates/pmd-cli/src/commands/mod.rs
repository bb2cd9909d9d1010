pub mod export;
pub mod games;
pub mod nature;
pub mod solve;
pub mod starters;

use pmd_core::{GameVersion, Gender, Nature, QuizConfig, QuizData, resolve_target_nature};
use tracing::debug;

/// A starter lookup as typed on the command line.
pub struct Request {
    pub creature: String,
    pub game: Option<String>,
    pub gender: Option<String>,
}

/// A request with its game and gender parsed and the target nature looked up.
pub struct Resolved {
    pub creature: String,
    pub game: GameVersion,
    pub gender: Gender,
    pub target: Option<Nature>,
}

/// Load both data tables named by the config.
fn load_data(config: &QuizConfig) -> Result<QuizData, String> {
    debug!(data_dir = %config.data_dir.display(), "loading quiz data");
    QuizData::load(config).map_err(|e| e.to_string())
}

/// Parse an optional game argument, falling back to the configured default.
fn parse_game(game: Option<&str>, config: &QuizConfig) -> Result<GameVersion, String> {
    match game {
        Some(s) => s.parse().map_err(|e| format!("{e}")),
        None => Ok(config.game),
    }
}

/// Parse the request's selections and resolve the target nature.
fn resolve(request: &Request, config: &QuizConfig, data: &QuizData) -> Result<Resolved, String> {
    let game = parse_game(request.game.as_deref(), config)?;
    let gender = match request.gender.as_deref() {
        Some(s) => s.parse().map_err(|e| format!("{e}"))?,
        None => config.gender,
    };
    let target = resolve_target_nature(&data.starters, game, &request.creature, gender);
    Ok(Resolved {
        creature: request.creature.clone(),
        game,
        gender,
        target,
    })
}

/// Print the "creature, gender, game" line shared by lookup commands.
fn print_header(resolved: &Resolved, lang: pmd_core::Language) {
    use colored::Colorize;

    println!(
        "  {} {} [{}]",
        resolved.creature.bold(),
        resolved.gender.symbol(),
        resolved.game.localized_label(lang).dimmed()
    );
}
