use std::path::Path;

use pmd_core::{GameVersion, Gender, Nature, QuizConfig, ResolvedQuestion, solve_for_game};
use serde::Serialize;

use super::Request;

#[derive(Serialize)]
struct Export<'a> {
    creature: &'a str,
    game: GameVersion,
    gender: Gender,
    target_nature: Option<Nature>,
    questions: Vec<ResolvedQuestion>,
}

pub fn run(config: &QuizConfig, request: &Request, output: Option<&Path>) -> Result<(), String> {
    let data = super::load_data(config)?;
    let resolved = super::resolve(request, config, &data)?;

    let export = Export {
        creature: &resolved.creature,
        game: resolved.game,
        gender: resolved.gender,
        target_nature: resolved.target,
        questions: solve_for_game(&data.questions, resolved.game, resolved.target),
    };

    let content = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
