use tracing::debug;

use crate::data::StarterTable;
use crate::game::GameVersion;
use crate::nature::{Gender, Nature};

/// The nature required to get `creature` with `gender` in `game`.
///
/// Returns the first listed nature, or `None` when the creature, the game
/// entry or the gender entry is missing or empty. A creature that exists in
/// one game but not another is an ordinary `None`, not an error.
pub fn resolve_target_nature(
    starters: &StarterTable,
    game: GameVersion,
    creature: &str,
    gender: Gender,
) -> Option<Nature> {
    let nature = starters.natures(creature, game, gender).first().copied();
    debug!(creature, game = game.id(), %gender, ?nature, "resolved target nature");
    nature
}

/// Creatures obtainable in `game` with at least one gender, sorted by name.
pub fn available_starters(starters: &StarterTable, game: GameVersion) -> Vec<&str> {
    // `creatures()` already iterates in sorted order.
    starters
        .creatures()
        .filter(|name| {
            starters
                .entry(name, game)
                .is_some_and(|entry| entry.is_obtainable())
        })
        .collect()
}
