use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A supported game version.
///
/// The starter table and the question table key the same game differently:
/// [`GameVersion::id`] indexes the former, [`GameVersion::db_key`] the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVersion {
    /// Red Rescue Team / Blue Rescue Team.
    #[default]
    RescueTeam,
    /// Explorers of Time / Explorers of Darkness.
    ExplorersTimeDarkness,
    /// Explorers of Sky.
    ExplorersSky,
}

impl GameVersion {
    /// Every supported version, in selector order.
    pub const ALL: [GameVersion; 3] = [
        Self::RescueTeam,
        Self::ExplorersTimeDarkness,
        Self::ExplorersSky,
    ];

    /// Identifier used by the starter table.
    pub fn id(self) -> &'static str {
        match self {
            Self::RescueTeam => "rescue_team",
            Self::ExplorersTimeDarkness => "explorers_time_darkness",
            Self::ExplorersSky => "explorers_sky",
        }
    }

    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::RescueTeam => "Red/Blue Rescue Team",
            Self::ExplorersTimeDarkness => "Explorers of Time/Darkness",
            Self::ExplorersSky => "Explorers of Sky",
        }
    }

    /// Key used by the question table.
    pub fn db_key(self) -> &'static str {
        // The question table happens to be keyed by the English label.
        self.label()
    }

    /// Look up a version by its starter-table identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameVersion {
    type Err = QuizError;

    /// Accepts the identifier or the English label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(wanted) || g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuizError::UnknownGame(s.to_string()))
    }
}
