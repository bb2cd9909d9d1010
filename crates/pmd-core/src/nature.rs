use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// One of the 25 standard natures.
///
/// Serialized by its English name (`"Hardy"`, `"Lonely"`, ...), which is how
/// both data tables spell it. The derived ordering follows the declaration
/// order below and is only used to keep point maps deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nature {
    /// Hardy.
    Hardy,
    /// Lonely.
    Lonely,
    /// Brave.
    Brave,
    /// Adamant.
    Adamant,
    /// Naughty.
    Naughty,
    /// Bold.
    Bold,
    /// Docile.
    Docile,
    /// Relaxed.
    Relaxed,
    /// Impish.
    Impish,
    /// Lax.
    Lax,
    /// Timid.
    Timid,
    /// Hasty.
    Hasty,
    /// Serious.
    Serious,
    /// Jolly.
    Jolly,
    /// Naive.
    Naive,
    /// Modest.
    Modest,
    /// Mild.
    Mild,
    /// Quiet.
    Quiet,
    /// Bashful.
    Bashful,
    /// Rash.
    Rash,
    /// Calm.
    Calm,
    /// Gentle.
    Gentle,
    /// Sassy.
    Sassy,
    /// Careful.
    Careful,
    /// Quirky.
    Quirky,
}

impl Nature {
    /// Every nature, in declaration order.
    pub const ALL: [Nature; 25] = [
        Self::Hardy,
        Self::Lonely,
        Self::Brave,
        Self::Adamant,
        Self::Naughty,
        Self::Bold,
        Self::Docile,
        Self::Relaxed,
        Self::Impish,
        Self::Lax,
        Self::Timid,
        Self::Hasty,
        Self::Serious,
        Self::Jolly,
        Self::Naive,
        Self::Modest,
        Self::Mild,
        Self::Quiet,
        Self::Bashful,
        Self::Rash,
        Self::Calm,
        Self::Gentle,
        Self::Sassy,
        Self::Careful,
        Self::Quirky,
    ];

    /// The English name, as used in the data tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hardy => "Hardy",
            Self::Lonely => "Lonely",
            Self::Brave => "Brave",
            Self::Adamant => "Adamant",
            Self::Naughty => "Naughty",
            Self::Bold => "Bold",
            Self::Docile => "Docile",
            Self::Relaxed => "Relaxed",
            Self::Impish => "Impish",
            Self::Lax => "Lax",
            Self::Timid => "Timid",
            Self::Hasty => "Hasty",
            Self::Serious => "Serious",
            Self::Jolly => "Jolly",
            Self::Naive => "Naive",
            Self::Modest => "Modest",
            Self::Mild => "Mild",
            Self::Quiet => "Quiet",
            Self::Bashful => "Bashful",
            Self::Rash => "Rash",
            Self::Calm => "Calm",
            Self::Gentle => "Gentle",
            Self::Sassy => "Sassy",
            Self::Careful => "Careful",
            Self::Quirky => "Quirky",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nature {
    type Err = QuizError;

    /// Case-insensitive match on the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuizError::UnknownNature(s.to_string()))
    }
}

/// The gender of the starter, which changes the required nature for some
/// creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[default]
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Both genders, male first.
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    /// The key used in the starter table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// The conventional symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Male => "♂",
            Self::Female => "♀",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(QuizError::UnknownGender(s.to_string())),
        }
    }
}
