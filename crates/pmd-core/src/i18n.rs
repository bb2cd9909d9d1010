//! English and Italian display strings.
//!
//! The language is always passed in by the caller. Nothing in the resolver
//! or the solver depends on it; only text shown to the user does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::game::GameVersion;
use crate::nature::{Gender, Nature};
use crate::quiz::{Answer, Question};

/// A display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Italian.
    It,
}

impl Language {
    /// The two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "it" | "italian" | "italiano" => Ok(Self::It),
            _ => Err(QuizError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Fixed strings of the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    /// Application title.
    Title,
    /// Tagline under the title.
    Subtitle,
    /// Heading for the game version.
    GameVersion,
    /// Heading for the gender.
    Gender,
    /// The male gender.
    Male,
    /// The female gender.
    Female,
    /// Heading for the starter list.
    TargetPokemon,
    /// Heading for the required nature.
    TargetNature,
    /// Shown when a combination has no nature.
    NotAvailable,
    /// Shown when no question survives the search.
    NoQuestions,
    /// Prefix for a game with no obtainable starters.
    NoStarters,
    /// Noun after the starter count.
    Starters,
    /// Noun after a question count of one.
    Question,
    /// Noun after any other question count.
    Questions,
    /// Marks a question where every answer is equally good.
    AnyAnswer,
}

/// Look up a UI string.
pub fn ui_text(key: UiText, language: Language) -> &'static str {
    match (key, language) {
        (UiText::Title, _) => "PMD REVERSE QUIZ",
        (UiText::Subtitle, Language::En) => "Get your favorite Pokémon in Mystery Dungeon!",
        (UiText::Subtitle, Language::It) => "Ottieni il tuo Pokémon preferito in Mystery Dungeon!",
        (UiText::GameVersion, Language::En) => "Game Version",
        (UiText::GameVersion, Language::It) => "Versione del Gioco",
        (UiText::Gender, Language::En) => "Gender",
        (UiText::Gender, Language::It) => "Sesso",
        (UiText::Male, Language::En) => "Male",
        (UiText::Male, Language::It) => "Maschio",
        (UiText::Female, Language::En) => "Female",
        (UiText::Female, Language::It) => "Femmina",
        (UiText::TargetPokemon, Language::En) => "Choose Target Pokémon",
        (UiText::TargetPokemon, Language::It) => "Scegli il Pokémon Desiderato",
        (UiText::TargetNature, Language::En) => "Target Nature",
        (UiText::TargetNature, Language::It) => "Natura Richiesta",
        (UiText::NotAvailable, Language::En) => "Not Available",
        (UiText::NotAvailable, Language::It) => "Non Disponibile",
        (UiText::NoQuestions, Language::En) => "No matching questions found.",
        (UiText::NoQuestions, Language::It) => "Nessuna domanda trovata.",
        (UiText::NoStarters, Language::En) => "No starters found for",
        (UiText::NoStarters, Language::It) => "Nessuno starter trovato per",
        (UiText::Starters, Language::En) => "starters",
        (UiText::Starters, Language::It) => "starter",
        (UiText::Question, Language::En) => "question",
        (UiText::Question, Language::It) => "domanda",
        (UiText::Questions, Language::En) => "questions",
        (UiText::Questions, Language::It) => "domande",
        (UiText::AnyAnswer, Language::En) => "(any answer)",
        (UiText::AnyAnswer, Language::It) => "(qualsiasi risposta)",
    }
}

impl Nature {
    /// The nature's name in `language`.
    pub fn localized(self, language: Language) -> &'static str {
        match language {
            Language::En => self.name(),
            Language::It => self.italian_name(),
        }
    }

    fn italian_name(self) -> &'static str {
        match self {
            Self::Jolly => "Allegra",
            Self::Rash => "Ardente",
            Self::Hardy => "Ardita",
            Self::Brave => "Audace",
            Self::Naughty => "Birbona",
            Self::Calm => "Calma",
            Self::Careful => "Cauta",
            Self::Adamant => "Decisa",
            Self::Docile => "Docile",
            Self::Lax => "Fiacca",
            Self::Quirky => "Furba",
            Self::Gentle => "Gentile",
            Self::Naive => "Ingenua",
            Self::Hasty => "Lesta",
            Self::Mild => "Mite",
            Self::Modest => "Modesta",
            Self::Relaxed => "Placida",
            Self::Quiet => "Quieta",
            Self::Bashful => "Ritrosa",
            Self::Impish => "Scaltra",
            Self::Lonely => "Schiva",
            Self::Serious => "Seria",
            Self::Bold => "Sicura",
            Self::Timid => "Timida",
            Self::Sassy => "Vivace",
        }
    }
}

impl GameVersion {
    /// The display label in `language`.
    pub fn localized_label(self, language: Language) -> &'static str {
        match (self, language) {
            (_, Language::En) => self.label(),
            (Self::RescueTeam, Language::It) => "Squadra Rossa/Blu",
            (Self::ExplorersTimeDarkness, Language::It) => "Esploratori del Tempo/Oscurità",
            (Self::ExplorersSky, Language::It) => "Esploratori del Cielo",
        }
    }
}

impl Gender {
    /// The gender's name in `language`.
    pub fn localized(self, language: Language) -> &'static str {
        match self {
            Self::Male => ui_text(UiText::Male, language),
            Self::Female => ui_text(UiText::Female, language),
        }
    }
}

/// Data that carries English text and, optionally, an Italian translation.
pub trait Localized {
    /// The English text.
    fn text(&self) -> &str;

    /// The Italian text, if the data has one.
    fn text_it(&self) -> Option<&str>;

    /// Text to show in `language`, falling back to English when the
    /// translation is missing or empty.
    fn display_text(&self, language: Language) -> &str {
        match (language, self.text_it()) {
            (Language::It, Some(it)) if !it.is_empty() => it,
            _ => self.text(),
        }
    }
}

impl Localized for Question {
    fn text(&self) -> &str {
        &self.text
    }

    fn text_it(&self) -> Option<&str> {
        self.text_it.as_deref()
    }
}

impl Localized for Answer {
    fn text(&self) -> &str {
        &self.text
    }

    fn text_it(&self) -> Option<&str> {
        self.text_it.as_deref()
    }
}
