//! The two static tables and the code that loads them from disk.
//!
//! Both tables are read once and then only borrowed: the resolver and the
//! solver take `&StarterTable` / `&QuestionTable` and never mutate them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::config::QuizConfig;
use crate::error::{QuizError, QuizResult};
use crate::game::GameVersion;
use crate::nature::{Gender, Nature};
use crate::quiz::Question;

/// Natures a starter can have in one game, per gender.
///
/// A missing or `null` gender entry in the JSON reads as an empty list, which
/// means the starter cannot be obtained with that gender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderNatures {
    /// Natures that yield the male starter.
    #[serde(rename = "Male", default, deserialize_with = "null_as_empty")]
    pub male: Vec<Nature>,
    /// Natures that yield the female starter.
    #[serde(rename = "Female", default, deserialize_with = "null_as_empty")]
    pub female: Vec<Nature>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Nature>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Nature>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenderNatures {
    /// Natures for the given gender.
    pub fn for_gender(&self, gender: Gender) -> &[Nature] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    fn for_gender_mut(&mut self, gender: Gender) -> &mut Vec<Nature> {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }

    /// True if at least one gender can be obtained.
    pub fn is_obtainable(&self) -> bool {
        !self.male.is_empty() || !self.female.is_empty()
    }
}

/// Creature name → game identifier → natures per gender.
///
/// Game identifiers are kept as plain strings so that entries for games this
/// crate does not know about still load; they are simply never looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarterTable(BTreeMap<String, BTreeMap<String, GenderNatures>>);

impl StarterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> QuizResult<Self> {
        let table: Self = read_json(path)?;
        debug!(path = %path.display(), creatures = table.len(), "loaded starter table");
        Ok(table)
    }

    /// Set the natures for one (creature, game, gender) combination.
    pub fn insert(
        &mut self,
        creature: impl Into<String>,
        game: GameVersion,
        gender: Gender,
        natures: Vec<Nature>,
    ) {
        *self
            .0
            .entry(creature.into())
            .or_default()
            .entry(game.id().to_string())
            .or_default()
            .for_gender_mut(gender) = natures;
    }

    /// Builder form of [`StarterTable::insert`].
    pub fn with(
        mut self,
        creature: impl Into<String>,
        game: GameVersion,
        gender: Gender,
        natures: Vec<Nature>,
    ) -> Self {
        self.insert(creature, game, gender, natures);
        self
    }

    /// The per-gender entry for a creature in a game, if any.
    pub fn entry(&self, creature: &str, game: GameVersion) -> Option<&GenderNatures> {
        self.0.get(creature).and_then(|games| games.get(game.id()))
    }

    /// All natures listed for a combination; empty when absent.
    pub fn natures(&self, creature: &str, game: GameVersion, gender: Gender) -> &[Nature] {
        self.entry(creature, game)
            .map(|e| e.for_gender(gender))
            .unwrap_or_default()
    }

    /// Creature names in ascending order.
    pub fn creatures(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of creatures in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no creatures.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Question-table key → questions in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionTable(BTreeMap<String, Vec<Question>>);

impl QuestionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> QuizResult<Self> {
        let table: Self = read_json(path)?;
        debug!(path = %path.display(), games = table.0.len(), "loaded question table");
        Ok(table)
    }

    /// Replace the question list stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, questions: Vec<Question>) {
        self.0.insert(key.into(), questions);
    }

    /// Builder form of [`QuestionTable::insert`].
    pub fn with(mut self, key: impl Into<String>, questions: Vec<Question>) -> Self {
        self.insert(key, questions);
        self
    }

    /// Questions stored under `key`; empty when the key is absent.
    pub fn questions(&self, key: &str) -> &[Question] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Keys present in the table, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Both tables, loaded together.
#[derive(Debug, Clone, Default)]
pub struct QuizData {
    /// The starter → nature table.
    pub starters: StarterTable,
    /// The per-game question table.
    pub questions: QuestionTable,
}

impl QuizData {
    /// Load both tables from the locations named by `config`.
    pub fn load(config: &QuizConfig) -> QuizResult<Self> {
        let starters = StarterTable::load(&config.starters_path())?;
        let questions = QuestionTable::load(&config.questions_path())?;
        Ok(Self {
            starters,
            questions,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> QuizResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| QuizError::Json {
        path: path.to_path_buf(),
        source,
    })
}
