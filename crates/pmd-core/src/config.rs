//! Configuration for a quiz lookup.

use std::path::{Path, PathBuf};

use crate::game::GameVersion;
use crate::i18n::Language;
use crate::nature::Gender;

/// Where the data tables live and which selections apply when the user
/// does not make one.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Directory holding both JSON tables.
    pub data_dir: PathBuf,
    /// File name of the starter table inside `data_dir`.
    pub starters_file: String,
    /// File name of the question table inside `data_dir`.
    pub questions_file: String,
    /// Display language.
    pub language: Language,
    /// Game version used when none is given.
    pub game: GameVersion,
    /// Gender used when none is given.
    pub gender: Gender,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            starters_file: "starters_map.json".to_string(),
            questions_file: "questions_db_it.json".to_string(),
            language: Language::default(),
            game: GameVersion::default(),
            gender: Gender::default(),
        }
    }
}

impl QuizConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the display language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the default game version.
    pub fn with_game(mut self, game: GameVersion) -> Self {
        self.game = game;
        self
    }

    /// Set the default gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Full path of the starter table.
    pub fn starters_path(&self) -> PathBuf {
        self.data_dir.join(&self.starters_file)
    }

    /// Full path of the question table.
    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.starters_path(), PathBuf::from("data/starters_map.json"));
        assert_eq!(cfg.questions_path(), PathBuf::from("data/questions_db_it.json"));
        assert_eq!(cfg.language, Language::En);
        assert_eq!(cfg.game, GameVersion::RescueTeam);
        assert_eq!(cfg.gender, Gender::Male);
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_data_dir("/srv/pmd")
            .with_language(Language::It)
            .with_game(GameVersion::ExplorersSky)
            .with_gender(Gender::Female);
        assert_eq!(cfg.starters_path(), PathBuf::from("/srv/pmd/starters_map.json"));
        assert_eq!(cfg.language, Language::It);
        assert_eq!(cfg.game, GameVersion::ExplorersSky);
        assert_eq!(cfg.gender, Gender::Female);
    }
}
