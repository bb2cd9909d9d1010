//! Core types for the PMD reverse quiz: natures, starter and question tables,
//! and the logic that turns a (creature, game, gender) choice into a list of
//! recommended quiz answers.
//!
//! The two entry points are [`resolve_target_nature`] and [`solve_quiz`].
//! Both are pure functions over tables loaded once through [`QuizData`];
//! neither reads any global state and neither fails on missing data.

/// Runtime configuration: data locations and default selections.
pub mod config;
/// Loading and querying of the starter and question tables.
pub mod data;
/// Error types used throughout the crate.
pub mod error;
/// Supported game versions and their table keys.
pub mod game;
/// Language selection and translated display strings.
pub mod i18n;
/// Natures and genders.
pub mod nature;
/// Quiz questions and answers as stored in the question table.
pub mod quiz;
/// Lookup of the nature required for a starter.
pub mod resolver;
/// Text search over solved questions.
pub mod search;
/// Best-answer scoring for a target nature.
pub mod solver;

/// Re-export configuration.
pub use config::QuizConfig;
/// Re-export table types.
pub use data::{GenderNatures, QuestionTable, QuizData, StarterTable};
/// Re-export error types.
pub use error::{QuizError, QuizResult};
/// Re-export game versions.
pub use game::GameVersion;
/// Re-export localization types.
pub use i18n::{Language, Localized, UiText, ui_text};
/// Re-export nature types.
pub use nature::{Gender, Nature};
/// Re-export quiz types.
pub use quiz::{Answer, Question, QuestionId};
/// Re-export the resolver.
pub use resolver::{available_starters, resolve_target_nature};
/// Re-export search.
pub use search::filter_questions;
/// Re-export the solver.
pub use solver::{ResolvedAnswer, ResolvedQuestion, solve_for_game, solve_quiz};
