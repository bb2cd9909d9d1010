//! Best-answer scoring.
//!
//! For a target nature, every answer scores the points it awards toward that
//! nature. Within a question the answers reaching the highest positive score
//! are the recommended ones; ties are all recommended. A question where no
//! answer awards anything stays in the output with nothing recommended.

use serde::Serialize;
use tracing::debug;

use crate::data::QuestionTable;
use crate::game::GameVersion;
use crate::i18n::Localized;
use crate::nature::Nature;
use crate::quiz::{Answer, Question, QuestionId};

/// An answer annotated for one target nature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAnswer {
    /// The source answer, copied unchanged.
    #[serde(flatten)]
    pub answer: Answer,
    /// Points toward the target nature.
    pub score: u32,
    /// True if this answer reaches the question's highest positive score.
    pub is_best: bool,
}

/// A question whose answers have been scored for one target nature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedQuestion {
    /// Identifier of the source question.
    pub id: QuestionId,
    /// English text.
    pub text: String,
    /// Italian text, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_it: Option<String>,
    /// Scored answers in source order.
    pub answers: Vec<ResolvedAnswer>,
}

impl ResolvedQuestion {
    /// Highest answer score, 0 for a question without answers.
    pub fn max_score(&self) -> u32 {
        self.answers.iter().map(|a| a.score).max().unwrap_or(0)
    }

    /// True if no answer awards points toward the target.
    pub fn is_neutral(&self) -> bool {
        self.max_score() == 0
    }

    /// The recommended answers, in source order.
    pub fn best_answers(&self) -> impl Iterator<Item = &ResolvedAnswer> {
        self.answers.iter().filter(|a| a.is_best)
    }
}

impl Localized for ResolvedQuestion {
    fn text(&self) -> &str {
        &self.text
    }

    fn text_it(&self) -> Option<&str> {
        self.text_it.as_deref()
    }
}

impl Localized for ResolvedAnswer {
    fn text(&self) -> &str {
        &self.answer.text
    }

    fn text_it(&self) -> Option<&str> {
        self.answer.text_it.as_deref()
    }
}

/// Score every question stored under `game_key` for `target`.
///
/// A missing key yields an empty list. With no target every score is 0 and
/// nothing is recommended. The table is only read.
pub fn solve_quiz(
    questions: &QuestionTable,
    game_key: &str,
    target: Option<Nature>,
) -> Vec<ResolvedQuestion> {
    let source = questions.questions(game_key);
    debug!(game_key, ?target, questions = source.len(), "solving quiz");
    source.iter().map(|q| resolve_question(q, target)).collect()
}

/// [`solve_quiz`] for a game version, looked up by its question-table key.
pub fn solve_for_game(
    questions: &QuestionTable,
    game: GameVersion,
    target: Option<Nature>,
) -> Vec<ResolvedQuestion> {
    solve_quiz(questions, game.db_key(), target)
}

/// Score a single question for `target`.
pub fn resolve_question(question: &Question, target: Option<Nature>) -> ResolvedQuestion {
    let scores: Vec<u32> = question
        .answers
        .iter()
        .map(|a| target.map_or(0, |nature| a.points_for(nature)))
        .collect();
    let max_score = scores.iter().copied().max().unwrap_or(0);

    let answers = question
        .answers
        .iter()
        .zip(scores)
        .map(|(answer, score)| ResolvedAnswer {
            answer: answer.clone(),
            score,
            is_best: max_score > 0 && score == max_score,
        })
        .collect();

    ResolvedQuestion {
        id: question.id.clone(),
        text: question.text.clone(),
        text_it: question.text_it.clone(),
        answers,
    }
}
