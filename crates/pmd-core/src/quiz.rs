use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::nature::Nature;

/// Identifier of a question, unique within one game's question set.
///
/// The data files use plain integers, but string identifiers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    /// A numeric identifier.
    Number(u64),
    /// A textual identifier.
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for QuestionId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A quiz question with its answers in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier.
    pub id: QuestionId,
    /// English text.
    pub text: String,
    /// Italian text, when the data provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_it: Option<String>,
    /// Answers in display order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            text_it: None,
            answers: Vec::new(),
        }
    }

    /// Set the Italian text.
    pub fn with_text_it(mut self, text: impl Into<String>) -> Self {
        self.text_it = Some(text.into());
        self
    }

    /// Append an answer.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }
}

/// One answer to a question and the nature points it awards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// English text.
    pub text: String,
    /// Italian text, when the data provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_it: Option<String>,
    /// Points per nature, ordered by [`Nature::ALL`] rather than by the
    /// data file. Natures not listed award nothing; unrecognised names are
    /// skipped with a warning.
    #[serde(default, deserialize_with = "known_natures")]
    pub points: BTreeMap<Nature, u32>,
}

impl Answer {
    /// Create an answer that awards no points.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_it: None,
            points: BTreeMap::new(),
        }
    }

    /// Set the Italian text.
    pub fn with_text_it(mut self, text: impl Into<String>) -> Self {
        self.text_it = Some(text.into());
        self
    }

    /// Award `points` toward `nature`.
    pub fn with_points(mut self, nature: Nature, points: u32) -> Self {
        self.points.insert(nature, points);
        self
    }

    /// Points this answer awards toward `nature`, 0 when not listed.
    pub fn points_for(&self, nature: Nature) -> u32 {
        self.points.get(&nature).copied().unwrap_or(0)
    }
}

fn known_natures<'de, D>(deserializer: D) -> Result<BTreeMap<Nature, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, points)| match name.parse::<Nature>() {
            Ok(nature) => Some((nature, points)),
            Err(_) => {
                warn!(nature = %name, points, "skipping points for unknown nature");
                None
            }
        })
        .collect())
}
