use std::path::PathBuf;

/// Alias for `Result<T, QuizError>`.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors raised while loading tables or parsing user selections.
///
/// Lookups against loaded tables never produce these: a missing creature,
/// game or gender is reported as `None` or an empty result instead.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// A data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON or does not have the expected shape.
    #[error("invalid data in {}: {source}", path.display())]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON text that did not come from a file failed to parse.
    #[error("invalid data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The game name matches neither a known identifier nor a known label.
    #[error("unknown game: \"{0}\"")]
    UnknownGame(String),

    /// The gender is neither male nor female.
    #[error("unknown gender: \"{0}\" (expected male or female)")]
    UnknownGender(String),

    /// The nature name is not one of the 25 standard natures.
    #[error("unknown nature: \"{0}\"")]
    UnknownNature(String),

    /// The language code is not supported.
    #[error("unknown language: \"{0}\" (expected en or it)")]
    UnknownLanguage(String),
}
