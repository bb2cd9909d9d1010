use crate::i18n::{Language, Localized};
use crate::solver::ResolvedQuestion;

/// Questions whose text, or any of whose answers' text, contains `query`.
///
/// Matching is a case-insensitive substring test against the text shown in
/// `language`. An empty or blank query keeps everything. Order is preserved.
pub fn filter_questions<'q>(
    questions: &'q [ResolvedQuestion],
    query: &str,
    language: Language,
) -> Vec<&'q ResolvedQuestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return questions.iter().collect();
    }

    let matches = |text: &str| text.to_lowercase().contains(&needle);
    questions
        .iter()
        .filter(|q| {
            matches(q.display_text(language))
                || q.answers.iter().any(|a| matches(a.display_text(language)))
        })
        .collect()
}
