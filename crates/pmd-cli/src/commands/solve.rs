use colored::Colorize;
use pmd_core::{
    Language, Localized, Nature, QuizConfig, ResolvedAnswer, ResolvedQuestion, UiText,
    filter_questions, solve_for_game, ui_text,
};

use super::Request;

pub fn run(
    config: &QuizConfig,
    request: &Request,
    query: Option<&str>,
    best_only: bool,
) -> Result<(), String> {
    let data = super::load_data(config)?;
    let resolved = super::resolve(request, config, &data)?;
    let lang = config.language;

    super::print_header(&resolved, lang);
    let label = ui_text(UiText::TargetNature, lang);

    // Without a target there is nothing to recommend.
    let Some(target) = resolved.target else {
        println!("  {label}: {}", ui_text(UiText::NotAvailable, lang).dimmed());
        return Ok(());
    };
    println!("  {label}: {}", target.localized(lang).bold());
    println!();

    let solved = solve_for_game(&data.questions, resolved.game, Some(target));
    let shown = filter_questions(&solved, query.unwrap_or_default(), lang);

    if shown.is_empty() {
        println!("  {}", ui_text(UiText::NoQuestions, lang));
        return Ok(());
    }

    for question in &shown {
        print_question(question, target, lang, best_only);
    }

    let noun = if shown.len() == 1 {
        UiText::Question
    } else {
        UiText::Questions
    };
    println!("  {} {}", shown.len(), ui_text(noun, lang));

    Ok(())
}

fn print_question(question: &ResolvedQuestion, target: Nature, lang: Language, best_only: bool) {
    println!(
        "  {} {}",
        format!("[{}]", question.id).dimmed(),
        question.display_text(lang).bold()
    );

    if best_only && question.is_neutral() {
        println!("    {}", ui_text(UiText::AnyAnswer, lang).dimmed());
    }

    for answer in &question.answers {
        if best_only && !answer.is_best {
            continue;
        }

        let text = answer.display_text(lang);
        let tags = point_tags(answer, target, lang);
        if answer.is_best {
            println!("    {} {}  {}", "*".green().bold(), text.green(), tags);
        } else {
            println!("      {}  {}", text.dimmed(), tags.dimmed());
        }
    }
    println!();
}

/// "+2 Hardy +1 Lax", listing only natures that get points, target first.
fn point_tags(answer: &ResolvedAnswer, target: Nature, lang: Language) -> String {
    let mut points: Vec<(Nature, u32)> = answer
        .answer
        .points
        .iter()
        .filter(|(_, score)| **score > 0)
        .map(|(nature, score)| (*nature, *score))
        .collect();
    // Stable sort: the target moves to the front, the rest stay in nature order.
    points.sort_by_key(|(nature, _)| *nature != target);

    points
        .iter()
        .map(|(nature, score)| format!("+{score} {}", nature.localized(lang)))
        .collect::<Vec<_>>()
        .join(" ")
}
