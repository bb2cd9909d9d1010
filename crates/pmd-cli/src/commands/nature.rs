use colored::Colorize;
use pmd_core::{QuizConfig, UiText, ui_text};

use super::Request;

pub fn run(config: &QuizConfig, request: &Request) -> Result<(), String> {
    let data = super::load_data(config)?;
    let resolved = super::resolve(request, config, &data)?;
    let lang = config.language;

    super::print_header(&resolved, lang);
    let label = ui_text(UiText::TargetNature, lang);
    match resolved.target {
        Some(nature) => println!("  {label}: {}", nature.localized(lang).bold()),
        None => println!("  {label}: {}", ui_text(UiText::NotAvailable, lang).dimmed()),
    }

    Ok(())
}
