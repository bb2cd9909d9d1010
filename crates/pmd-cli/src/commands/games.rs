use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use pmd_core::{GameVersion, QuizConfig, UiText, ui_text};

pub fn run(config: &QuizConfig) -> Result<(), String> {
    let lang = config.language;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", ui_text(UiText::GameVersion, lang), "Question key"]);

    for game in GameVersion::ALL {
        table.add_row(vec![game.id(), game.localized_label(lang), game.db_key()]);
    }

    println!("  {}", ui_text(UiText::Title, lang).bold());
    println!("  {}", ui_text(UiText::Subtitle, lang).dimmed());
    println!();
    println!("{table}");
    Ok(())
}
