use comfy_table::{ContentArrangement, Table};
use pmd_core::{Gender, Language, Nature, QuizConfig, UiText, available_starters, ui_text};

pub fn run(config: &QuizConfig, game: Option<&str>) -> Result<(), String> {
    let data = super::load_data(config)?;
    let game = super::parse_game(game, config)?;
    let lang = config.language;

    let starters = available_starters(&data.starters, game);
    if starters.is_empty() {
        println!(
            "  {} {}.",
            ui_text(UiText::NoStarters, lang),
            game.localized_label(lang)
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        ui_text(UiText::TargetPokemon, lang),
        ui_text(UiText::Male, lang),
        ui_text(UiText::Female, lang),
    ]);

    for name in &starters {
        let cells: Vec<String> = Gender::ALL
            .into_iter()
            .map(|gender| natures_cell(data.starters.natures(name, game, gender), lang))
            .collect();
        table.add_row(vec![name.to_string(), cells[0].clone(), cells[1].clone()]);
    }

    println!("  {}", game.localized_label(lang));
    println!("{table}");
    println!();
    println!("  {} {}", starters.len(), ui_text(UiText::Starters, lang));

    Ok(())
}

fn natures_cell(natures: &[Nature], lang: Language) -> String {
    match natures.first() {
        Some(nature) => nature.localized(lang).to_string(),
        None => "—".to_string(),
    }
}
