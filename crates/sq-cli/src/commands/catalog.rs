use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sq_core::Difficulty;

pub fn run(catalog: Option<&Path>, difficulty: Option<&str>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let defs = match difficulty {
        Some(tier) => {
            let tier = Difficulty::parse(tier).ok_or_else(|| {
                format!("unknown difficulty '{tier}', use: easy, medium, hard, insane")
            })?;
            catalog.by_difficulty(tier)
        }
        None => catalog.iter().collect(),
    };

    if defs.is_empty() {
        println!("  No challenges found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Difficulty", "XP"]);

    for def in &defs {
        table.add_row(vec![
            def.id.clone(),
            def.title.clone(),
            def.difficulty.to_string(),
            def.xp.to_string(),
        ]);
    }

    let total: u64 = defs.iter().map(|d| u64::from(d.xp)).sum();
    println!("{table}");
    println!();
    println!("  {} challenges, {total} XP total", defs.len());

    Ok(())
}
