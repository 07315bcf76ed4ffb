use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use sq_progression::{Progression, ProgressionConfig};

use crate::session::PlaySession;

pub fn run(catalog: Option<&Path>, seed: Option<u64>, daily_count: usize) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let seed = super::seed_or_random(seed);
    let config = ProgressionConfig::default()
        .with_seed(seed)
        .with_daily_count(daily_count);

    tracing::debug!(seed, daily_count, "starting play session");
    let mut session = PlaySession::new(Progression::new(catalog, config));

    println!("  {} SkateQuest session", "Starting".bold());
    println!(
        "  {} challenges | Daily: {} | Seed: {seed}",
        session.progression().catalog().len(),
        session.progression().state().daily_challenges().len()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
