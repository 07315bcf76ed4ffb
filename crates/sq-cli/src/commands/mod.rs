pub mod catalog;
pub mod daily;
pub mod play;

use std::path::Path;

use sq_core::{Catalog, ChallengeInstance};

/// Load the catalog from a file, or fall back to the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::from_path(path).map_err(|e| e.to_string()),
        None => Ok(Catalog::builtin()),
    }
}

/// Pick a seed when the user did not pass one.
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// One line per challenge: `[x] id  Title (xp XP, difficulty)`.
pub fn format_challenge_list(challenges: &[ChallengeInstance]) -> String {
    let width = challenges.iter().map(|c| c.id().len()).max().unwrap_or(0);
    let mut out = String::new();
    for c in challenges {
        let mark = if c.is_completed() { "x" } else { " " };
        let def = c.definition();
        out.push_str(&format!(
            "  [{mark}] {:<width$}  {} ({} XP, {})\n",
            def.id, def.title, def.xp, def.difficulty
        ));
    }
    out.trim_end().to_string()
}
