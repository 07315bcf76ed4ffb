use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sq_progression::select_daily;

pub fn run(catalog: Option<&Path>, count: usize, seed: Option<u64>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let seed = super::seed_or_random(seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let daily = select_daily(&catalog, count, &mut rng);

    println!("  {} (seed {seed})", "Daily challenges".bold());
    println!("{}", super::format_challenge_list(&daily));

    let xp: u64 = daily.iter().map(|c| u64::from(c.xp())).sum();
    println!();
    println!("  {} challenges, {xp} XP up for grabs", daily.len());

    Ok(())
}
