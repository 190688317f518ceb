use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{format_label, GameConfig, GameSession, GuessOutcome};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [grid_size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let config = match args.get(2) {
        Some(n) => GameConfig::new(n.parse::<usize>()?, GameConfig::default().fleet().to_vec())?,
        None => GameConfig::default(),
    };
    let grid_size = config.grid_size();

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::with_rng(config, SmallRng::seed_from_u64(seed.wrapping_add(1)))?;
    session.reset()?;

    let mut order: Vec<usize> = (0..grid_size * grid_size).collect();
    order.shuffle(&mut rng);

    let mut misses = 0;
    let mut sunk = Vec::new();
    for cell in order {
        let label = format_label(cell, grid_size)?;
        match session.submit_guess(&label.to_string())? {
            GuessOutcome::Miss(_) => misses += 1,
            GuessOutcome::Sunk { ship, .. } | GuessOutcome::Won { ship, .. } => {
                sunk.push(ship + 1)
            }
            _ => {}
        }
        if session.is_over() {
            break;
        }
    }

    let result = json!({
        "seed": seed,
        "grid_size": grid_size,
        "guesses": session.guessed_cells().len(),
        "hits": session.hit_cells().len(),
        "misses": misses,
        "sink_order": sunk,
        "status": format!("{:?}", session.status()),
        "message": session.message(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
