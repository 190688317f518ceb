#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{cli, init_logging, place_fleet, GameConfig, GameSession, ShipDef, DEFAULT_GRID_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Grid side length (1-26)")]
    grid_size: usize,
    #[arg(long, value_delimiter = ',', help = "Ship sizes in fleet order (e.g., --ships 5,4,4)")]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let config = if self.ships.is_empty() {
            let default = GameConfig::default();
            GameConfig::new(self.grid_size, default.fleet().to_vec())?
        } else {
            GameConfig::new(
                self.grid_size,
                self.ships.iter().map(|&s| ShipDef::unnamed(s)).collect(),
            )?
        };
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            eprintln!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Print a random fleet layout as JSON.
    Layout {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let config = game.config()?;
            let mut session = GameSession::with_rng(config, game.rng())?;
            println!("Sink every ship. Commands: restart, reveal, quit.");
            let stdin = std::io::stdin();
            cli::run(&mut session, stdin.lock(), std::io::stdout())?;
        }
        Commands::Layout { game } => {
            let config = game.config()?;
            let mut rng = game.rng();
            let fleet = place_fleet(config.grid_size(), &config.ship_sizes(), &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&fleet)?);
        }
    }
    Ok(())
}
