use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use broadside::{
    init_logging, load_fleet, save_fleet, ui, CliPlayer, CsvTurnLog, Fleet, GameConfig,
    GameStatus, Match, Player, Session, Side,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "data", help = "Directory for fleet files and the turn log")]
        data_dir: PathBuf,
        #[arg(long, help = "Place your fleet at random instead of typing it in")]
        auto_place: bool,
        #[arg(long, help = "Load your fleet from a CSV file")]
        fleet: Option<PathBuf>,
    },
    /// Check a fleet CSV file against the placement rules.
    Validate { file: PathBuf },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            data_dir,
            auto_place,
            fleet,
        } => play(seed, data_dir, auto_place, fleet),
        Commands::Validate { file } => {
            let ships = load_fleet(&file)?;
            match Fleet::new(ships, &GameConfig::default()) {
                Ok(_) => println!("{}: valid fleet", file.display()),
                Err(e) => {
                    println!("{}: {}", file.display(), e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}

fn play(
    seed: Option<u64>,
    data_dir: PathBuf,
    auto_place: bool,
    fleet_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;
    let mut log = CsvTurnLog::create(data_dir.join("game_state.csv"))?;

    println!("=== Battleship ===\n");
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = seeded_rng(seed);
    let config = GameConfig::default();

    let mut player = CliPlayer::stdio();
    let player_fleet = match (fleet_file, auto_place) {
        (Some(path), _) => Fleet::new(load_fleet(&path)?, &config)
            .map_err(|e| anyhow!("{}: {}", path.display(), e))?,
        (None, true) => Fleet::random(&mut rng, &config)
            .ok_or_else(|| anyhow!("unable to generate a fleet"))?,
        (None, false) => player
            .place_fleet(&mut rng, &config)
            .map_err(|e| anyhow!(e.to_string()))?,
    };
    save_fleet(&data_dir.join("player_ships.csv"), &player_fleet)?;

    let bot_fleet = Fleet::random(&mut rng, &config)
        .ok_or_else(|| anyhow!("unable to generate the bot fleet"))?;
    save_fleet(&data_dir.join("bot_ships.csv"), &bot_fleet)?;

    println!("\nGame start!\n");
    let game = Match::new(config, player_fleet, bot_fleet);
    let mut session = Session::new(Box::new(player), game);
    let status = session.run(&mut rng, &mut log)?;

    player_view(&session);
    match status {
        GameStatus::Won => println!("\nYou win! All bot ships are sunk."),
        GameStatus::Lost => println!("\nYou lose! All your ships are sunk."),
        GameStatus::InProgress => {}
    }
    println!("\nFleets saved in '{}/'.", data_dir.display());
    println!("Turn log written to '{}'.", log.path().display());
    Ok(())
}

fn player_view(session: &Session) {
    let game = session.game();
    println!("\nYour shots on the bot's board:");
    print!("{}", ui::render_grid(game.player_grid()));
    println!("\nBot's shots on your board:");
    print!(
        "{}",
        ui::render_fleet(
            game.fleet(Side::Player),
            &game.hits_on(Side::Player),
            game.bot_grid(),
        )
    );
}
