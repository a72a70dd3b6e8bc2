use anyhow::anyhow;
use broadside::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::default();

    let mut player = AiPlayer::new(&config);
    let player_fleet = player
        .place_fleet(&mut rng, &config)
        .map_err(|e| anyhow!(e.to_string()))?;
    let bot_fleet =
        Fleet::random(&mut rng, &config).ok_or_else(|| anyhow!("unable to generate a fleet"))?;

    let mut log = MemoryLog::new();
    let mut session = Session::new(
        Box::new(player),
        Match::new(config, player_fleet, bot_fleet),
    );
    let status = session.run(&mut rng, &mut log)?;

    let player_shots = log.records().iter().filter(|r| r.player_move.is_some()).count();
    let bot_shots = log.records().iter().filter(|r| r.bot_move.is_some()).count();
    let winner = match status {
        GameStatus::Won => Some("player"),
        GameStatus::Lost => Some("bot"),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "seed": seed,
        "status": status,
        "winner": winner,
        "turns": session.game().turn_number(),
        "player_shots": player_shots,
        "bot_shots": bot_shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
