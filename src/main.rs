use std::{fs, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use engine::{Data, prelude::*};
use rand::seq::SliceRandom;
use util::RngExt;

pub const GAME_NAME: &str = "sneak";

const DEFAULT_MAP: &str = "
    ##################
    #@.......#.......#
    #........+...g...#
    #........#.......#
    ###-######.......#
    #........~~......#
    #...g....~~...g..#
    ##################";

#[derive(Parser, Debug)]
#[command(name = GAME_NAME, about = "Run a headless stealth game level")]
struct Args {
    /// Seed for patrol routes and the player's wandering.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of turns to play.
    #[arg(long, default_value_t = 50)]
    turns: u32,

    /// ASCII level file, a built-in level is used if not given.
    #[arg(long)]
    map: Option<PathBuf>,

    /// Game content file in IDM format.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    log::info!("seed: {}", args.seed);

    let data: Data = match &args.data {
        Some(path) => idm::from_str(&fs::read_to_string(path)?)
            .map_err(|e| anyhow!("{}: {e}", path.display()))?,
        None => Default::default(),
    };

    let map = match &args.map {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_owned(),
    };

    let mut r = Runtime::from_ascii(&map, &data, args.seed)?;
    let player = r.player();

    // Stand-in for player input, the player wanders around at random.
    let mut rng = util::srng(&args.seed);

    for _ in 0..args.turns {
        let action = if rng.one_chance_in(4) {
            Action::Pass
        } else {
            DIR_8
                .choose(&mut rng)
                .map_or(Action::Pass, |&dir| Action::Bump(dir))
        };
        player.execute(&mut r, action);
        r.play_turn();

        for m in r.take_messages() {
            println!("{:>4}  {}", r.now(), m.text);
        }

        if !player.is_alive(&r) {
            break;
        }
    }

    log::info!(
        "{} turns played, {} hostiles standing",
        r.now(),
        r.actors().filter(|e| e.is_hostile(&r)).count()
    );

    Ok(())
}
