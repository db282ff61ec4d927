//! Console runner: plays one match and narrates it.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dominoes::core::{MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
use dominoes::{DominoError, MatchEngine, MatchEvent, WinReason};

#[derive(Parser)]
#[command(name = "dominoes")]
#[command(about = "Plays a dominoes match between 2 and 4 players")]
struct Args {
    /// Number of players (2-4)
    players: Option<String>,

    /// Shuffle seed, to replay a match
    #[arg(long)]
    seed: Option<u64>,

    /// Print the match as JSON events, one per line
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging goes to stderr so it never interleaves with the narration.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let player_count = match args.players.as_deref() {
        Some(arg) => match parse_player_count(arg) {
            Some(n) => n,
            None => {
                info!(players = arg, "rejected player count");
                return reject_player_count();
            }
        },
        None => {
            let notice = format!("No arguments given, default game to {} players...", MIN_PLAYERS);
            // stdout carries only events in JSON mode.
            if args.json {
                eprintln!("{}", notice);
            } else {
                println!("{}", notice);
            }
            MIN_PLAYERS
        }
    };

    let mut config = MatchConfig::new(player_count);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = if args.json {
        play_json(&config)
    } else {
        play_narrated(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(DominoError::InvalidPlayerCount(n)) => {
            info!(players = n, "rejected player count");
            reject_player_count()
        }
        Err(e) => {
            error!("match aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parse the players argument; `None` unless it is a whole number from 2 to 4.
fn parse_player_count(arg: &str) -> Option<usize> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (MIN_PLAYERS..=MAX_PLAYERS).contains(n))
}

fn reject_player_count() -> ExitCode {
    println!("Sorry, the game is played by a minimum of 2 players and a max of 4. Try again...");
    ExitCode::from(2)
}

fn play_json(config: &MatchConfig) -> Result<(), DominoError> {
    let mut engine = MatchEngine::new(config)?;
    for event in engine.history() {
        print_json(event);
    }
    while !engine.is_over() {
        for event in engine.step()? {
            print_json(event);
        }
    }
    Ok(())
}

fn print_json(event: &MatchEvent) {
    match serde_json::to_string(event) {
        Ok(line) => println!("{}", line),
        Err(e) => error!("cannot serialize event: {}", e),
    }
}

fn play_narrated(config: &MatchConfig) -> Result<(), DominoError> {
    let mut engine = MatchEngine::new(config)?;

    println!();
    println!("Welcome to Dominos! \n The game is ready... \n");
    println!("Number of players: {}\n", engine.player_count());
    if let Some(seed) = engine.seed() {
        println!("Seed: {}\n", seed);
    }

    print!("Players hand: ");
    for (player, hand) in engine.hands().iter() {
        println!("\n - {}: ", player);
        for tile in hand.tiles() {
            println!(" {} ", tile);
        }
    }

    println!("\n - Pieces left on the table: ");
    for tile in engine.boneyard().tiles() {
        println!(" {} ", tile);
    }

    while !engine.is_over() {
        let events = engine.step()?.to_vec();
        for event in &events {
            narrate(event);
            if event.is_placement() {
                println!(" - The board is now:{}", engine.board());
            }
        }
    }
    Ok(())
}

fn narrate(event: &MatchEvent) {
    match event {
        MatchEvent::Dealt { .. } => {}
        MatchEvent::Opened { player, .. } => {
            println!("\n - {} plays first. ", player);
        }
        MatchEvent::Played { player, tile, side, .. } => {
            println!("\n - {} plays {} at the {} board. ", player, tile, side);
        }
        MatchEvent::Drew { player, tile } => {
            println!("\n - {} draws {}", player, tile);
        }
        MatchEvent::Blocked { pip_totals, .. } => {
            println!("\n No more pieces left on the table BUT all players still have non matching pieces in hand...");
            println!(" The winner is the one with the least total dots...");
            for (player, total) in pip_totals.iter() {
                println!(" - {}: {} dots", player, total);
            }
        }
        MatchEvent::Won { player, reason } => {
            if *reason == WinReason::Domino {
                println!("\n {} has no pieces left.", player);
            }
            println!("\n \nGAME OVER. {} won the game!", player);
        }
    }
}
