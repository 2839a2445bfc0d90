//! Command-line ring card game.
//!
//! Reads the number of players and a pack file (from flags or interactive
//! prompts), plays the game on one thread per player, then writes
//! `player<i>_output.txt` and `deck<i>_output.txt` into the output directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use ringdeal::output::write_deck_files;
use ringdeal::{Backoff, FileSink, Game, GameOptions, Pack};

/// Simulates a ring of card-collecting players.
#[derive(Debug, Parser)]
#[command(name = "card-game", version)]
struct Args {
    /// Number of players (greater than 1). Prompted for when omitted.
    #[arg(short = 'n', long)]
    players: Option<u32>,
    /// Pack file holding 8 * players non-negative integers, one per line.
    /// Prompted for when omitted.
    #[arg(short, long)]
    pack: Option<PathBuf>,
    /// Directory receiving the player and deck output files.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Write a shuffled, winnable pack for the given players to PATH and exit.
    #[arg(long, value_name = "PATH")]
    generate: Option<PathBuf>,
    /// Seed used by --generate.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Spin instead of yielding when a deck is momentarily empty.
    #[arg(long)]
    spin: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let Some(players) = args.players.filter(|&n| n > 1).or_else(prompt_players) else {
        println!("No player count given. Goodbye.");
        return Ok(());
    };

    if let Some(path) = &args.generate {
        Pack::generate(players, args.seed)
            .write(path)
            .with_context(|| format!("failed to write pack {}", path.display()))?;
        println!("Wrote a pack for {players} players to {}", path.display());
        return Ok(());
    }

    let pack = match args.pack.as_deref().map(|path| Pack::read(path, players)) {
        Some(Ok(pack)) => Some(pack),
        Some(Err(err)) => {
            println!("{err}. try again...");
            prompt_pack(players)
        }
        None => prompt_pack(players),
    };
    let Some(pack) = pack else {
        println!("No pack given. Goodbye.");
        return Ok(());
    };

    let backoff = if args.spin {
        Backoff::Spin
    } else {
        Backoff::Yield
    };
    let options = GameOptions::default()
        .with_players(players)
        .with_backoff(backoff);

    play(options, &pack, &args.output_dir)
}

fn play(options: GameOptions, pack: &Pack, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let sinks = (1..=options.players)
        .map(|player| FileSink::create(dir, player))
        .collect::<io::Result<Vec<_>>>()
        .context("failed to open player output file")?;

    let game = Game::new(options, pack)?;
    let result = game.play(sinks)?;

    println!("player {} wins", result.winner);

    write_deck_files(dir, &result.decks).context("failed to write deck output")?;
    Ok(())
}

/// Prints `prompt` and reads one trimmed line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_players() -> Option<u32> {
    loop {
        let input = prompt_line("Please enter the number of players: ")?;
        match input.parse::<u32>() {
            Ok(n) if n > 1 => return Some(n),
            Ok(_) => println!("Number of players must be an integer > 1. try again..."),
            Err(_) => println!("Invalid integer, try again..."),
        }
    }
}

fn prompt_pack(players: u32) -> Option<Pack> {
    loop {
        let input = prompt_line("Please enter a valid pack filename: ")?;
        match Pack::read(Path::new(&input), players) {
            Ok(pack) => return Some(pack),
            Err(err) => println!("{err}. try again..."),
        }
    }
}
