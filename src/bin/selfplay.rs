//! Batch match CLI.
//!
//! Plays strategy-vs-strategy games and outputs per-game records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N     Number of games to play (default: 10)
//!   --x TIER      Tier playing X: easy, medium, hard (default: hard)
//!   --o TIER      Tier playing O: easy, medium, hard (default: hard)
//!   --threads N   Number of parallel threads (default: 1)
//!   --seed N      Random seed, 0 for entropy (default: 0)
//!   --output FILE Output file path (default: stdout)
//!   --quiet       Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use gridlock::search::Difficulty;
use gridlock::selfplay::{self, MatchConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--x" => {
                i += 1;
                config.x = parse_tier(&args[i], "--x");
            }
            "--o" => {
                i += 1;
                config.o = parse_tier(&args[i], "--o");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;

    if !quiet {
        eprintln!(
            "Match: {} games, {} (x) vs {} (o), {} threads",
            config.num_games,
            config.x.name(),
            config.o.name(),
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_match(&config);
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

/// Parses a difficulty tier flag value or exits with a diagnostic.
fn parse_tier(value: &str, flag: &str) -> Difficulty {
    match Difficulty::from_name(value) {
        Some(tier) => tier,
        None => {
            eprintln!(
                "invalid {} value: '{}' (expected easy, medium, or hard)",
                flag, value
            );
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N      Number of games to play (default: 10)");
    eprintln!("  --x TIER       Tier playing X: easy, medium, hard (default: hard)");
    eprintln!("  --o TIER       Tier playing O: easy, medium, hard (default: hard)");
    eprintln!("  --threads N    Number of parallel threads (default: 1)");
    eprintln!("  --seed N       Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE  Output file path (default: stdout)");
    eprintln!("  --quiet        Suppress progress and summary output");
    eprintln!("  --help         Show this help");
}
