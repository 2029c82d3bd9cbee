//! Strategy-vs-strategy match harness.
//!
//! Plays full games between two configured difficulty tiers, alternating
//! turns from an empty board, and records each game's move list, outcome,
//! winning line, and search-node total. Cross-game score tallying lives
//! here in the match summary, not in the game session.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Board, Mark};
use crate::eval::{evaluate, winning_line, Outcome};
use crate::search::{select_move, Difficulty};

/// Configuration for a batch of games.
#[derive(Clone)]
pub struct MatchConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Tier playing X (moves first).
    pub x: Difficulty,
    /// Tier playing O.
    pub o: Difficulty,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            num_games: 10,
            x: Difficulty::Hard,
            o: Difficulty::Hard,
            threads: 1,
            seed: 0,
            quiet: false,
        }
    }
}

/// A complete recorded game.
#[derive(Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Tier that played X.
    pub x: Difficulty,
    /// Tier that played O.
    pub o: Difficulty,
    /// Cell indices in the order they were played, X first.
    pub moves: Vec<usize>,
    /// The winning mark, or None for a draw.
    pub winner: Option<Mark>,
    /// The completed line's cells when the game was won.
    pub winning_line: Option<[usize; 3]>,
    /// Total minimax nodes searched across both sides.
    pub nodes: u64,
}

/// Plays a single game between the configured tiers and records it.
pub fn play_game(config: &MatchConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::empty();
    let mut to_move = Mark::X;
    let mut moves = Vec::new();
    let mut nodes = 0u64;

    while evaluate(&board) == Outcome::Ongoing {
        let tier = if to_move == Mark::X { config.x } else { config.o };
        let result = select_move(tier, &board, to_move, rng);
        board.place(result.index, to_move);
        moves.push(result.index);
        nodes += result.nodes;
        to_move = to_move.opponent();
    }

    let winner = match evaluate(&board) {
        Outcome::Win(mark) => Some(mark),
        _ => None,
    };

    GameRecord {
        game_id,
        x: config.x,
        o: config.o,
        moves,
        winner,
        winning_line: winning_line(&board).map(|w| w.cells),
        nodes,
    }
}

/// Runs a match, producing all game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_match(config: &MatchConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_match_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs a match, calling `on_game` with each completed game record.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for the whole batch.
pub fn run_match_with_callback<F>(config: &MatchConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_match_parallel(config, on_game);
    } else {
        run_match_sequential(config, on_game);
    }
}

/// Sequential match: plays games one at a time on a single RNG stream.
fn run_match_sequential<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    for i in 0..config.num_games {
        let game = play_game(config, i, &mut rng);
        if !config.quiet {
            eprintln!(
                "Game {}/{}: {} in {} moves",
                i + 1,
                config.num_games,
                outcome_label(game.winner),
                game.moves.len(),
            );
        }
        on_game(game);
    }
}

/// Parallel match: plays games concurrently using rayon, seeding a fresh
/// RNG per game so records do not depend on scheduling order. A channel
/// delivers completed games to the callback on the calling thread.
fn run_match_parallel<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = if config_clone.seed != 0 {
                        SmallRng::seed_from_u64(config_clone.seed.wrapping_add(i as u64))
                    } else {
                        SmallRng::from_entropy()
                    };
                    let game = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        eprintln!(
                            "Game {}/{}: {} in {} moves",
                            n,
                            config_clone.num_games,
                            outcome_label(game.winner),
                            game.moves.len(),
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the main thread and pass to callback.
    for game in rx {
        on_game(game);
    }

    handle.join().expect("match worker thread panicked");
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of match results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;
    let mut total_moves = 0usize;

    for game in games {
        total_moves += game.moves.len();
        match game.winner {
            Some(Mark::X) => x_wins += 1,
            Some(_) => o_wins += 1,
            None => draws += 1,
        }
    }

    let pct = |n: usize| 100.0 * n as f64 / total.max(1) as f64;

    eprintln!("=== Match Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg moves/game: {:.1}",
        total_moves as f64 / total.max(1) as f64
    );
    eprintln!("X wins: {} ({:.1}%)", x_wins, pct(x_wins));
    eprintln!("O wins: {} ({:.1}%)", o_wins, pct(o_wins));
    eprintln!("Draws: {} ({:.1}%)", draws, pct(draws));
}

/// Progress-line label for a game outcome.
fn outcome_label(winner: Option<Mark>) -> String {
    match winner {
        Some(mark) => format!("{} wins", mark.name()),
        None => "draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_single_game_completes() {
        let config = MatchConfig {
            x: Difficulty::Medium,
            o: Difficulty::Easy,
            quiet: true,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let game = play_game(&config, 0, &mut rng);

        assert!(
            (5..=9).contains(&game.moves.len()),
            "game length out of range: {}",
            game.moves.len()
        );
        assert_eq!(game.winner.is_some(), game.winning_line.is_some());
    }

    #[test]
    fn recorded_moves_replay_to_the_recorded_outcome() {
        let config = MatchConfig {
            x: Difficulty::Easy,
            o: Difficulty::Medium,
            quiet: true,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let game = play_game(&config, 0, &mut rng);

        let mut board = Board::empty();
        let mut to_move = Mark::X;
        for &index in &game.moves {
            assert_eq!(board.mark_at(index), Mark::Empty);
            board.place(index, to_move);
            to_move = to_move.opponent();
        }
        let replayed = match evaluate(&board) {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        };
        assert_eq!(replayed, game.winner);
    }

    #[test]
    fn hard_against_hard_always_draws() {
        let config = MatchConfig {
            num_games: 5,
            seed: 42,
            quiet: true,
            ..Default::default()
        };
        let games = run_match(&config);
        assert_eq!(games.len(), 5);
        for game in &games {
            assert_eq!(game.winner, None, "optimal play must draw");
            assert_eq!(game.moves.len(), 9);
        }
    }

    #[test]
    fn sequential_run_produces_correct_count() {
        let config = MatchConfig {
            num_games: 3,
            x: Difficulty::Easy,
            o: Difficulty::Easy,
            threads: 1,
            seed: 99,
            quiet: true,
            ..Default::default()
        };
        let games = run_match(&config);
        assert_eq!(games.len(), 3);
    }

    #[test]
    fn parallel_run_produces_correct_count() {
        let config = MatchConfig {
            num_games: 8,
            x: Difficulty::Easy,
            o: Difficulty::Medium,
            threads: 2,
            seed: 77,
            quiet: true,
            ..Default::default()
        };
        let games = run_match(&config);
        assert_eq!(games.len(), 8);

        let mut ids: Vec<usize> = games.iter().map(|g| g.game_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn jsonl_output_is_valid() {
        let config = MatchConfig {
            num_games: 2,
            x: Difficulty::Hard,
            o: Difficulty::Easy,
            seed: 55,
            quiet: true,
            ..Default::default()
        };
        let games = run_match(&config);
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output.lines().count(), 2);
        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).expect("invalid JSON line");
            assert!(value.get("game_id").is_some());
            assert_eq!(value["x"], "hard");
            assert_eq!(value["o"], "easy");
            assert!(value["moves"].is_array());
        }
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(outcome_label(Some(Mark::X)), "x wins");
        assert_eq!(outcome_label(Some(Mark::O)), "o wins");
        assert_eq!(outcome_label(None), "draw");
    }
}
