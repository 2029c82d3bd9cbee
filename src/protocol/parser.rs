//! XOI command parser.
//!
//! Parses incoming XOI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Mark;
use crate::search::Difficulty;

/// A parsed server-to-engine XOI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the XOI protocol handshake.
    Xoi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh game, optionally switching difficulty tier.
    NewGame { difficulty: Option<Difficulty> },

    /// Load a position: `position <cells> <side>`.
    Position { cells: String, side: String },

    /// Assign the mark the engine plays.
    SetMark { mark: Mark },

    /// Apply the human side's move at a cell index.
    Play { index: usize },

    /// Compute and play the engine side's move.
    Go,

    /// Interrupt the current search immediately.
    Stop,

    /// Report the current position without changing it.
    State,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "xoi" => Some(Command::Xoi),
        "isready" => Some(Command::IsReady),
        "go" => Some(Command::Go),
        "stop" => Some(Command::Stop),
        "state" => Some(Command::State),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "newgame" => parse_newgame(&tokens),
        "position" => parse_position(&tokens),
        "setmark" => parse_setmark(&tokens),
        "play" => parse_play(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    // Names and values may span several tokens; the "value" keyword splits them.
    let split = tokens
        .iter()
        .position(|&t| t == "value")
        .unwrap_or(tokens.len());

    let name_parts = &tokens[2..split];
    if name_parts.is_empty() {
        eprintln!("malformed setoption: empty name");
        return None;
    }
    let name = name_parts.join(" ");

    let value = if split < tokens.len() {
        let value_parts = &tokens[split + 1..];
        if value_parts.is_empty() {
            None
        } else {
            Some(value_parts.join(" "))
        }
    } else {
        None
    };

    Some(Command::SetOption { name, value })
}

/// Parses `newgame [easy|medium|hard]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        return Some(Command::NewGame { difficulty: None });
    }
    match Difficulty::from_name(tokens[1]) {
        Some(difficulty) => Some(Command::NewGame {
            difficulty: Some(difficulty),
        }),
        None => {
            eprintln!("unknown difficulty: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `position <cells> <side>`.
///
/// Both payload tokens are carried verbatim; the engine owns notation
/// validation and the error reply for a bad position.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed position: expected 'position <cells> <side>'");
        return None;
    }
    Some(Command::Position {
        cells: tokens[1].to_string(),
        side: tokens[2].to_string(),
    })
}

/// Parses `setmark <x|o>`.
fn parse_setmark(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setmark: expected 'setmark <x|o>'");
        return None;
    }
    match Mark::from_name(tokens[1]) {
        Some(mark) => Some(Command::SetMark { mark }),
        None => {
            eprintln!("unknown mark: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `play <cell>`.
///
/// Only the syntax is checked here. Whether the index is in range and the
/// cell empty is the session's call, so the engine can send a proper error
/// reply instead of the line vanishing in the parser.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed play: expected 'play <cell>'");
        return None;
    }
    match tokens[1].parse::<usize>() {
        Ok(index) => Some(Command::Play { index }),
        Err(_) => {
            eprintln!("invalid cell index: '{}'", tokens[1]);
            None
        }
    }
}
