//! Command parser for the Damista text protocol
//!
//! One command per line. Parsing never fails: anything unrecognised, or a
//! known command with unusable arguments, comes back as `Unknown` so the
//! session can answer with an error line.

use crate::board::{Color, Square};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    NewGame,
    Position {
        layout: Option<String>,
        turn: Option<Color>,
    },
    Show,
    Eval,
    Moves(Square),
    Move {
        from: Square,
        to: Square,
    },
    Go {
        depth: Option<u32>,
    },
    SetDepth(u32),
    SetAi(Option<Color>),
    Quit,
    Unknown(String),
}

/// Parse a command line (simple whitespace tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Command::Unknown(String::new());
    };

    let unknown = || Command::Unknown(trimmed.to_string());
    match head {
        "new" => Command::NewGame,
        "show" | "d" => Command::Show,
        "eval" => Command::Eval,
        "quit" => Command::Quit,
        "position" => {
            // position startpos | position <layout> [b|w]
            let Some(turn) = parse_turn(&parts[2.min(parts.len())..]) else {
                return unknown();
            };
            match parts.get(1) {
                Some(&"startpos") => Command::Position { layout: None, turn },
                Some(layout) => Command::Position {
                    layout: Some(layout.to_string()),
                    turn,
                },
                None => unknown(),
            }
        }
        "moves" => match parts.get(1).and_then(|s| s.parse().ok()) {
            Some(square) => Command::Moves(square),
            None => unknown(),
        },
        "move" => {
            let from = parts.get(1).and_then(|s| s.parse().ok());
            let to = parts.get(2).and_then(|s| s.parse().ok());
            match (from, to) {
                (Some(from), Some(to)) => Command::Move { from, to },
                _ => unknown(),
            }
        }
        "go" => {
            let mut depth = None;
            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "depth" => {
                        if let Some(v) = parts.get(i + 1) {
                            if let Ok(x) = v.parse::<u32>() {
                                depth = Some(x);
                            }
                        }
                        i += 2;
                    }
                    _ => {
                        i += 1;
                    }
                }
            }
            Command::Go { depth }
        }
        "set" => match (parts.get(1), parts.get(2)) {
            (Some(&"depth"), Some(v)) => match v.parse::<u32>() {
                Ok(depth) => Command::SetDepth(depth),
                Err(_) => unknown(),
            },
            (Some(&"ai"), Some(&"none")) => Command::SetAi(None),
            (Some(&"ai"), Some(v)) => match v.parse::<Color>() {
                Ok(color) => Command::SetAi(Some(color)),
                Err(_) => unknown(),
            },
            _ => unknown(),
        },
        _ => unknown(),
    }
}

/// Optional trailing side to move. `None` means the tokens are unusable.
fn parse_turn(rest: &[&str]) -> Option<Option<Color>> {
    match rest {
        [] => Some(None),
        [token] => token.parse().ok().map(Some),
        _ => None,
    }
}
