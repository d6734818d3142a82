//! Text protocol event loop and session state for Damista

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::parser::{parse_command, Command};
use crate::board::{Board, Color};
use crate::game::{Game, FIRST_TO_MOVE};
use crate::search::{Search, SearchParams};

pub struct Session {
    game: Game,
    search: Search,
    /// Side played by the engine, answering automatically after each human move
    ai: Option<Color>,
    running: bool,
}

impl Session {
    pub fn new(params: SearchParams, ai: Option<Color>) -> Self {
        Self {
            game: Game::new(),
            search: Search::new(params),
            ai,
            running: true,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the engine side is on turn in an undecided game.
    pub fn engine_to_move(&self) -> bool {
        self.ai == Some(self.game.turn()) && self.game.winner().is_none()
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::NewGame => {
                self.game.reset();
            }
            Command::Position { layout, turn } => {
                let board = match layout {
                    None => Board::new(),
                    Some(text) => match Board::from_layout(&text) {
                        Ok(board) => board,
                        Err(e) => {
                            // Keep the current position on a bad layout
                            res.push(format!("error {}", e));
                            return res;
                        }
                    },
                };
                self.game = Game::from_board(board, turn.unwrap_or(FIRST_TO_MOVE));
            }
            Command::Show => {
                res.extend(self.game.board().to_string().lines().map(str::to_string));
                res.push(format!("turn {}", self.game.turn()));
                res.push(format!("layout {}", self.game.board().layout()));
            }
            Command::Eval => {
                res.push(format!("eval {}", self.game.board().evaluate()));
            }
            Command::Moves(square) => match self.game.board().piece_at(square) {
                Some(piece) => {
                    let list: Vec<String> = self
                        .game
                        .board()
                        .valid_moves(&piece)
                        .into_iter()
                        .map(|(to, captures)| {
                            let sep = if captures.is_empty() { '-' } else { 'x' };
                            format!("{}{}{}", square, sep, to)
                        })
                        .collect();
                    if list.is_empty() {
                        res.push("moves none".to_string());
                    } else {
                        res.push(format!("moves {}", list.join(" ")));
                    }
                }
                None => res.push(format!("error no piece on {}", square)),
            },
            Command::Move { from, to } => match self.game.play(from, to) {
                Ok(mv) => {
                    res.push(format!("ok {}", mv));
                    self.push_winner(&mut res);
                    if self.engine_to_move() {
                        self.engine_reply(&mut res);
                    }
                }
                Err(e) => res.push(format!("error {}", e)),
            },
            Command::Go { depth } => {
                let configured = self.search.params().depth;
                if let Some(d) = depth {
                    self.search.set_depth(d);
                }
                self.engine_reply(&mut res);
                self.search.set_depth(configured);
            }
            Command::SetDepth(depth) => {
                self.search.set_depth(depth);
                res.push(format!("ok depth {}", depth));
            }
            Command::SetAi(side) => {
                self.ai = side;
                match side {
                    Some(color) => res.push(format!("ok ai {}", color)),
                    None => res.push("ok ai none".to_string()),
                }
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                if !s.is_empty() {
                    warn!(command = %s, "unknown command");
                    res.push(format!("error unknown command: {}", s));
                }
            }
        }
        res
    }

    /// Plays the engine's move for the side on turn.
    pub fn engine_reply(&mut self, res: &mut Vec<String>) {
        match self.game.engine_move(&mut self.search) {
            Ok(result) => {
                let stats = self.search.stats();
                res.push(format!(
                    "info depth {} score {} nodes {} time {}",
                    result.depth,
                    result.score,
                    stats.nodes,
                    stats.search_time.as_millis()
                ));
                match result.best_move {
                    Some(mv) => res.push(format!("bestmove {}", mv)),
                    None => res.push("bestmove none".to_string()),
                }
                self.push_winner(res);
            }
            Err(e) => res.push(format!("error {}", e)),
        }
    }

    fn push_winner(&self, res: &mut Vec<String>) {
        if let Some(winner) = self.game.winner() {
            res.push(format!("winner {}", winner));
        }
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub fn run_loop(params: SearchParams, ai: Option<Color>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut session = Session::new(params, ai);
    let mut buf = String::new();

    // The engine may own the opening move
    if session.engine_to_move() {
        let mut res = Vec::new();
        session.engine_reply(&mut res);
        for r in res {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, &mut session) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(())
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_command(line);
    session.handle_command(cmd)
}
