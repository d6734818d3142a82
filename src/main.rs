//! Damista interactive session: reads protocol commands from stdin.

use clap::{Parser, ValueEnum};
use damista::board::Color;
use damista::search::SearchParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
    None,
}

impl Side {
    fn color(self) -> Option<Color> {
        match self {
            Side::Black => Some(Color::Black),
            Side::White => Some(Color::White),
            Side::None => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Side played by the engine
    #[arg(long, value_enum, default_value_t = Side::Black)]
    ai: Side,
}

fn main() {
    damista::init();
    let args = Args::parse();

    let params = SearchParams::new().depth(args.depth);
    if let Err(e) = damista::protocol::run_loop(params, args.ai.color()) {
        tracing::error!(error = %e, "session loop failed");
        std::process::exit(1);
    }
}
