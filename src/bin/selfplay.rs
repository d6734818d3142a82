//! Engine against engine from the starting position
//!
//! Both sides use the same depth; the game stops on a winner, on a blocked
//! side, or after `--max-plies`.

use clap::Parser;
use damista::game::Game;
use damista::search::{Search, SearchParams};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    #[arg(short, long, default_value_t = 200)]
    max_plies: u32,

    /// Print the board after every move
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    damista::init();
    let args = Args::parse();

    let mut game = Game::new();
    let mut search = Search::new(SearchParams::new().depth(args.depth).trace_root(false));

    println!("=== Damista self-play, depth {} ===\n", args.depth);

    for ply in 1..=args.max_plies {
        let side = game.turn();
        let result = match game.engine_move(&mut search) {
            Ok(result) => result,
            Err(e) => {
                println!("{}", e);
                break;
            }
        };

        let Some(mv) = result.best_move else {
            println!("{} has no move left and loses", side);
            break;
        };
        println!(
            "{:>3}. {:<5} {:<8} score {:>5} nodes {}",
            ply,
            side.to_string(),
            mv.to_string(),
            result.score,
            search.stats().nodes
        );
        if args.verbose {
            println!("{}\n", game.board());
        }
        if let Some(winner) = game.winner() {
            println!("\n{} wins", winner);
            break;
        }
    }

    println!("\nFinal position:\n{}", game.board());
    println!("eval {}", game.board().evaluate());
}
