use clap::Parser;
use damista::board::{Board, Color, START_LAYOUT};
use damista::perft::{divide, perft};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_LAYOUT))]
    layout: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Side to move: white or black
    #[arg(short, long, default_value_t = String::from("white"))]
    turn: String,

    /// Print the leaf count below every root move
    #[arg(long)]
    divide: bool,
}

fn main() {
    damista::init();
    let args = Args::parse();

    let parsed = Board::from_layout(&args.layout).and_then(|board| {
        let turn: Color = args.turn.parse()?;
        Ok((board, turn))
    });
    let (board, turn) = match parsed {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, "bad perft arguments");
            std::process::exit(2);
        }
    };

    println!("Running perft on layout '{}' at depth {}, {} to move", args.layout, args.depth, turn);

    if args.divide {
        for (mv, nodes) in divide(&board, args.depth, turn) {
            println!("{}: {}", mv, nodes);
        }
    }

    let start = std::time::Instant::now();
    let nodes = perft(&board, args.depth, turn);
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}
