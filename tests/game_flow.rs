use damista::board::{Board, Color, Square};
use damista::error::GameError;
use damista::game::Game;
use damista::search::{Search, SearchParams};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn play_rejects_bad_requests() {
    let mut game = Game::new();

    assert_eq!(game.play(sq("d4"), sq("c3")), Err(GameError::NoPiece(sq("d4"))));
    assert_eq!(
        game.play(sq("b3"), sq("a4")),
        Err(GameError::NotYourPiece {
            square: sq("b3"),
            color: Color::Black,
            turn: Color::White
        })
    );
    assert_eq!(
        game.play(sq("a6"), sq("a5")),
        Err(GameError::IllegalMove {
            from: sq("a6"),
            to: sq("a5")
        })
    );
    // Occupied destinations are refused before the mapping is consulted
    assert_eq!(
        game.play(sq("a8"), sq("b7")),
        Err(GameError::IllegalMove {
            from: sq("a8"),
            to: sq("b7")
        })
    );

    assert_eq!(game.turn(), Color::White);
    assert!(game.selected().is_none());
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn turns_alternate() {
    let mut game = Game::new();
    game.play(sq("c6"), sq("d5")).unwrap();
    assert_eq!(game.turn(), Color::Black);
    game.play(sq("f3"), sq("e4")).unwrap();
    assert_eq!(game.turn(), Color::White);

    // d5 can now jump e4
    let mv = game.play(sq("d5"), sq("f3")).unwrap();
    assert_eq!(mv.to_string(), "d5xf3");
    assert_eq!(game.board().remaining(Color::Black), 11);
    assert!(game.board().piece_at(sq("e4")).is_none());
}

#[test]
fn selection_follows_click_semantics() {
    let mut game = Game::new();
    assert!(!game.select(sq("d4")));
    assert!(!game.select(sq("b3")));
    assert!(game.select(sq("e6")));
    assert_eq!(game.valid_moves().len(), 2);

    // Empty square outside the mapping drops the selection
    assert!(!game.select(sq("e4")));
    assert!(game.selected().is_none());
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn capturing_the_last_piece_ends_the_game() {
    let board = Board::from_layout("8/8/8/8/1b6/w7/8/8").unwrap();
    let mut game = Game::from_board(board, Color::White);
    game.play(sq("a6"), sq("c4")).unwrap();

    assert_eq!(game.winner(), Some(Color::White));
    let mut search = Search::with_depth(2);
    assert_eq!(
        game.engine_move(&mut search).unwrap_err(),
        GameError::GameOver(Color::White)
    );
    assert!(!game.select(sq("c4")));
}

#[test]
fn engine_move_installs_the_successor() {
    damista::init();
    let mut game = Game::new();
    let mut search = Search::new(SearchParams::new().depth(2).trace_root(false));

    let result = game.engine_move(&mut search).unwrap();
    let mv = result.best_move.expect("opening position has moves");
    assert_eq!(game.board(), &result.board);
    assert_eq!(game.turn(), Color::Black);
    assert!(game.board().piece_at(mv.from()).is_none());
    assert_eq!(game.board().piece_at(mv.to).map(|p| p.color), Some(Color::White));
}

#[test]
fn ai_move_replaces_the_live_board() {
    let mut game = Game::new();
    let (_, next) = damista::minimax(game.board(), 1, game.turn());
    game.ai_move(next.clone());
    assert_eq!(game.board(), &next);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn reset_restores_the_opening() {
    let mut game = Game::new();
    game.play(sq("a6"), sq("b5")).unwrap();
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn engine_games_terminate() {
    let mut game = Game::new();
    let mut search = Search::new(SearchParams::new().depth(1).trace_root(false));
    for _ in 0..300 {
        match game.engine_move(&mut search) {
            Ok(result) if result.best_move.is_none() => break,
            Ok(_) => {}
            Err(GameError::GameOver(_)) => break,
            Err(e) => panic!("unexpected error {e}"),
        }
        for color in Color::ALL {
            let count = game.board().all_pieces(color).len();
            assert_eq!(count, game.board().remaining(color) as usize);
        }
    }
}

#[test]
fn failed_play_clears_the_previous_mapping() {
    let mut game = Game::new();
    assert!(game.select(sq("e6")));
    assert!(!game.valid_moves().is_empty());

    assert_eq!(game.play(sq("d4"), sq("c3")), Err(GameError::NoPiece(sq("d4"))));
    assert!(game.selected().is_none());
    assert!(game.valid_moves().is_empty());
}
