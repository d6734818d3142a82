use damista::board::{Board, Color};
use damista::eval::Score;
use damista::search::{minimax, Search, SearchParams};

#[test]
fn depth_zero_is_the_static_evaluation() {
    let board = Board::from_layout("8/8/2b5/8/4W3/8/8/8").unwrap();
    for color in Color::ALL {
        let (score, next) = minimax(&board, 0, color);
        assert_eq!(score, board.evaluate());
        assert_eq!(next, board);
    }
}

#[test]
fn decided_board_is_not_expanded() {
    // White has nothing left
    let board = Board::from_layout("8/8/8/4b3/8/8/8/8").unwrap();
    let mut search = Search::new(SearchParams::new().depth(3));
    let (score, next) = search.minimax(&board, 3, Color::Black);
    assert_eq!(score, 1.0);
    assert_eq!(next, board);
    assert_eq!(search.stats().nodes, 1);

    let result = search.search(&board, Color::White);
    assert!(result.best_move.is_none());
    assert_eq!(search.stats().nodes, 1);
    assert_eq!(search.stats().leaves, 1);
}

#[test]
fn ties_go_to_the_last_candidate() {
    // Every opening move scores 0 at depth 1
    let board = Board::new();
    let mut search = Search::new(SearchParams::new().depth(1));

    let white = search.search(&board, Color::White);
    assert_eq!(white.score, 0.0);
    assert_eq!(white.best_move.unwrap().to_string(), "g6-h5");

    let black = search.search(&board, Color::Black);
    assert_eq!(black.best_move.unwrap().to_string(), "h3-g4");
    assert_eq!(search.stats().root_moves, 7);
}

#[test]
fn minimizer_takes_the_capture() {
    // White to move: a6 can jump b5, g6 can only step
    let board = Board::from_layout("7b/8/8/8/1b6/w5w1/8/8").unwrap();
    let mut search = Search::with_depth(1);
    let result = search.search(&board, Color::White);

    assert_eq!(result.score, -1.0);
    let mv = result.best_move.unwrap();
    assert_eq!(mv.to_string(), "a6xc4");
    assert_eq!(mv.captures.len(), 1);
    assert_eq!(result.board.remaining(Color::Black), 1);
}

#[test]
fn maximizer_takes_the_capture() {
    // Mirror image: Black jumps from h3 over g4
    let board = Board::from_layout("8/8/b6b/6w1/8/8/8/w7").unwrap();
    let mut search = Search::with_depth(1);
    let result = search.search(&board, Color::Black);

    assert_eq!(result.score, 1.0);
    assert_eq!(result.best_move.unwrap().to_string(), "h3xf5");
}

#[test]
fn search_and_minimax_agree() {
    let board = Board::new();
    for depth in 1..=3 {
        let mut search = Search::with_depth(depth);
        let result = search.search(&board, Color::White);
        let (score, next) = minimax(&board, depth, Color::White);
        assert_eq!(result.score, score);
        assert_eq!(result.board, next);
        assert_eq!(result.depth, depth);
    }
}

#[test]
fn every_node_is_visited() {
    // Root + 7 + 49 nodes at depth 2 from the start
    let mut search = Search::with_depth(2);
    search.search(&Board::new(), Color::White);
    assert_eq!(search.stats().nodes, 1 + 7 + 49);
    assert_eq!(search.stats().leaves, 49);
}

#[test]
fn the_input_board_is_never_mutated() {
    let board = Board::new();
    let before = board.clone();
    let mut search = Search::with_depth(3);
    let result = search.search(&board, Color::White);
    assert_eq!(board, before);
    assert_ne!(result.board, board);
}

#[test]
fn blocked_minimizer_scores_as_lost_for_white() {
    // White man on h8 is stuck behind its own man on g7, which faces two
    // black men in a row on one side and a man against the edge on the other
    let board = Board::from_layout("8/8/8/8/4b3/5b1b/6w1/7w").unwrap();
    let (score, next) = minimax(&board, 1, Color::White);
    assert_eq!(score, Score::INFINITY);
    assert_eq!(next, board);
}
