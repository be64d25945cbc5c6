//! Tests for full game sessions over the public API.

use noughts::{Cell, Game, Mark, MoveError, Outcome, Score, TurnResult};

fn new_game() -> Game {
    Game::with_first_player("Player X", "Player O", Mark::X)
}

/// Plays a sequence of moves that must all continue the game.
fn play_all(game: &mut Game, cells: &[Cell]) {
    for &cell in cells {
        match game.submit_move(cell) {
            Ok(TurnResult::Continued(_)) => {}
            other => panic!("expected game to continue after {cell}, got {other:?}"),
        }
    }
}

#[test]
fn test_top_row_win_reports_line_and_scores() {
    let mut game = new_game();
    play_all(
        &mut game,
        &[Cell::TopLeft, Cell::MiddleLeft, Cell::TopCenter, Cell::Center],
    );

    // X completes the top row on the fifth move.
    let result = game.submit_move(Cell::TopRight).expect("legal move");
    match result {
        TurnResult::Won {
            winner,
            line,
            scores,
        } => {
            assert_eq!(winner, Mark::X);
            assert_eq!(line, [Cell::TopLeft, Cell::TopCenter, Cell::TopRight]);
            assert_eq!(scores.x.wins, 1);
            assert_eq!(scores.x.ties, 0);
            assert_eq!(scores.o.losses, 1);
            assert_eq!(scores.o.wins, 0);
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_eq!(game.outcome(), Some(Outcome::WinFor(Mark::X)));
}

#[test]
fn test_column_win_for_o() {
    let mut game = new_game();
    play_all(
        &mut game,
        &[
            Cell::TopLeft,      // X
            Cell::TopCenter,    // O
            Cell::TopRight,     // X
            Cell::Center,       // O
            Cell::MiddleLeft,   // X
        ],
    );

    let result = game.submit_move(Cell::BottomCenter).expect("legal move");
    match result {
        TurnResult::Won { winner, line, .. } => {
            assert_eq!(winner, Mark::O);
            assert_eq!(line, [Cell::TopCenter, Cell::Center, Cell::BottomCenter]);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn test_classic_draw_concludes_before_ninth_move() {
    let mut game = new_game();
    play_all(
        &mut game,
        &[
            Cell::TopLeft,     // X
            Cell::TopCenter,   // O
            Cell::TopRight,    // X
            Cell::Center,      // O
            Cell::MiddleLeft,  // X
            Cell::MiddleRight, // O
            Cell::BottomCenter, // X
        ],
    );

    // O's fourth move blocks the last contestable line; the draw is
    // declared with the bottom-right square still open.
    let result = game.submit_move(Cell::BottomLeft).expect("legal move");
    match result {
        TurnResult::Drawn { scores } => {
            assert_eq!(
                scores.x,
                Score {
                    wins: 0,
                    ties: 1,
                    losses: 0
                }
            );
            assert_eq!(scores.x, scores.o);
        }
        other => panic!("expected a draw, got {other:?}"),
    }
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.owner_of(Cell::BottomRight), None);
}

#[test]
fn test_resubmitting_a_claimed_cell_is_rejected() {
    let mut game = new_game();
    game.submit_move(Cell::TopLeft).expect("legal move");

    let err = game.submit_move(Cell::TopLeft).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Cell::TopLeft));

    // State unchanged: still O's turn, one claim on the board, no scores.
    assert_eq!(game.active_mark(), Some(Mark::O));
    assert_eq!(game.claimed_by(Mark::X), &[Cell::TopLeft]);
    assert!(game.claimed_by(Mark::O).is_empty());
    assert_eq!(game.scores().x, Score::default());
}

#[test]
fn test_alternation_parity() {
    let mut game = new_game();
    let cells = [
        Cell::TopLeft,
        Cell::BottomRight,
        Cell::TopCenter,
        Cell::BottomCenter,
    ];
    for (n, &cell) in cells.iter().enumerate() {
        // After n non-terminal moves from X's opening, X acts iff n is even.
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.active_mark(), Some(expected));
        game.submit_move(cell).expect("legal move");
    }
}

#[test]
fn test_scores_accumulate_across_restarts() {
    let mut game = new_game();

    // Game 1: X wins the left column.
    play_all(
        &mut game,
        &[Cell::TopLeft, Cell::TopCenter, Cell::MiddleLeft, Cell::Center],
    );
    game.submit_move(Cell::BottomLeft).expect("legal move");
    assert_eq!(game.scores().x.wins, 1);

    // Game 2: drawn.
    game.restart();
    // Restart may hand the opening to either player; replay the classic
    // draw pattern, which is symmetric in outcome.
    play_all(
        &mut game,
        &[
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::TopRight,
            Cell::Center,
            Cell::MiddleLeft,
            Cell::MiddleRight,
            Cell::BottomCenter,
        ],
    );
    game.submit_move(Cell::BottomLeft).expect("legal move");

    let scores = game.scores();
    assert_eq!(scores.x.wins, 1);
    assert_eq!(scores.o.losses, 1);
    assert_eq!(scores.x.ties, 1);
    assert_eq!(scores.o.ties, 1);
}

#[test]
fn test_restart_flips_a_valid_coin() {
    let mut game = new_game();
    game.submit_move(Cell::Center).expect("legal move");

    let first = game.restart();
    assert_eq!(game.active_mark(), Some(first));
    assert!(game.player(first).is_active());
    assert!(!game.player(first.opponent()).is_active());
    assert!(!game.is_over());
    assert_eq!(game.open_cells().len(), 9);
}

#[test]
fn test_no_moves_accepted_after_conclusion() {
    let mut game = new_game();
    play_all(
        &mut game,
        &[Cell::TopLeft, Cell::MiddleLeft, Cell::TopCenter, Cell::Center],
    );
    game.submit_move(Cell::TopRight).expect("winning move");

    for cell in game.open_cells() {
        assert_eq!(game.submit_move(cell), Err(MoveError::GameOver));
    }
}
