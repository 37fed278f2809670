//! Scenario tests for playing and travelling through history.

use timetravel_core::invariants::{InvariantSet, StoreInvariants};
use timetravel_core::rules::{LINES, filled_count, status, winner};
use timetravel_core::{
    Action, ActionOutcome, Board, ClickOutcome, Game, Player, Position, Square, Status,
};

fn play_all(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        let pos = Position::from_index(cell).expect("cell in range");
        assert!(
            matches!(game.click(pos), ClickOutcome::Played(..)),
            "click on {cell} should play"
        );
    }
}

#[test]
fn test_first_click_in_center() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);

    let history = game.store().history();
    let mut expected = [Square::Empty; 9];
    expected[4] = Square::Occupied(Player::X);
    assert_eq!(history.get(1), Some(&Board::from_squares(expected)));
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.view().status().to_string(), "Next player: O");
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    // X: 0, 1, 2; O: 3, 4
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    let view = game.view();
    assert_eq!(*view.winner(), Some(Player::X));
    assert_eq!(view.status().to_string(), "Winner: X");
}

#[test]
fn test_play_after_jump_discards_future() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 3, 4]);
    assert_eq!(game.store().history().len(), 6);

    assert!(game.jump(0));
    play_all(&mut game, &[8]);

    let history = game.store().history();
    assert_eq!(history.len(), 2);
    assert_eq!(game.current_move(), 1);
    assert_eq!(
        history.get(1).map(|b| b.get(Position::BottomRight)),
        Some(Square::Occupied(Player::X))
    );
    assert!(StoreInvariants::check_all(game.store()).is_ok());
}

#[test]
fn test_play_from_middle_truncates_after_current() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 3]);
    let kept: Vec<Board> = game.store().history().boards()[..3].to_vec();

    game.jump(2);
    // Index 2 is even, so X is back on move.
    assert_eq!(game.next_player(), Player::X);
    play_all(&mut game, &[8]);

    let boards = game.store().history().boards();
    assert_eq!(boards.len(), 4);
    assert_eq!(&boards[..3], kept.as_slice());
}

#[test]
fn test_jump_never_mutates_history() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    let before = game.store().history().clone();

    for index in [0, 2, 1, 3, 0] {
        assert!(game.jump(index));
        assert_eq!(game.current_move(), index);
        assert_eq!(game.store().history(), &before);
    }
}

#[test]
fn test_turn_follows_displayed_move() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump(1);
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.view().status(), &Status::NextPlayer(Player::O));
}

#[test]
fn test_draw_is_terminal() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let view = game.view();
    assert_eq!(view.status().to_string(), "Draw");
    assert_eq!(*view.winner(), None);

    let revision = *game.store().revision();
    let history = game.store().history().clone();
    for pos in Position::ALL {
        assert_eq!(game.click(pos), ClickOutcome::Occupied(pos));
    }
    assert_eq!(*game.store().revision(), revision);
    assert_eq!(game.store().history(), &history);
}

#[test]
fn test_won_game_ignores_clicks() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let len = game.store().history().len();

    assert_eq!(
        game.dispatch(Action::Click(Position::BottomRight)),
        ActionOutcome::Clicked(ClickOutcome::GameOver)
    );
    assert_eq!(game.store().history().len(), len);
}

#[test]
fn test_jump_back_out_of_won_state() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.jump(4);

    assert_eq!(*game.view().winner(), None);
    assert_eq!(game.view().status().to_string(), "Next player: X");
    // Diverging from here replaces the winning move.
    play_all(&mut game, &[8]);
    assert_eq!(game.store().history().len(), 6);
    assert_eq!(*game.view().winner(), None);
}

fn board_from_code(mut code: usize) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in &mut squares {
        *square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

#[test]
fn test_all_boards_without_a_line() {
    let mut open = 0;
    let mut full = 0;
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        let has_line = LINES.iter().any(|line| {
            let first = board.get(line[0]);
            first != Square::Empty && line.iter().all(|&pos| board.get(pos) == first)
        });
        if has_line {
            continue;
        }

        assert_eq!(winner(&board), None, "{}", board.display());
        let filled = filled_count(&board);
        let text = status(winner(&board), filled, Player::for_move(filled)).to_string();
        if filled < 9 {
            open += 1;
            assert!(text.starts_with("Next player: "), "{text}");
        } else {
            full += 1;
            assert_eq!(text, "Draw");
        }
    }
    assert!(open > 0);
    assert!(full > 0);
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        let board = line
            .iter()
            .fold(Board::new(), |b, &p| b.with(p, Square::Occupied(Player::O)));
        assert_eq!(winner(&board), Some(Player::O));
    }
}

#[test]
fn test_view_serializes() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    let json = serde_json::to_value(game.view()).expect("view serializes");
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["entries"][1]["label"], "Go to move #1");
}
