//! Tests for tic-tac-toe positions.

use tictactoe_rules::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_rows_and_columns_are_one_based() {
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.column()), (1, 1));
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.column()), (2, 3));
    assert_eq!((Position::BottomCenter.row(), Position::BottomCenter.column()), (3, 2));
}

#[test]
fn test_step_clamps_at_edges() {
    assert_eq!(Position::TopLeft.step(-1, 0), Position::TopLeft);
    assert_eq!(Position::TopLeft.step(0, 1), Position::TopCenter);
    assert_eq!(Position::Center.step(1, 1), Position::BottomRight);
    assert_eq!(Position::BottomRight.step(1, 1), Position::BottomRight);
}
