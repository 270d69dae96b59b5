use super::*;

use reversi_core::legal_moves;

#[test]
fn test_fresh_board_with_move_marks() {
    let board = Board::new(4).unwrap();
    let marks: HashSet<Coord> = legal_moves(&board, Color::Black).into_iter().collect();

    let expected = "     a   b   c   d
   +---+---+---+---+
 1 |   | * |   |   |
   +---+---+---+---+
 2 | * | W | B |   |
   +---+---+---+---+
 3 |   | B | W | * |
   +---+---+---+---+
 4 |   |   | * |   |
   +---+---+---+---+
";
    assert_eq!(render_board(&board, &marks), expected);
}

#[test]
fn test_render_without_marks_shows_disks_only() {
    let board = Board::new(8).unwrap();
    let text = render_board(&board, &HashSet::new());

    assert!(!text.contains('*'));
    assert!(text.contains("| W | B |"));
    assert!(text.lines().all(|line| line == line.trim_end()));
}

#[test]
fn test_two_digit_rows_stay_aligned() {
    let board = Board::new(12).unwrap();
    let text = render_board(&board, &HashSet::new());

    assert!(text.contains("\n 9 |"));
    assert!(text.contains("\n10 |"));
    // Every line past the letters header spans the full grid width.
    let width = text.lines().map(str::len).max().unwrap();
    assert!(text.lines().skip(1).all(|line| line.len() == width));
}

#[test]
fn test_counts_line_order() {
    assert_eq!(counts_line(3, 5), "White: 5 - Black: 3");
}
