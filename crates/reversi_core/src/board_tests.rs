use super::*;

#[test]
fn test_new_places_center_cross() {
    let board = Board::new(8).unwrap();
    assert_eq!(board.get(Coord::new(3, 3)).unwrap(), Some(Color::White));
    assert_eq!(board.get(Coord::new(4, 4)).unwrap(), Some(Color::White));
    assert_eq!(board.get(Coord::new(3, 4)).unwrap(), Some(Color::Black));
    assert_eq!(board.get(Coord::new(4, 3)).unwrap(), Some(Color::Black));
    assert_eq!(board.count_disks(), (2, 2));

    // every non-center cell starts empty
    let empties = board
        .cells()
        .filter(|&(_, cell)| cell.is_none())
        .count();
    assert_eq!(empties, 60);
}

#[test]
fn test_new_scales_center_with_size() {
    let board = Board::new(6).unwrap();
    assert_eq!(board.get(Coord::new(2, 2)).unwrap(), Some(Color::White));
    assert_eq!(board.get(Coord::new(3, 3)).unwrap(), Some(Color::White));
    assert_eq!(board.get(Coord::new(2, 3)).unwrap(), Some(Color::Black));
    assert_eq!(board.get(Coord::new(3, 2)).unwrap(), Some(Color::Black));
}

#[test]
fn test_new_rejects_bad_sizes() {
    assert_eq!(Board::new(0), Err(GameError::InvalidSize { size: 0 }));
    assert_eq!(Board::new(7), Err(GameError::InvalidSize { size: 7 }));
    assert_eq!(Board::new(1), Err(GameError::InvalidSize { size: 1 }));
    assert!(Board::new(2).is_ok());
}

#[test]
fn test_get_set_are_bounds_checked() {
    let mut board = Board::new(8).unwrap();
    let outside = Coord::new(8, 0);
    assert_eq!(
        board.get(outside),
        Err(GameError::OutOfBounds {
            coord: outside,
            size: 8
        })
    );
    assert_eq!(
        board.set(outside, Some(Color::Black)),
        Err(GameError::OutOfBounds {
            coord: outside,
            size: 8
        })
    );

    let inside = Coord::new(0, 0);
    assert_eq!(board.get(inside).unwrap(), None);
    board.set(inside, Some(Color::Black)).unwrap();
    assert_eq!(board.get(inside).unwrap(), Some(Color::Black));
}

#[test]
fn test_clone_is_independent() {
    let board = Board::new(8).unwrap();
    let mut copy = board.clone();
    copy.set(Coord::new(0, 0), Some(Color::White)).unwrap();
    assert_eq!(board.get(Coord::new(0, 0)).unwrap(), None);
    assert_eq!(copy.get(Coord::new(0, 0)).unwrap(), Some(Color::White));
    assert_ne!(board, copy);
}

#[test]
fn test_count_disks_full_scan() {
    let mut board = Board::new(4).unwrap();
    board.set(Coord::new(0, 0), Some(Color::Black)).unwrap();
    board.set(Coord::new(0, 1), Some(Color::Black)).unwrap();
    board.set(Coord::new(3, 3), Some(Color::White)).unwrap();
    assert_eq!(board.count_disks(), (4, 3));
}

#[test]
fn test_coords_canonical_order() {
    let board = Board::new(4).unwrap();
    let all: Vec<Coord> = board.coords().collect();
    assert_eq!(all.len(), 16);
    assert_eq!(all[0], Coord::new(0, 0));
    assert_eq!(all[1], Coord::new(0, 1));
    assert_eq!(all[4], Coord::new(1, 0));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
