use broadside::{
    in_bounds, is_straight_and_contiguous, neighbors8, orthogonal_neighbors, Coord,
    CoordParseError, BOARD_SIZE,
};

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

#[test]
fn bounds_are_half_open() {
    assert!(in_bounds(c(0, 0), BOARD_SIZE));
    assert!(in_bounds(c(9, 9), BOARD_SIZE));
    assert!(!in_bounds(c(10, 0), BOARD_SIZE));
    assert!(!in_bounds(c(0, 10), BOARD_SIZE));
}

#[test]
fn neighbor_counts_clip_to_board() {
    assert_eq!(neighbors8(c(0, 0), BOARD_SIZE).count(), 3);
    assert_eq!(neighbors8(c(0, 5), BOARD_SIZE).count(), 5);
    assert_eq!(neighbors8(c(5, 5), BOARD_SIZE).count(), 8);

    let mut ortho: Vec<_> = orthogonal_neighbors(c(0, 0), BOARD_SIZE).collect();
    ortho.sort();
    assert_eq!(ortho, vec![c(0, 1), c(1, 0)]);
    assert_eq!(orthogonal_neighbors(c(4, 4), BOARD_SIZE).count(), 4);
}

#[test]
fn neighbors_never_include_self() {
    for n in neighbors8(c(3, 3), BOARD_SIZE) {
        assert_ne!(n, c(3, 3));
        assert_eq!(n.chebyshev(c(3, 3)), 1);
    }
}

#[test]
fn straight_and_contiguous_shapes() {
    assert!(is_straight_and_contiguous(&[]));
    assert!(is_straight_and_contiguous(&[c(4, 4)]));
    assert!(is_straight_and_contiguous(&[c(0, 0), c(0, 1), c(0, 2)]));
    assert!(is_straight_and_contiguous(&[c(2, 5), c(0, 5), c(1, 5)]));

    // gap
    assert!(!is_straight_and_contiguous(&[c(0, 0), c(0, 2)]));
    // bent
    assert!(!is_straight_and_contiguous(&[c(0, 0), c(0, 1), c(1, 1)]));
    // diagonal
    assert!(!is_straight_and_contiguous(&[c(0, 0), c(1, 1)]));
    // duplicate cell
    assert!(!is_straight_and_contiguous(&[c(0, 0), c(0, 0)]));
}

#[test]
fn tokens_display_and_parse() {
    assert_eq!(c(0, 0).to_string(), "A1");
    assert_eq!(c(9, 9).to_string(), "J10");
    assert_eq!("B7".parse::<Coord>(), Ok(c(1, 6)));
    assert_eq!(" j10 ".parse::<Coord>(), Ok(c(9, 9)));

    assert_eq!("".parse::<Coord>(), Err(CoordParseError::Empty));
    assert_eq!("11".parse::<Coord>(), Err(CoordParseError::InvalidRow('1')));
    assert_eq!("A0".parse::<Coord>(), Err(CoordParseError::InvalidColumn));
    assert_eq!("Ax".parse::<Coord>(), Err(CoordParseError::InvalidColumn));
}

#[test]
fn parse_does_not_bounds_check() {
    let far: Coord = "Z20".parse().unwrap();
    assert_eq!(far, c(25, 19));
    assert!(!in_bounds(far, BOARD_SIZE));
}
