use broadside::{
    apply_shot, Cell, CellSet, Coord, Fleet, GameConfig, GridParseError, Ship, ShotGrid,
    ShotOutcome,
};

fn single_cell_game() -> (GameConfig, Fleet) {
    let config = GameConfig::new(10, vec![1]).unwrap();
    let fleet = Fleet::new(vec![Ship::new(vec![Coord::new(0, 0)])], &config).unwrap();
    (config, fleet)
}

#[test]
fn sinking_a_corner_ship_marks_its_perimeter() {
    let (config, fleet) = single_cell_game();
    let mut grid = ShotGrid::new(&config);
    let mut hits = CellSet::new();

    let outcome = apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits);
    assert_eq!(outcome, ShotOutcome::Sink);

    let text = grid.serialize();
    assert_eq!(text.len(), 100);
    for (idx, ch) in text.chars().enumerate() {
        let expected = match idx {
            0 => 'H',
            1 | 10 | 11 => 'M',
            _ => 'U',
        };
        assert_eq!(ch, expected, "cell {}", idx);
    }
    assert!(fleet.all_destroyed(&hits));
}

#[test]
fn miss_then_hit_then_sink() {
    let config = GameConfig::new(10, vec![2]).unwrap();
    let fleet = Fleet::new(
        vec![Ship::new(vec![Coord::new(4, 4), Coord::new(4, 5)])],
        &config,
    )
    .unwrap();
    let mut grid = ShotGrid::new(&GameConfig::default());
    let mut hits = CellSet::new();

    assert_eq!(apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits), ShotOutcome::Miss);
    assert_eq!(grid.get(Coord::new(0, 0)), Cell::Miss);

    assert_eq!(apply_shot(Coord::new(4, 4), &fleet, &mut grid, &mut hits), ShotOutcome::Hit);
    // no perimeter yet
    assert_eq!(grid.get(Coord::new(3, 4)), Cell::Unknown);
    assert!(!fleet.all_destroyed(&hits));

    assert_eq!(apply_shot(Coord::new(4, 5), &fleet, &mut grid, &mut hits), ShotOutcome::Sink);
    // 4x3 box around the ship, minus the two ship cells
    assert_eq!(grid.misses().count_ones(), 1 + 10);
    assert_eq!(grid.hits().count_ones(), 2);
    assert!(fleet.all_destroyed(&hits));
}

#[test]
fn neighbouring_sinks_share_perimeter_cells() {
    let config = GameConfig::new(10, vec![1, 1]).unwrap();
    let fleet = Fleet::new(
        vec![
            Ship::new(vec![Coord::new(0, 0)]),
            Ship::new(vec![Coord::new(0, 2)]),
        ],
        &config,
    )
    .unwrap();
    let mut grid = ShotGrid::new(&GameConfig::default());
    let mut hits = CellSet::new();

    assert_eq!(apply_shot(Coord::new(0, 2), &fleet, &mut grid, &mut hits), ShotOutcome::Sink);
    assert_eq!(grid.get(Coord::new(0, 1)), Cell::Miss);
    assert_eq!(apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits), ShotOutcome::Sink);
    assert_eq!(grid.get(Coord::new(0, 0)), Cell::Hit);
    assert_eq!(grid.get(Coord::new(0, 1)), Cell::Miss);
    assert_eq!(grid.get(Coord::new(0, 2)), Cell::Hit);
    // A1 and A3 boxes overlap on A2 and B2
    assert_eq!(grid.misses().count_ones(), 5 + 1);
}

#[test]
fn repeat_fire_changes_nothing() {
    let (_, fleet) = single_cell_game();
    let mut grid = ShotGrid::new(&GameConfig::default());
    let mut hits = CellSet::new();

    apply_shot(Coord::new(5, 5), &fleet, &mut grid, &mut hits);
    let before = (grid, hits);
    assert_eq!(
        apply_shot(Coord::new(5, 5), &fleet, &mut grid, &mut hits),
        ShotOutcome::AlreadyTried
    );
    assert_eq!((grid, hits), before);

    // a perimeter cell is resolved too
    apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits);
    assert_eq!(
        apply_shot(Coord::new(1, 1), &fleet, &mut grid, &mut hits),
        ShotOutcome::AlreadyTried
    );
}

#[test]
fn deserialize_restores_a_grid() {
    let (_, fleet) = single_cell_game();
    let mut grid = ShotGrid::new(&GameConfig::default());
    let mut hits = CellSet::new();
    apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits);
    apply_shot(Coord::new(9, 9), &fleet, &mut grid, &mut hits);

    let back = ShotGrid::deserialize(&GameConfig::default(), &grid.serialize()).unwrap();
    assert_eq!(back, grid);
    assert_eq!(back.unknown().count_ones(), 100 - 5);
}

#[test]
fn deserialize_rejects_bad_input() {
    assert_eq!(
        ShotGrid::deserialize(&GameConfig::default(), "UUU"),
        Err(GridParseError::WrongLength {
            expected: 100,
            actual: 3
        })
    );
    let mut text = "U".repeat(99);
    text.push('Q');
    assert_eq!(
        ShotGrid::deserialize(&GameConfig::default(), &text),
        Err(GridParseError::UnknownSymbol('Q'))
    );
}

#[test]
fn off_board_shots_are_already_tried() {
    let (config, fleet) = single_cell_game();
    let mut grid = ShotGrid::new(&config);
    let mut hits = CellSet::new();

    // K11 still fits the bitboard but lies off a 10x10 board
    for coord in [Coord::new(10, 10), Coord::new(10, 10), Coord::new(200, 3)] {
        assert_eq!(grid.get(coord), Cell::Miss);
        assert_eq!(apply_shot(coord, &fleet, &mut grid, &mut hits), ShotOutcome::AlreadyTried);
    }
    assert_eq!(grid, ShotGrid::new(&config));
    assert!(hits.is_empty());
    assert_eq!(grid.unknown().count_ones(), 100);
}

#[test]
fn largest_board_resolves_its_far_corner() {
    let config = GameConfig::new(11, vec![1]).unwrap();
    let fleet = Fleet::new(vec![Ship::new(vec![Coord::new(0, 0)])], &config).unwrap();
    let mut grid = ShotGrid::new(&config);
    let mut hits = CellSet::new();
    let corner = Coord::new(10, 10);

    assert_eq!(apply_shot(corner, &fleet, &mut grid, &mut hits), ShotOutcome::Miss);
    assert_eq!(apply_shot(corner, &fleet, &mut grid, &mut hits), ShotOutcome::AlreadyTried);
    assert_eq!(grid.misses().count_ones(), 1);
    assert_eq!(grid.serialize().len(), 121);
    assert!(GameConfig::new(12, vec![1]).is_err());
}
