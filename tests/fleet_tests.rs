use broadside::{
    validate_fleet, ConfigError, Coord, Fleet, GameConfig, Orientation, Ship, ValidationError,
    FLEET_COMPOSITION,
};

fn ship(tokens: &[&str]) -> Ship {
    Ship::new(tokens.iter().map(|t| t.parse::<Coord>().unwrap()).collect())
}

/// A legal standard fleet: ships on alternating rows, spaced apart.
fn standard_ships() -> Vec<Ship> {
    vec![
        ship(&["A1", "A2", "A3", "A4"]),
        ship(&["A6", "A7", "A8"]),
        ship(&["C1", "C2", "C3"]),
        ship(&["C5", "C6"]),
        ship(&["C8", "C9"]),
        ship(&["E1", "E2"]),
        ship(&["E4"]),
        ship(&["E6"]),
        ship(&["E8"]),
        ship(&["E10"]),
    ]
}

#[test]
fn standard_fleet_is_valid() {
    let config = GameConfig::default();
    assert_eq!(validate_fleet(&standard_ships(), &config), Ok(()));
    let fleet = Fleet::new(standard_ships(), &config).unwrap();
    assert_eq!(fleet.ships().len(), FLEET_COMPOSITION.len());
    assert_eq!(fleet.occupied().count_ones(), config.total_ship_cells());
}

#[test]
fn empty_ship_is_rejected_first() {
    let mut ships = standard_ships();
    ships[0] = Ship::new(Vec::new());
    // also out of bounds elsewhere: empty ship wins
    ships[9] = ship(&["K1"]);
    assert_eq!(
        validate_fleet(&ships, &GameConfig::default()),
        Err(ValidationError::EmptyShip)
    );
}

#[test]
fn out_of_bounds_reports_the_cell() {
    let mut ships = standard_ships();
    ships[9] = ship(&["K1"]);
    assert_eq!(
        validate_fleet(&ships, &GameConfig::default()),
        Err(ValidationError::OutOfBounds(Coord::new(10, 0)))
    );
}

#[test]
fn bent_ship_is_rejected_before_composition() {
    let mut ships = standard_ships();
    ships[3] = ship(&["C5", "D6"]);
    ships.pop();
    let err = validate_fleet(&ships, &GameConfig::default()).unwrap_err();
    assert!(matches!(err, ValidationError::NotStraightOrContiguous(_)));
}

#[test]
fn duplicate_cell_in_ship_is_not_contiguous() {
    let mut ships = standard_ships();
    ships[3] = ship(&["C5", "C5"]);
    let err = validate_fleet(&ships, &GameConfig::default()).unwrap_err();
    assert_eq!(err, ValidationError::NotStraightOrContiguous(ship(&["C5", "C5"])));
}

#[test]
fn wrong_composition_lists_sorted_lengths() {
    let mut ships = standard_ships();
    ships.pop();
    let err = validate_fleet(&ships, &GameConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::WrongComposition {
            expected: vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 4],
            actual: vec![1, 1, 1, 2, 2, 2, 3, 3, 4],
        }
    );
}

#[test]
fn overlap_is_rejected() {
    let mut ships = standard_ships();
    ships[9] = ship(&["A1"]);
    assert_eq!(
        validate_fleet(&ships, &GameConfig::default()),
        Err(ValidationError::OverlapOrAdjacency)
    );
}

#[test]
fn diagonal_touch_is_rejected() {
    let mut ships = standard_ships();
    // E10 moves next to C9 diagonally
    ships[9] = ship(&["D10"]);
    assert_eq!(
        validate_fleet(&ships, &GameConfig::default()),
        Err(ValidationError::OverlapOrAdjacency)
    );
}

#[test]
fn validation_is_deterministic() {
    let mut ships = standard_ships();
    ships[9] = ship(&["D10"]);
    let config = GameConfig::default();
    assert_eq!(validate_fleet(&ships, &config), validate_fleet(&ships, &config));
}

#[test]
fn custom_config_changes_the_rules() {
    let config = GameConfig::new(5, vec![3, 1]).unwrap();
    let ships = vec![
        Ship::straight(Coord::new(0, 0), 3, Orientation::Vertical),
        Ship::straight(Coord::new(4, 4), 1, Orientation::Horizontal),
    ];
    assert_eq!(validate_fleet(&ships, &config), Ok(()));
    assert_eq!(
        validate_fleet(&ships, &GameConfig::default()),
        Err(ValidationError::WrongComposition {
            expected: GameConfig::default().sorted_fleet(),
            actual: vec![1, 3],
        })
    );
}

#[test]
fn config_rejects_unplayable_values() {
    assert_eq!(GameConfig::new(0, vec![1]), Err(ConfigError::InvalidBoardSize(0)));
    assert_eq!(GameConfig::new(12, vec![1]), Err(ConfigError::InvalidBoardSize(12)));
    assert_eq!(GameConfig::new(5, vec![]), Err(ConfigError::EmptyFleet));
    assert_eq!(GameConfig::new(5, vec![6]), Err(ConfigError::InvalidShipLength(6)));
    assert_eq!(GameConfig::new(5, vec![0]), Err(ConfigError::InvalidShipLength(0)));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ValidationError::OutOfBounds(Coord::new(10, 0)).to_string(),
        "Coordinate out of bounds: K1"
    );
    assert_eq!(
        ValidationError::OverlapOrAdjacency.to_string(),
        "Ships overlap or touch each other"
    );
}

#[test]
fn straight_ships_have_the_requested_length() {
    let ship = Ship::straight(Coord::new(2, 3), 4, Orientation::Horizontal);
    assert_eq!(ship.to_string(), "C4,C5,C6,C7");
    let ship = Ship::straight(Coord::new(2, 3), 3, Orientation::Vertical);
    assert_eq!(ship.to_string(), "C4,D4,E4");
    assert!(Ship::straight(Coord::new(0, 0), 0, Orientation::Vertical).is_empty());
}

#[test]
fn straight_ship_stops_at_the_coordinate_limit() {
    let ship = Ship::straight(Coord::new(0, 250), 10, Orientation::Horizontal);
    assert_eq!(ship.len(), 6);
    assert_eq!(ship.cells().last(), Some(&Coord::new(0, 255)));
    let ship = Ship::straight(Coord::new(255, 1), 3, Orientation::Vertical);
    assert_eq!(ship.cells(), &[Coord::new(255, 1)]);
}
