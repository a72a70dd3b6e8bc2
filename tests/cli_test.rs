#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::{
        apply_shot, CellSet, CliPlayer, Coord, Fleet, FleetError, GameConfig, Player, Ship,
        ShotGrid, ShotOutcome,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_select_target_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut grid = ShotGrid::new(&GameConfig::default());
        let fleet = Fleet::new(
            vec![Ship::new(vec![Coord::new(9, 9)])],
            &GameConfig::new(10, vec![1]).unwrap(),
        )
        .unwrap();
        let mut hits = CellSet::new();
        apply_shot(Coord::new(0, 0), &fleet, &mut grid, &mut hits);

        let mut p = player("hello\nK1\nA1\nb2\n");
        let target = p.select_target(&mut rng, &grid);
        assert_eq!(target, Some(Coord::new(1, 1)));

        let out = output(p);
        assert!(out.contains("Invalid coordinate"));
        assert!(out.contains("K1 is off the board"));
        assert!(out.contains("A1 is already resolved"));
    }

    #[test]
    fn test_select_target_none_at_end_of_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut p = player("");
        assert_eq!(p.select_target(&mut rng, &ShotGrid::new(&GameConfig::default())), None);
    }

    #[test]
    fn test_place_fleet_from_typed_coordinates() {
        let config = GameConfig::new(10, vec![3, 1]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut p = player("A1 A2 A3\nC1\n");
        let fleet = p.place_fleet(&mut rng, &config).unwrap();
        assert_eq!(fleet.ships().len(), 2);
        assert_eq!(fleet.ships()[0].to_string(), "A1,A2,A3");
        assert_eq!(fleet.ships()[1].to_string(), "C1");
    }

    #[test]
    fn test_place_fleet_reprompts_after_validation_failure() {
        let config = GameConfig::new(10, vec![3, 1]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        // second ship touches the first, then a wrong count, then a good fleet
        let mut p = player("A1,A2,A3\nB1\nA1 A2\nA1 A2 A3\nE5\n");
        let fleet = p.place_fleet(&mut rng, &config).unwrap();
        assert_eq!(fleet.ships()[1].cells(), &[Coord::new(4, 4)]);

        let out = output(p);
        assert!(out.contains("Fleet validation failed: Ships overlap or touch each other"));
        assert!(out.contains("Expected exactly 3 coordinates, got 2"));
    }

    #[test]
    fn test_place_fleet_random_on_empty_line() {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut p = player("\n");
        let fleet = p.place_fleet(&mut rng, &config).unwrap();
        let expected = Fleet::random(&mut SmallRng::seed_from_u64(12345), &config).unwrap();
        assert_eq!(fleet, expected);
    }

    #[test]
    fn test_place_fleet_aborts_at_end_of_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut p = player("A1 A2 A3 A4\n");
        assert_eq!(
            p.place_fleet(&mut rng, &GameConfig::default()),
            Err(FleetError::Aborted)
        );
    }

    #[test]
    fn test_feedback_messages() {
        let mut p = player("");
        p.handle_shot_result(Coord::new(0, 0), ShotOutcome::Hit);
        p.handle_opponent_shot(Coord::new(2, 3), ShotOutcome::Miss);
        let out = output(p);
        assert!(out.contains("HIT at A1"));
        assert!(out.contains("Bot shoots at C4 -> miss"));
    }
}
