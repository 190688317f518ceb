use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    CellState, CoordError, EngineError, Fleet, GameConfig, GameSession, GuessOutcome,
    Orientation, SessionStatus,
};

fn session_with(sizes: &[usize], layout: &[(usize, Orientation, usize)]) -> GameSession {
    let config = GameConfig::from_sizes(10, sizes).unwrap();
    let mut session = GameSession::with_rng(config, SmallRng::seed_from_u64(9)).unwrap();
    session
        .start_with_fleet(Fleet::from_layout(10, layout).unwrap())
        .unwrap();
    session
}

/// Ship 0 on C1..C4, ship 1 on A1 so sinking ship 0 does not end the game.
fn two_ship_session() -> GameSession {
    session_with(
        &[4, 1],
        &[(4, Orientation::Horizontal, 20), (1, Orientation::Horizontal, 0)],
    )
}

#[test]
fn single_cell_fleet_is_won_in_one_guess() {
    let mut session = session_with(&[1], &[(1, Orientation::Horizontal, 0)]);
    let outcome = session.submit_guess("A1").unwrap();
    assert_eq!(outcome, GuessOutcome::Won { cell: 0, ship: 0 });
    assert_eq!(session.message(), "You won!");
    assert_eq!(session.remaining_total(), 0);
    assert_eq!(session.status(), SessionStatus::Won);
}

#[test]
fn hit_shrinks_remaining_cells() {
    let mut session = two_ship_session();
    assert_eq!(session.submit_guess("C1").unwrap(), GuessOutcome::Hit(20));
    assert_eq!(session.message(), "You hit a ship!");
    assert_eq!(session.remaining_cells(0), Some(&[21, 22, 23][..]));
    assert_eq!(session.hit_cells(), vec![20]);
}

#[test]
fn last_cell_of_a_ship_announces_the_sink() {
    let mut session = two_ship_session();
    for text in ["C1", "C2", "C3"] {
        assert!(matches!(session.submit_guess(text).unwrap(), GuessOutcome::Hit(_)));
    }
    assert_eq!(
        session.submit_guess("C4").unwrap(),
        GuessOutcome::Sunk { cell: 23, ship: 0 }
    );
    assert_eq!(session.message(), "You sank ship #1!");
    assert!(session.is_sunk(0));
    assert!(!session.is_sunk(1));
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn victory_supersedes_the_final_sink() {
    let mut session = session_with(&[4], &[(4, Orientation::Horizontal, 20)]);
    for text in ["C1", "C2", "C3"] {
        session.submit_guess(text).unwrap();
    }
    assert_eq!(
        session.submit_guess("C4").unwrap(),
        GuessOutcome::Won { cell: 23, ship: 0 }
    );
    assert_eq!(session.message(), "You won!");
    assert_eq!(session.sunk_count(), 1);
}

#[test]
fn off_grid_row_is_out_of_range_and_not_recorded() {
    let mut session = two_ship_session();
    assert_eq!(
        session.submit_guess("Z1").unwrap(),
        GuessOutcome::Invalid(CoordError::OutOfRange)
    );
    assert!(session.guessed_cells().is_empty());
}

#[test]
fn trailing_garbage_is_malformed_with_its_own_message() {
    let mut session = two_ship_session();
    session.submit_guess("Z1").unwrap();
    let out_of_range = session.message();
    assert_eq!(
        session.submit_guess("Z1A").unwrap(),
        GuessOutcome::Invalid(CoordError::Malformed)
    );
    assert_ne!(session.message(), out_of_range);
    assert!(session.guessed_cells().is_empty());
}

#[test]
fn blank_input_is_rejected_first() {
    let mut session = two_ship_session();
    assert_eq!(
        session.submit_guess("  ").unwrap(),
        GuessOutcome::Invalid(CoordError::Empty)
    );
    assert!(session.guessed_cells().is_empty());
}

#[test]
fn repeated_cell_is_already_guessed() {
    let mut session = two_ship_session();
    session.submit_guess("C1").unwrap();
    let remaining = session.remaining_cells(0).unwrap().to_vec();
    assert_eq!(
        session.submit_guess("c1").unwrap(),
        GuessOutcome::AlreadyGuessed(20)
    );
    assert_eq!(session.message(), "You already tried this cell");
    assert_eq!(session.remaining_cells(0).unwrap(), remaining.as_slice());
    assert_eq!(session.guessed_cells(), &[20]);

    session.submit_guess("J10").unwrap();
    assert_eq!(session.submit_guess("J10").unwrap(), GuessOutcome::AlreadyGuessed(99));
    assert_eq!(session.guessed_cells(), &[20, 99]);
}

#[test]
fn miss_is_recorded() {
    let mut session = two_ship_session();
    assert_eq!(session.submit_guess("B2").unwrap(), GuessOutcome::Miss(11));
    assert_eq!(session.message(), "You missed!");
    assert_eq!(session.cell_state(11), Some(CellState::Miss));
    assert_eq!(session.cell_state(21), Some(CellState::Ship));
    assert_eq!(session.cell_state(100), None);
}

#[test]
fn guesses_after_victory_change_nothing() {
    let mut session = session_with(&[1], &[(1, Orientation::Horizontal, 0)]);
    session.submit_guess("A1").unwrap();
    assert_eq!(session.submit_guess("B1").unwrap(), GuessOutcome::GameOver);
    assert_eq!(session.guessed_cells(), &[0]);
    assert_eq!(session.message(), "You won!");
    assert!(session.is_over());
}

#[test]
fn idle_session_refuses_guesses() {
    let mut session =
        GameSession::with_rng(GameConfig::default(), SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.submit_guess("A1"), Err(EngineError::NotStarted));
    assert_eq!(session.message(), "");
}

#[test]
fn reset_replaces_all_state() {
    let mut session =
        GameSession::with_rng(GameConfig::default(), SmallRng::seed_from_u64(3)).unwrap();
    session.reset().unwrap();
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.remaining_total(), 13);

    for cell in ["A1", "B2", "C3", "D4"] {
        session.submit_guess(cell).unwrap();
    }
    assert_eq!(session.guessed_cells().len(), 4);

    session.reset().unwrap();
    assert!(session.guessed_cells().is_empty());
    assert_eq!(session.remaining_total(), 13);
    assert_eq!(session.sunk_count(), 0);
    assert_eq!(session.message(), "");
}

#[test]
fn fixed_fleet_must_match_grid() {
    let mut session =
        GameSession::with_rng(GameConfig::default(), SmallRng::seed_from_u64(3)).unwrap();
    let fleet = Fleet::from_layout(5, &[(2, Orientation::Vertical, 0)]).unwrap();
    assert_eq!(
        session.start_with_fleet(fleet),
        Err(EngineError::GridMismatch { expected: 10, found: 5 })
    );
}

#[test]
fn invalid_config_is_rejected_up_front() {
    assert_eq!(
        GameConfig::from_sizes(4, &[5]),
        Err(EngineError::ShipTooLong { ship: 0, size: 5, grid_size: 4 })
    );
    assert_eq!(GameConfig::from_sizes(30, &[2]), Err(EngineError::InvalidGridSize(30)));
}

#[test]
fn snapshot_reports_renderer_view() {
    let mut session = two_ship_session();
    session.submit_guess("C1").unwrap();
    session.submit_guess("B2").unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.ships, vec![vec![20, 21, 22, 23], vec![0]]);
    assert_eq!(snap.guessed, vec![20, 11]);
    assert_eq!(snap.hits, vec![20]);
    assert_eq!(snap.remaining, vec![vec![21, 22, 23], vec![0]]);
    assert_eq!(snap.message, "You missed!");
    assert_eq!(snap.status, SessionStatus::InProgress);
}

#[test]
fn sessions_are_independent() {
    let mut a = two_ship_session();
    let b = two_ship_session();
    a.submit_guess("C1").unwrap();
    assert!(b.guessed_cells().is_empty());
    assert_eq!(b.remaining_total(), 5);
}

#[test]
fn thread_seeded_session_plays_a_full_game() {
    let mut session = GameSession::new(GameConfig::from_sizes(4, &[2, 1]).unwrap()).unwrap();
    assert_eq!(session.status(), SessionStatus::Idle);
    session.reset().unwrap();
    let cells: Vec<usize> = session.fleet().unwrap().occupied_cells().collect();
    assert_eq!(cells.len(), 3);
    for cell in cells {
        let label = salvo::format_label(cell, 4).unwrap().to_string();
        assert!(session.submit_guess(&label).unwrap().is_recorded());
    }
    assert_eq!(session.status(), SessionStatus::Won);
}
