//! Health-variant elimination tests.
//!
//! These check skip costs, elimination order and turn hand-off for
//! rosters from 2 to 8 players.

use party_quiz::{
    Catalog, Phase, PlayerId, Rejection, SessionConfig, SessionEngine, TurnOutcome,
};

fn bundled_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../data/questions.json")).unwrap()
}

fn started(names: &[&str], config: SessionConfig) -> SessionEngine {
    let mut engine = SessionEngine::new(bundled_catalog(), config).unwrap();
    for name in names {
        engine.add_player(name).unwrap();
    }
    engine.start_game().unwrap();
    engine
}

fn current_name(engine: &SessionEngine) -> String {
    engine.current_player().map(|p| p.name.clone()).unwrap_or_default()
}

/// A two-player game ends when one player skips three times.
#[test]
fn test_two_players_last_life_ends_game() {
    let mut engine = started(&["Ada", "Bo"], SessionConfig::default().with_seed(42));

    // Ada skips, Bo answers, twice over
    for expected in [2u8, 1] {
        let outcome = engine.skip_turn().unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::LifeLost {
                player: PlayerId::new(0),
                health: expected,
                next: PlayerId::new(1),
            }
        );
        engine.advance_turn().unwrap();
    }
    assert_eq!(engine.session().roster().healths(), vec![1, 3]);
    assert_eq!(current_name(&engine), "Ada");

    let outcome = engine.skip_turn().unwrap();
    assert!(outcome.is_game_over());

    let session = engine.session();
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.winner().map(|p| p.name.as_str()), Some("Bo"));
    assert_eq!(session.roster().len(), 1);
    assert_eq!(session.current_index(), 0);
    assert!(session.current_question().is_none());
    assert!(!session.is_out_of_questions());

    // Ended games take no more turns
    assert_eq!(engine.skip_turn(), Err(Rejection::NotActive));
    assert_eq!(engine.advance_turn(), Err(Rejection::NotActive));
}

/// Losing a life passes the turn as if answered.
#[test]
fn test_life_lost_passes_turn() {
    let mut engine = started(&["Ada", "Bo", "Cy"], SessionConfig::default().with_seed(7));
    engine.skip_turn().unwrap();
    engine.advance_turn().unwrap();
    engine.advance_turn().unwrap();

    // Healths [2, 3, 3] with Ada to play
    assert_eq!(engine.session().roster().healths(), vec![2, 3, 3]);
    assert_eq!(engine.session().current_index(), 0);
    let used_before = engine.used_count();

    engine.skip_turn().unwrap();

    assert_eq!(engine.session().roster().healths(), vec![1, 3, 3]);
    assert_eq!(engine.session().current_index(), 1);
    assert_eq!(engine.used_count(), used_before + 1);
    assert_eq!(engine.session().phase(), Phase::Active);
}

/// Removing the current player leaves the turn on the same slot.
#[test]
fn test_elimination_keeps_slot() {
    let config = SessionConfig::default().with_seed(3).with_starting_health(1);
    let mut engine = started(&["Ada", "Bo", "Cy", "Dee"], config);
    engine.advance_turn().unwrap();
    assert_eq!(current_name(&engine), "Bo");

    let outcome = engine.skip_turn().unwrap();
    match outcome {
        TurnOutcome::Eliminated { player, next } => {
            assert_eq!(player.name, "Bo");
            assert_eq!(next, PlayerId::new(2));
        }
        other => panic!("expected elimination, got {:?}", other),
    }

    let names: Vec<_> = engine.session().roster().names().collect();
    assert_eq!(names, vec!["Ada", "Cy", "Dee"]);
    assert_eq!(engine.session().current_index(), 1);
    assert_eq!(current_name(&engine), "Cy");
    assert!(engine.session().current_question().is_some());
}

/// Eliminating the last slot wraps the turn to the front.
#[test]
fn test_elimination_of_last_slot_wraps() {
    let config = SessionConfig::default().with_seed(3).with_starting_health(1);
    let mut engine = started(&["Ada", "Bo", "Cy"], config);
    engine.advance_turn().unwrap();
    engine.advance_turn().unwrap();
    assert_eq!(current_name(&engine), "Cy");

    engine.skip_turn().unwrap();

    assert_eq!(engine.session().current_index(), 0);
    assert_eq!(current_name(&engine), "Ada");
    assert_eq!(engine.session().roster().len(), 2);
}

/// Everyone skips until one player remains, for every roster size.
#[test]
fn test_knockout_every_roster_size() {
    for count in 2..=8usize {
        let names: Vec<String> = (0..count).map(|i| format!("P{}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let config = SessionConfig::default()
            .with_seed(count as u64)
            .with_starting_health(1);
        let mut engine = started(&name_refs, config);

        let mut eliminated = Vec::new();
        loop {
            match engine.skip_turn().unwrap() {
                TurnOutcome::Eliminated { player, .. } => eliminated.push(player.name),
                TurnOutcome::GameOver { eliminated: last, winner } => {
                    eliminated.push(last.name);
                    assert_eq!(winner.map(|p| p.name), Some(names[count - 1].clone()));
                    break;
                }
                other => panic!("unexpected outcome {:?}", other),
            }
        }

        // The turn never leaves slot 0, so players fall in roster order
        assert_eq!(eliminated, names[..count - 1].to_vec(), "roster of {}", count);
        assert_eq!(engine.session().phase(), Phase::Ended);
    }
}

/// Without the health variant, skipping is refused.
#[test]
fn test_skip_disabled_without_health_variant() {
    let config = SessionConfig::default().with_seed(1).with_health_variant(false);
    let mut engine = started(&["Ada", "Bo"], config);
    let before = engine.session().clone();

    assert_eq!(engine.skip_turn(), Err(Rejection::HealthVariantDisabled));
    assert_eq!(engine.session(), &before);
}

/// Reset after an ended game returns to an empty setup.
#[test]
fn test_reset_after_game_over() {
    let config = SessionConfig::default().with_seed(9).with_starting_health(1);
    let mut engine = started(&["Ada", "Bo"], config);
    assert!(engine.skip_turn().unwrap().is_game_over());

    engine.reset_game();

    let session = engine.session();
    assert_eq!(session.phase(), Phase::Setup);
    assert!(session.roster().is_empty());
    assert!(session.winner().is_none());
    assert!(session.filter().is_all());
    assert_eq!(session.used_count(), 0);
}
