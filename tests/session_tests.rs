//! End-to-end session flow tests.
//!
//! These drive the engine the way a front end does: set up a roster and
//! categories, start, and take turns until the pool runs dry.

use party_quiz::{
    Catalog, Category, CategoryFilter, Phase, Rejection, ScriptedSource, SessionConfig, SessionEngine,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bundled_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../data/questions.json")).expect("bundled catalog parses")
}

fn small_catalog() -> Catalog {
    Catalog::new(vec![
        Category::new("Math", "➗").with_questions(["What is 7 x 8?", "Is zero even?"]),
        Category::new("Food", "🍕").with_questions(["Best breakfast?", "Worst vegetable?", "Spiciest dish?"]),
    ])
    .unwrap()
}

fn seeded(catalog: Catalog, seed: u64) -> SessionEngine {
    SessionEngine::new(catalog, SessionConfig::default().with_seed(seed)).unwrap()
}

/// Starting with every category and answering N times (N = pool size)
/// reaches "no more questions" exactly on the N+1th draw.
#[test]
fn test_full_round_trip_exhausts_pool_once() {
    init_logging();

    for seed in [1, 7, 42, 1234] {
        let mut engine = seeded(bundled_catalog(), seed);
        engine.add_player("Ada").unwrap();
        engine.add_player("Bo").unwrap();

        let total = engine.catalog().total_questions();
        assert_eq!(engine.available_count(), total);

        assert!(engine.start_game().unwrap().is_some());
        for turn in 1..total {
            engine.advance_turn().unwrap();
            assert!(
                !engine.session().is_out_of_questions(),
                "pool ran dry early at turn {} (seed {})",
                turn,
                seed
            );
        }

        engine.advance_turn().unwrap();
        assert!(engine.session().is_out_of_questions());
        assert_eq!(engine.used_count(), total);
        assert_eq!(engine.remaining_count(), 0);

        // Stays in the modeled terminal display
        assert_eq!(engine.advance_turn(), Err(Rejection::OutOfQuestions));
        assert!(engine.session().is_out_of_questions());
    }
}

/// Every drawn question is distinct and comes from the filtered pool.
#[test]
fn test_draws_are_unique_and_filtered() {
    init_logging();
    let mut engine = seeded(small_catalog(), 99);
    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();
    engine.toggle_category("Food").unwrap();
    assert_eq!(engine.session().filter(), &CategoryFilter::subset(["Food"]));

    let mut seen = Vec::new();
    let first = engine.start_game().unwrap().unwrap();
    seen.push(first);

    while engine.advance_turn().is_ok() {
        if let Some(q) = engine.session().current_question() {
            seen.push(q.clone());
        }
    }

    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|q| q.category == "Food" && q.emoji == "🍕"));

    let mut texts: Vec<_> = seen.iter().map(|q| q.text.as_str()).collect();
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), 3);
}

/// Turn order cycles through the roster.
#[test]
fn test_turn_order_cycles() {
    let mut engine = seeded(bundled_catalog(), 5);
    for name in ["Ada", "Bo", "Cy"] {
        engine.add_player(name).unwrap();
    }
    engine.start_game().unwrap();

    let mut order = vec![engine.current_player().unwrap().name.clone()];
    for _ in 0..5 {
        engine.advance_turn().unwrap();
        order.push(engine.current_player().unwrap().name.clone());
    }

    assert_eq!(order, vec!["Ada", "Bo", "Cy", "Ada", "Bo", "Cy"]);
}

/// "Question X of Y" counters follow the draws.
#[test]
fn test_progress_counters() {
    let mut engine = SessionEngine::with_rng(small_catalog(), SessionConfig::default(), ScriptedSource::first())
        .unwrap();
    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();

    assert_eq!((engine.used_count(), engine.available_count()), (0, 5));
    engine.start_game().unwrap();
    assert_eq!((engine.used_count(), engine.available_count()), (1, 5));
    engine.advance_turn().unwrap();
    assert_eq!((engine.used_count(), engine.available_count()), (2, 5));
}

/// Changing categories mid-game keeps used questions out of the pool.
#[test]
fn test_category_change_mid_game() {
    let mut engine = SessionEngine::with_rng(small_catalog(), SessionConfig::default(), ScriptedSource::first())
        .unwrap();
    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();
    engine.start_game().unwrap();
    assert_eq!(engine.session().current_question().unwrap().text, "What is 7 x 8?");

    // Narrow to Math: one Math question left
    engine.toggle_category("Math").unwrap();
    assert_eq!(engine.remaining_count(), 1);

    engine.advance_turn().unwrap();
    assert_eq!(engine.session().current_question().unwrap().text, "Is zero even?");

    engine.advance_turn().unwrap();
    assert!(engine.session().is_out_of_questions());

    // Widening again does not bring back used questions
    engine.select_all_categories();
    assert_eq!(engine.remaining_count(), 3);
    assert!(engine.session().is_used("What is 7 x 8?"));
}

/// Setup rules from an empty session.
#[test]
fn test_setup_validation() {
    let mut engine = seeded(small_catalog(), 3);

    assert_eq!(
        engine.start_game(),
        Err(Rejection::NotEnoughPlayers { needed: 2, have: 0 })
    );

    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();
    engine.toggle_category("All").unwrap();
    assert_eq!(engine.start_game(), Err(Rejection::NoCategories));

    // Nothing selected still reports the whole catalog as available
    assert_eq!(engine.available_count(), 5);

    engine.toggle_category("Math").unwrap();
    assert!(engine.can_start());
    engine.start_game().unwrap();
    assert_eq!(engine.session().phase(), Phase::Active);
    assert_eq!(engine.session().current_question().unwrap().category, "Math");
}

/// An empty pool starts straight into "no more questions".
#[test]
fn test_start_with_empty_pool() {
    let catalog = Catalog::new(vec![Category::new("Empty", "🫙")]).unwrap();
    let mut engine = seeded(catalog, 1);
    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();

    assert_eq!(engine.start_game(), Ok(None));
    assert!(engine.session().is_out_of_questions());
    assert_eq!(engine.used_count(), 0);
}

/// A full roster refuses more players and keeps the emoji palette order.
#[test]
fn test_full_roster() {
    let mut engine = seeded(small_catalog(), 1);
    for i in 0..8 {
        engine.add_player(&format!("P{}", i)).unwrap();
    }

    assert_eq!(engine.add_player("Late"), Err(Rejection::RosterFull(8)));
    assert_eq!(engine.session().roster().len(), 8);

    let emojis: Vec<_> = engine.session().roster().iter().map(|p| p.emoji.as_str()).collect();
    assert_eq!(emojis, party_quiz::PLAYER_EMOJIS.to_vec());
}

/// Stable ids survive roster shifts.
#[test]
fn test_player_ids_survive_removal() {
    let mut engine = seeded(small_catalog(), 1);
    let _ada = engine.add_player("Ada").unwrap();
    let bo = engine.add_player("Bo").unwrap();
    let cy = engine.add_player("Cy").unwrap();

    engine.remove_player(0).unwrap();

    let roster = engine.session().roster();
    assert_eq!(roster.position_of(bo), Some(0));
    assert_eq!(roster.position_of(cy), Some(1));
    assert_eq!(roster.find(cy).unwrap().name, "Cy");
}

/// Snapshots taken before a transition are unaffected by it.
#[test]
fn test_snapshots_are_immutable() {
    let mut engine = seeded(small_catalog(), 1);
    engine.add_player("Ada").unwrap();
    engine.add_player("Bo").unwrap();

    let before = engine.session().clone();
    engine.start_game().unwrap();

    assert_eq!(before.phase(), Phase::Setup);
    assert_eq!(before.used_count(), 0);
    assert_eq!(engine.session().phase(), Phase::Active);
}

/// Catalog and config load from files.
#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("questions.json");
    let config_path = dir.path().join("session.json");
    std::fs::write(&catalog_path, include_str!("../data/questions.json")).unwrap();
    std::fs::write(&config_path, r#"{ "seed": 11, "starting_health": 2 }"#).unwrap();

    let catalog = Catalog::from_path(&catalog_path).unwrap();
    let config = SessionConfig::from_path(&config_path).unwrap();
    let mut engine = SessionEngine::new(catalog, config).unwrap();

    engine.add_player("Ada").unwrap();
    assert_eq!(engine.session().roster()[0].health, 2);
    assert_eq!(engine.config().seed, Some(11));
}
