//! Property tests for the cube state engine.
//!
//! Random operation sequences must uphold the engine's invariants:
//! duplicate limits, class-level score agreement, unique instance ids,
//! bounded history, and exact undo/redo round trips.

use proptest::prelude::*;

use cube_core::catalog::{Card, CardId};
use cube_core::config::GameConfig;
use cube_core::cube::{CubeEngine, HISTORY_CAP};
use cube_core::error::CubeError;

fn test_config(limit: Option<u32>) -> GameConfig {
    let config = GameConfig::new("test", "Test Game");
    match limit {
        Some(limit) => config.with_duplicate_limit(limit),
        None => config,
    }
}

fn card(id: u32) -> Card {
    Card::new(CardId::new(id), format!("Card {}", id), "Spell").with_score(50)
}

/// One randomly generated engine operation.
#[derive(Clone, Debug)]
enum Op {
    Add { card_id: u32, count: u32 },
    RemoveAll { card_id: u32 },
    Score { card_id: u32, score: i64 },
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..8, 1u32..4).prop_map(|(card_id, count)| Op::Add { card_id, count }),
        (0u32..8).prop_map(|card_id| Op::RemoveAll { card_id }),
        (0u32..8, -20i64..130).prop_map(|(card_id, score)| Op::Score { card_id, score }),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

fn run(engine: &mut CubeEngine, op: &Op) {
    match op {
        Op::Add { card_id, count } => {
            // Over-limit adds are expected failures; anything else isn't.
            match engine.add_card(&card(*card_id), *count) {
                Ok(()) | Err(CubeError::DuplicateLimitExceeded { .. }) => {}
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        Op::RemoveAll { card_id } => engine.remove_all_copies(CardId::new(*card_id)).unwrap(),
        Op::Score { card_id, score } => engine
            .update_all_copies_score(CardId::new(*card_id), *score)
            .unwrap(),
        Op::Undo => {
            engine.undo();
        }
        Op::Redo => {
            engine.redo();
        }
    }
}

proptest! {
    /// Copy counts never exceed the duplicate limit, under any
    /// operation sequence including undo/redo.
    #[test]
    fn prop_duplicate_limit_holds(
        limit in 1u32..4,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut engine = CubeEngine::new(&test_config(Some(limit)));
        for op in &ops {
            run(&mut engine, op);
            for card_id in 0..8u32 {
                prop_assert!(engine.copy_count(CardId::new(card_id)) <= limit);
            }
        }
    }

    /// All copies of a printing always share one score, and scores
    /// stay clamped into [0, 100].
    #[test]
    fn prop_copies_share_score(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut engine = CubeEngine::new(&test_config(None));
        for op in &ops {
            run(&mut engine, op);
            for card_id in 0..8u32 {
                let scores: Vec<_> = engine
                    .cards_array()
                    .iter()
                    .filter(|c| c.card_id == CardId::new(card_id))
                    .map(|c| c.score)
                    .collect();
                prop_assert!(scores.windows(2).all(|w| w[0] == w[1]));
                for score in scores.into_iter().flatten() {
                    prop_assert!((0..=100).contains(&score));
                }
            }
        }
    }

    /// Instance ids stay unique forever: no two copies alive at once
    /// share an id, and no id is ever reissued after deletion.
    #[test]
    fn prop_instance_ids_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut engine = CubeEngine::new(&test_config(None));
        let mut seen_after_death = std::collections::HashSet::new();
        let mut alive_before: std::collections::HashSet<u64> = std::collections::HashSet::new();

        for op in &ops {
            run(&mut engine, op);

            let alive: Vec<u64> = engine
                .cards_array()
                .iter()
                .map(|c| c.instance_id.raw())
                .collect();
            let unique: std::collections::HashSet<_> = alive.iter().copied().collect();
            prop_assert_eq!(alive.len(), unique.len());

            // Ids that vanished without an undo bringing them back may
            // reappear via redo, but a fresh add must never mint them.
            if let Op::Add { .. } = op {
                for id in unique.difference(&alive_before) {
                    prop_assert!(
                        !seen_after_death.contains(id),
                        "instance id {} was reissued", id
                    );
                }
            }
            for dead in alive_before.difference(&unique) {
                seen_after_death.insert(*dead);
            }
            // Redo can legitimately resurrect a recorded id.
            for back in unique.iter() {
                seen_after_death.remove(back);
            }
            alive_before = unique;
        }
    }

    /// undo() exactly reverses the preceding mutation and redo()
    /// exactly replays it.
    #[test]
    fn prop_undo_redo_round_trip(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut engine = CubeEngine::new(&test_config(None));
        for op in &ops {
            let before = engine.doc().clone();
            let could_change = !matches!(op, Op::Undo | Op::Redo);
            run(&mut engine, op);
            let after = engine.doc().clone();

            if could_change && after != before {
                prop_assert!(engine.undo());
                prop_assert_eq!(engine.doc(), &before);
                prop_assert!(engine.redo());
                prop_assert_eq!(engine.doc(), &after);
            }
        }
    }

    /// The undo depth never exceeds the cap.
    #[test]
    fn prop_history_bounded(ops in prop::collection::vec(op_strategy(), 0..120)) {
        let mut engine = CubeEngine::new(&test_config(None));
        for op in &ops {
            run(&mut engine, op);
        }
        let mut undos = 0;
        while engine.undo() {
            undos += 1;
            prop_assert!(undos <= HISTORY_CAP);
        }
    }
}
