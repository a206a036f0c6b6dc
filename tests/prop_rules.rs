//! Property-based tests for the transition function.
//!
//! Random action sequences are applied to generated games; each property
//! is checked after every step.

use proptest::prelude::*;
use proptest::sample::Index;

use hexclaim::core::{Action, Actor, Game, GameRng};
use hexclaim::distribution::{create, GameDistribution, ResourceDistribution};
use hexclaim::geometry::Coord;
use hexclaim::rules::{replay, transition};
use hexclaim::scoring::score;

/// Build an action from a kind selector and a cell index.
fn pick_action(game: &Game, kind: u8, index: &Index) -> Action {
    let coords: Vec<Coord> = game.cells.coords().collect();
    let coord = coords[index.index(coords.len())];
    match kind {
        0 => Action::Pass,
        1 => Action::DelegateToMediator,
        2 => Action::release(coord),
        3 => Action::claim(Coord::new(-7, -7)),
        _ => Action::claim(coord),
    }
}

fn game_strategy() -> impl Strategy<Value = Game> {
    (2u32..6, 0u32..12, any::<u64>()).prop_map(|(side, budget, seed)| {
        let resources = ResourceDistribution::Exact { value: budget };
        let dist = GameDistribution::hex(side, -3, 9, resources);
        create(&dist, &mut GameRng::new(seed))
    })
}

fn steps_strategy() -> impl Strategy<Value = Vec<(u8, Index)>> {
    prop::collection::vec((0u8..7, any::<Index>()), 0..80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Claims cost 1 or 3 by occupancy, rejections change nothing, and
    /// resources never grow.
    #[test]
    fn prop_claim_pricing(game in game_strategy(), steps in steps_strategy()) {
        let mut game = game;
        for (kind, index) in &steps {
            let action = pick_action(&game, *kind, index);
            let actor = game.current_actor;
            let before = game.clone();

            match transition(&game, &action) {
                Ok(next) => {
                    if let Action::Claim { coord } = action {
                        let occupied = before.cell(coord).unwrap().is_occupied();
                        let expected = if occupied { 3 } else { 1 };
                        prop_assert_eq!(
                            before.remaining_resources[actor] - next.remaining_resources[actor],
                            expected
                        );
                        prop_assert_eq!(
                            next.remaining_resources[actor.other()],
                            before.remaining_resources[actor.other()]
                        );
                    } else {
                        prop_assert_eq!(next.remaining_resources, before.remaining_resources);
                    }
                    game = next;
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    /// Turn order, delegation, and the pass chain follow each applied action.
    #[test]
    fn prop_turn_flags(game in game_strategy(), steps in steps_strategy()) {
        let start_actor = game.current_actor;
        let mut game = game;
        let mut turn_enders = 0usize;
        let mut last_two_passes = (false, false);

        for (kind, index) in &steps {
            if game.is_over {
                break;
            }
            let action = pick_action(&game, *kind, index);
            let Ok(next) = transition(&game, &action) else { continue };

            if action.ends_turn() {
                turn_enders += 1;
            }
            prop_assert_eq!(next.current_actor_delegated, action == Action::DelegateToMediator);

            let expected_actor =
                if turn_enders % 2 == 0 { start_actor } else { start_actor.other() };
            prop_assert_eq!(next.current_actor, expected_actor);

            match action {
                Action::Pass => last_two_passes = (last_two_passes.1, true),
                Action::Claim { .. } => last_two_passes = (last_two_passes.1, false),
                Action::Release { .. } | Action::DelegateToMediator => {}
            }
            prop_assert_eq!(next.is_over, last_two_passes.0 && last_two_passes.1);
            prop_assert_eq!(next.last_actor_passed, last_two_passes.1);

            game = next;
        }
    }

    /// Topology and worths never change; scoring is idempotent.
    #[test]
    fn prop_topology_fixed(game in game_strategy(), steps in steps_strategy()) {
        let start = game.clone();
        let mut game = game;
        for (kind, index) in &steps {
            let action = pick_action(&game, *kind, index);
            if let Ok(next) = transition(&game, &action) {
                game = next;
            }
        }

        let before: Vec<_> = start.cells.iter().map(|(c, cell)| (c, cell.worth)).collect();
        let after: Vec<_> = game.cells.iter().map(|(c, cell)| (c, cell.worth)).collect();
        prop_assert_eq!(before, after);

        let snapshot = game.clone();
        prop_assert_eq!(score(&game), score(&game));
        prop_assert_eq!(game, snapshot);
    }

    /// Folding the applied actions reproduces the same snapshot.
    #[test]
    fn prop_replay_matches_stepping(game in game_strategy(), steps in steps_strategy()) {
        let start = game.clone();
        let mut game = game;
        let mut applied = Vec::new();
        for (kind, index) in &steps {
            let action = pick_action(&game, *kind, index);
            if let Ok(next) = transition(&game, &action) {
                applied.push(action);
                game = next;
            }
        }

        prop_assert_eq!(replay(&start, &applied).unwrap(), game);
    }

    /// Scores only count cells owned by the scoring actor.
    #[test]
    fn prop_score_matches_owned_cells(game in game_strategy(), steps in steps_strategy()) {
        let mut game = game;
        for (kind, index) in &steps {
            let action = pick_action(&game, *kind, index);
            if let Ok(next) = transition(&game, &action) {
                game = next;
            }
        }

        let scores = score(&game);
        for actor in Actor::ALL {
            let expected: i64 = game
                .occupied_by(actor)
                .into_iter()
                .map(|c| game.cell(c).unwrap().worth[actor])
                .sum();
            prop_assert_eq!(scores[actor], expected);
        }
    }
}
