//! Sampling a starting game from a `GameDistribution`.
//!
//! ## Order of draws
//!
//! 1. Resource pools (red, then blue for `Uniform`).
//! 2. Cell worths in row-major order, red then blue per cell.
//! 3. Red's starting cell, then blue's, resampled until distinct.
//! 4. The mediator bias, if any.
//!
//! The order is fixed so a seed reproduces the same game.

use tracing::debug;

use super::config::{DistributionLimits, GameDistribution, MediatorBias, ResourceDistribution};
use crate::core::{Actor, ActorMap, Board, Cell, DistributionError, Game, GameRng, Occupier};
use crate::geometry::Coord;

/// Mediator weights when red is the doubled side.
const RED_DOUBLED: ActorMap<i64> = ActorMap::new(2, 1);

/// Mediator weights when blue is the doubled side.
const BLUE_DOUBLED: ActorMap<i64> = ActorMap::new(1, 2);

/// Generate a fresh game from `distribution`.
///
/// Never rejects: limits are the caller's concern (see `create_checked`).
/// Boards with fewer than two cells get as many starting claims as fit.
///
/// ```
/// use hexclaim::core::GameRng;
/// use hexclaim::distribution::{create, GameDistribution};
///
/// let game = create(&GameDistribution::classic(), &mut GameRng::new(7));
/// assert_eq!(game.cells.len(), 49);
/// assert_eq!(game.remaining_resources.red, 20);
/// ```
pub fn create(distribution: &GameDistribution, rng: &mut GameRng) -> Game {
    let resources = sample_resources(&distribution.resources, rng);

    let (min, max) = distribution.board.worth_range();
    let coords = distribution.board.shape().coords();
    let cells: Vec<_> = coords
        .iter()
        .map(|&coord| {
            let red = rng.gen_range_inclusive(min, max);
            let blue = rng.gen_range_inclusive(min, max);
            (coord, Cell::new(ActorMap::new(red, blue)))
        })
        .collect();
    // Shape coordinates are distinct, so this cannot fail.
    let mut board = Board::from_cells(cells).unwrap_or_default();

    if !coords.is_empty() {
        let red_start = coords[rng.gen_index(coords.len())];
        board = seed_claim(&board, red_start, Actor::Red);

        if coords.len() >= 2 {
            let blue_start = loop {
                let candidate = coords[rng.gen_index(coords.len())];
                if candidate != red_start {
                    break candidate;
                }
            };
            board = seed_claim(&board, blue_start, Actor::Blue);
        }
    }

    let mut game = Game::new(board, resources);
    if let Some(MediatorBias::ProbSymmetric2x { p }) = distribution.mediator_bias {
        let weights = if rng.gen_bool(p) { RED_DOUBLED } else { BLUE_DOUBLED };
        game = game.with_mediator_weights(weights);
    }

    debug!(
        seed = rng.seed(),
        cells = game.cells.len(),
        red_resources = game.remaining_resources.red,
        blue_resources = game.remaining_resources.blue,
        "generated game"
    );
    game
}

/// Validate `distribution`, sample a game, and check its snapshot size.
pub fn create_checked(
    distribution: &GameDistribution,
    limits: &DistributionLimits,
    rng: &mut GameRng,
) -> Result<Game, DistributionError> {
    limits.validate(distribution)?;
    let game = create(distribution, rng);
    limits.check_snapshot(&game)?;
    Ok(game)
}

fn sample_resources(resources: &ResourceDistribution, rng: &mut GameRng) -> ActorMap<u32> {
    match *resources {
        ResourceDistribution::Exact { value } => ActorMap::with_value(value),
        ResourceDistribution::Uniform { min, max } => ActorMap::from_fn(|_| {
            let drawn = rng.gen_range_inclusive(i64::from(min), i64::from(max));
            u32::try_from(drawn).unwrap_or(min)
        }),
    }
}

fn seed_claim(board: &Board, coord: Coord, actor: Actor) -> Board {
    board
        .with_occupier(coord, Some(Occupier::direct(actor)))
        .unwrap_or_else(|| board.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::config::BoardDistribution;
    use crate::geometry::BoardShape;

    fn occupiers(game: &Game) -> Vec<Occupier> {
        game.cells.iter().filter_map(|(_, c)| c.occupier).collect()
    }

    #[test]
    fn test_classic_game() {
        let game = create(&GameDistribution::classic(), &mut GameRng::new(42));

        assert_eq!(game.cells.len(), 49);
        assert_eq!(game.remaining_resources, ActorMap::new(20, 20));
        assert!(game.cells.iter().all(|(_, c)| c.worth == ActorMap::new(1, 1)));
        assert_eq!(game.current_actor, Actor::Red);
        assert!(!game.current_actor_delegated && !game.last_actor_passed && !game.is_over);
        assert_eq!(game.mediator_score_weights, None);
        assert_eq!(game.check_topology(&BoardShape::Grid { width: 7, height: 7 }), Ok(()));
    }

    #[test]
    fn test_two_distinct_starting_claims() {
        for seed in 0..50 {
            let game = create(&GameDistribution::classic(), &mut GameRng::new(seed));
            let red = game.occupied_by(Actor::Red);
            let blue = game.occupied_by(Actor::Blue);

            assert_eq!(red.len(), 1);
            assert_eq!(blue.len(), 1);
            assert_ne!(red[0], blue[0]);
            assert!(occupiers(&game).iter().all(|o| !o.mediated));
        }
    }

    #[test]
    fn test_two_cell_board_uses_both_cells() {
        let dist = GameDistribution::new(
            ResourceDistribution::Exact { value: 1 },
            BoardDistribution::IidUniformGrid { width: 2, height: 1, min: 0, max: 0 },
        );
        for seed in 0..20 {
            let game = create(&dist, &mut GameRng::new(seed));
            assert_eq!(occupiers(&game).len(), 2);
        }
    }

    #[test]
    fn test_uniform_resources_in_range() {
        let dist = GameDistribution::hex(3, 0, 0, ResourceDistribution::Uniform { min: 5, max: 8 });
        for seed in 0..30 {
            let game = create(&dist, &mut GameRng::new(seed));
            for (_, &r) in game.remaining_resources.iter() {
                assert!((5..=8).contains(&r));
            }
        }
    }

    #[test]
    fn test_worths_in_range() {
        let dist = GameDistribution::hex(4, -3, 3, ResourceDistribution::Exact { value: 1 });
        let game = create(&dist, &mut GameRng::new(9));
        for (_, cell) in game.cells.iter() {
            assert!((-3..=3).contains(&cell.worth.red));
            assert!((-3..=3).contains(&cell.worth.blue));
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let resources = ResourceDistribution::Uniform { min: 1, max: 50 };
        let dist = GameDistribution::hex(5, 0, 100, resources)
            .with_mediator_bias(MediatorBias::ProbSymmetric2x { p: 0.5 });
        let a = create(&dist, &mut GameRng::new(1234));
        let b = create(&dist, &mut GameRng::new(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mediator_bias_extremes() {
        let base = GameDistribution::hex(2, 1, 1, ResourceDistribution::Exact { value: 3 });
        for seed in 0..10 {
            let red = create(
                &base.with_mediator_bias(MediatorBias::ProbSymmetric2x { p: 1.0 }),
                &mut GameRng::new(seed),
            );
            assert_eq!(red.mediator_score_weights, Some(RED_DOUBLED));

            let blue = create(
                &base.with_mediator_bias(MediatorBias::ProbSymmetric2x { p: 0.0 }),
                &mut GameRng::new(seed),
            );
            assert_eq!(blue.mediator_score_weights, Some(BLUE_DOUBLED));
        }
    }

    #[test]
    fn test_bias_does_not_touch_worth_or_resources() {
        let plain =
            GameDistribution::hex(3, 0, 9, ResourceDistribution::Uniform { min: 1, max: 9 });
        let biased = plain.with_mediator_bias(MediatorBias::ProbSymmetric2x { p: 0.5 });

        let a = create(&plain, &mut GameRng::new(77));
        let b = create(&biased, &mut GameRng::new(77));

        assert_eq!(a.cells, b.cells);
        assert_eq!(a.remaining_resources, b.remaining_resources);
        assert!(b.mediator_score_weights.is_some());
    }

    #[test]
    fn test_create_checked() {
        let limits = DistributionLimits::default();
        let classic = GameDistribution::classic();
        assert!(create_checked(&classic, &limits, &mut GameRng::new(1)).is_ok());

        let too_small = DistributionLimits::default().with_max_snapshot_bytes(16);
        assert!(matches!(
            create_checked(&GameDistribution::classic(), &too_small, &mut GameRng::new(1)),
            Err(DistributionError::SnapshotTooLarge { limit: 16, .. })
        ));

        let single = GameDistribution::hex(1, 0, 0, ResourceDistribution::Exact { value: 1 });
        assert_eq!(
            create_checked(&single, &limits, &mut GameRng::new(1)),
            Err(DistributionError::TooFewCells(1))
        );
    }

    #[test]
    fn test_single_cell_board_does_not_hang() {
        let single = GameDistribution::hex(1, 0, 0, ResourceDistribution::Exact { value: 1 });
        let game = create(&single, &mut GameRng::new(3));
        assert_eq!(game.occupied_by(Actor::Red).len(), 1);
        assert!(game.occupied_by(Actor::Blue).is_empty());
    }
}
