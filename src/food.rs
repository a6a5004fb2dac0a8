//! Food placement: random spawning after a meal, and the evasive step that
//! makes food run from the snake head.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{
    DEFAULT_DODGE_DISTANCE, DEFAULT_PURSUIT_RADIUS, GridSize, PURSUIT_MOVE_PARITY,
    SPAWN_ATTEMPTS_PER_CELL,
};
use crate::grid::{Position, toroidal_distance_squared};
use crate::input::Direction;
use crate::snake::Snake;

/// Tunables for how food reacts to an approaching head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EvasionPolicy {
    /// Food flees only while the head is strictly closer than this.
    pub pursuit_radius: u32,
    /// A best escape landing exactly this far from the head triggers a
    /// sidestep across the snake's axis of travel.
    pub dodge_distance: u32,
    /// Food moves only on moves whose number is a multiple of this.
    pub move_parity: u64,
}

impl Default for EvasionPolicy {
    fn default() -> Self {
        Self {
            pursuit_radius: DEFAULT_PURSUIT_RADIUS,
            dodge_distance: DEFAULT_DODGE_DISTANCE,
            move_parity: PURSUIT_MOVE_PARITY,
        }
    }
}

impl EvasionPolicy {
    /// Returns true when food at `food` should try to step away this move.
    #[must_use]
    pub fn should_flee(
        &self,
        move_number: u64,
        food: Position,
        head: Position,
        bounds: GridSize,
    ) -> bool {
        let radius = i64::from(self.pursuit_radius);
        move_number % self.move_parity.max(1) == 0
            && toroidal_distance_squared(head, food, bounds) < radius * radius
    }

    /// Picks the cell food at `food` steps to, or `food` itself when every
    /// neighbour is taken by the snake.
    ///
    /// The neighbour furthest from the head wins. If that neighbour sits at
    /// exactly the dodge distance, the snake is closing in along a straight
    /// line, so the choice is redone among the two neighbours that leave the
    /// snake's axis of travel.
    pub fn relocate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        travel: Direction,
        food: Position,
    ) -> Position {
        let head = snake.head();
        let Some(escape) = furthest_from_head(rng, bounds, snake, food.neighbours(bounds)) else {
            return food;
        };

        let dodge = i64::from(self.dodge_distance);
        if toroidal_distance_squared(head, escape, bounds) != dodge * dodge {
            return escape;
        }

        let [up, left, right, down] = food.neighbours(bounds);
        let sidesteps = if travel.is_horizontal() {
            [up, down]
        } else {
            [left, right]
        };

        match furthest_from_head(rng, bounds, snake, sidesteps) {
            Some(sidestep) => {
                debug!("food at {food:?} sidesteps to {sidestep:?} instead of {escape:?}");
                sidestep
            }
            None => escape,
        }
    }
}

/// Shuffles `candidates` and returns the first free cell with the strictly
/// greatest distance to the head.
///
/// Ties resolve to whichever tied cell the shuffle put first.
fn furthest_from_head<R: Rng + ?Sized, const N: usize>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    mut candidates: [Position; N],
) -> Option<Position> {
    candidates.shuffle(rng);

    let head = snake.head();
    let mut best: Option<(i64, Position)> = None;
    for candidate in candidates {
        let candidate = candidate.wrapped(bounds);
        if snake.occupies(candidate) {
            continue;
        }

        let distance = toroidal_distance_squared(head, candidate, bounds);
        if best.is_none_or(|(furthest, _)| distance > furthest) {
            best = Some((distance, candidate));
        }
    }

    best.map(|(_, position)| position)
}

/// Spawns food on a uniformly random cell the snake does not occupy.
///
/// Draws are rejected and redrawn while they land on the snake. After
/// [`SPAWN_ATTEMPTS_PER_CELL`] draws per board cell the remaining free
/// cells are enumerated instead. Returns `None` only when the snake fills
/// the whole board.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let attempts = bounds.total_cells() * SPAWN_ATTEMPTS_PER_CELL;

    for _ in 0..attempts {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    debug!("rejection sampling exhausted after {attempts} draws; enumerating free cells");
    let free: Vec<Position> = (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
        .filter(|position| !snake.occupies(*position))
        .collect();

    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{EvasionPolicy, spawn_position};
    use crate::config::GridSize;
    use crate::grid::{Position, toroidal_distance_squared};
    use crate::input::Direction;
    use crate::snake::Snake;

    const BOARD: GridSize = GridSize {
        width: 20,
        height: 14,
    };

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::from_segments(
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
            ],
            4,
        );

        for _ in 0..100 {
            let food = spawn_position(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn spawn_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let snake = Snake::from_segments(
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(1, 1),
            ],
            6,
        );

        assert_eq!(
            spawn_position(&mut rng, bounds, &snake),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn spawn_on_a_full_board_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 2,
            height: 1,
        };
        let snake = Snake::from_segments(vec![Position::new(0, 0), Position::new(1, 0)], 3);

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
    }

    #[test]
    fn food_flees_only_on_even_moves_within_radius() {
        let policy = EvasionPolicy::default();
        let head = Position::new(5, 5);

        assert!(policy.should_flee(0, Position::new(9, 5), head, BOARD));
        assert!(!policy.should_flee(1, Position::new(9, 5), head, BOARD));
        assert!(!policy.should_flee(2, Position::new(10, 5), head, BOARD));
        assert!(policy.should_flee(4, Position::new(8, 8), head, BOARD));
    }

    #[test]
    fn food_flees_across_the_wrapped_edge() {
        let policy = EvasionPolicy::default();

        assert!(policy.should_flee(
            2,
            Position::new(18, 13),
            Position::new(1, 1),
            BOARD
        ));
    }

    #[test]
    fn food_steps_to_the_furthest_free_neighbour() {
        let policy = EvasionPolicy::default();
        let snake = Snake::from_segments(vec![Position::new(4, 4), Position::new(5, 5)], 3);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = policy.relocate(
                &mut rng,
                BOARD,
                &snake,
                Direction::Down,
                Position::new(6, 6),
            );

            // (7, 6) and (6, 7) tie at d² = 5, both beating (5, 6) and (6, 5).
            assert!(
                next == Position::new(7, 6) || next == Position::new(6, 7),
                "unexpected escape {next:?}"
            );
        }
    }

    #[test]
    fn food_sidesteps_when_the_escape_lands_at_dodge_distance() {
        let policy = EvasionPolicy::default();
        let snake = Snake::from_segments(vec![Position::new(4, 5), Position::new(5, 5)], 3);
        let food = Position::new(7, 5);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = policy.relocate(&mut rng, BOARD, &snake, Direction::Right, food);

            // Straight ahead is (8, 5) at distance 3; the dodge leaves the row.
            assert_eq!(next.x, 7);
            assert_ne!(next.y, 5);
            assert_eq!(toroidal_distance_squared(snake.head(), next, BOARD), 5);
        }
    }

    #[test]
    fn vertical_travel_sidesteps_along_the_row() {
        let policy = EvasionPolicy::default();
        let snake = Snake::from_segments(vec![Position::new(5, 4), Position::new(5, 5)], 3);
        let food = Position::new(5, 7);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = policy.relocate(&mut rng, BOARD, &snake, Direction::Down, food);

            // Straight below is (5, 8) at distance 3; the dodge leaves the column.
            assert_eq!(next.y, 7);
            assert_ne!(next.x, 5);
            assert_eq!(toroidal_distance_squared(snake.head(), next, BOARD), 5);
        }
    }

    #[test]
    fn blocked_sidesteps_keep_the_straight_escape() {
        let policy = EvasionPolicy::default();
        let snake = Snake::from_segments(
            vec![
                Position::new(7, 4),
                Position::new(6, 4),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(7, 6),
                Position::new(5, 6),
                Position::new(5, 5),
            ],
            8,
        );
        let mut rng = StdRng::seed_from_u64(5);

        let next = policy.relocate(
            &mut rng,
            BOARD,
            &snake,
            Direction::Right,
            Position::new(7, 5),
        );

        assert_eq!(next, Position::new(8, 5));
    }

    #[test]
    fn surrounded_food_stays_put() {
        let policy = EvasionPolicy::default();
        let snake = Snake::from_segments(
            vec![
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(4, 3),
                Position::new(3, 4),
            ],
            5,
        );
        let mut rng = StdRng::seed_from_u64(9);

        let next = policy.relocate(
            &mut rng,
            BOARD,
            &snake,
            Direction::Up,
            Position::new(3, 3),
        );

        assert_eq!(next, Position::new(3, 3));
    }
}
