use std::collections::VecDeque;

use crate::config::GridSize;
use crate::grid::Position;
use crate::input::Direction;

/// Snake body and growth target.
///
/// Cells are kept oldest-first: the front of the deque is the tail and the
/// back is the head.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    target_len: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start` that will grow towards `target_len`.
    #[must_use]
    pub fn new(start: Position, target_len: usize) -> Self {
        Self::from_segments(vec![start], target_len)
    }

    /// Creates a snake from explicit segments, tail first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, target_len: usize) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            target_len,
        }
    }

    /// Moves the head one cell in `direction`, wrapping around the board.
    ///
    /// The tail is kept while the snake is still short of its target, which
    /// is what makes it grow.
    pub fn move_forward(&mut self, direction: Direction, bounds: GridSize) {
        let next_head = self.head().stepped(direction.delta(), bounds);

        if self.body.len() + 1 >= self.target_len {
            let _ = self.body.pop_front();
        }
        self.body.push_back(next_head);
    }

    /// Raises the growth target by one cell.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // The deque is never empty: construction demands one segment and
        // moving pushes before it could ever run dry.
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any other segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len() - 1)
            .any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::Position;
    use crate::input::Direction;

    use super::Snake;

    const BOARD: GridSize = GridSize {
        width: 20,
        height: 14,
    };

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = Snake::new(Position::new(5, 5), 1);

        snake.move_forward(Direction::Right, BOARD);

        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn snake_settles_one_short_of_its_target() {
        let mut snake = Snake::new(Position::new(5, 5), 4);

        for _ in 0..6 {
            snake.move_forward(Direction::Down, BOARD);
        }

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![
                Position::new(5, 9),
                Position::new(5, 10),
                Position::new(5, 11),
            ]
        );
    }

    #[test]
    fn raising_the_target_keeps_the_tail_next_move() {
        let mut snake = Snake::from_segments(vec![Position::new(1, 1), Position::new(2, 1)], 3);

        snake.grow();
        snake.move_forward(Direction::Right, BOARD);

        assert_eq!(snake.target_len(), 4);
        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(Position::new(1, 1)));
    }

    #[test]
    fn head_wraps_through_the_left_edge() {
        let mut snake = Snake::new(Position::new(0, 3), 1);

        snake.move_forward(Direction::Left, BOARD);

        assert_eq!(snake.head(), Position::new(19, 3));
    }

    #[test]
    fn overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(vec![Position::new(1, 1), Position::new(2, 1)], 3);
        assert!(!snake.head_overlaps_body());

        let looped = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(2, 3),
                Position::new(2, 2),
            ],
            6,
        );
        assert!(looped.head_overlaps_body());
    }
}
