//! Cell coordinates on the wrap-around board.
//!
//! Every cell on the board is identified by a [`Position`] inside
//! `[0, width) × [0, height)`. Stepping past an edge re-enters from the
//! opposite edge, so distances have to be measured on the torus rather than
//! on the plane: a head at `x = 0` is one step away from food at
//! `x = width - 1`.

use serde::{Deserialize, Serialize};

use crate::config::GridSize;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the position offset by `(dx, dy)`, wrapped into bounds.
    #[must_use]
    pub fn stepped(self, (dx, dy): (i32, i32), bounds: GridSize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }

    /// The four orthogonal neighbours, wrapped, in the order up, left,
    /// right, down.
    #[must_use]
    pub fn neighbours(self, bounds: GridSize) -> [Self; 4] {
        [(0, -1), (-1, 0), (1, 0), (0, 1)].map(|delta| self.stepped(delta, bounds))
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Squared shortest distance between `from` and `to` on the torus.
///
/// `from` is replicated into the 3×3 tiling of the board (itself plus the
/// copies shifted by ±width and/or ±height) and the nearest copy wins.
/// Squared distances are exact integers, so threshold checks such as
/// "exactly 3 cells away" need no float comparison.
#[must_use]
pub fn toroidal_distance_squared(from: Position, to: Position, bounds: GridSize) -> i64 {
    let width = i64::from(bounds.width);
    let height = i64::from(bounds.height);
    let mut best = i64::MAX;

    for shift_y in [-height, 0, height] {
        for shift_x in [-width, 0, width] {
            let dx = i64::from(from.x) + shift_x - i64::from(to.x);
            let dy = i64::from(from.y) + shift_y - i64::from(to.y);
            best = best.min(dx * dx + dy * dy);
        }
    }

    best
}

/// Euclidean shortest distance between `from` and `to` on the torus.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn toroidal_distance(from: Position, to: Position, bounds: GridSize) -> f64 {
    (toroidal_distance_squared(from, to, bounds) as f64).sqrt()
}
