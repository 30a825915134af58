/// Direction the snake is travelling in
///
/// `None` is the resting state a fresh snake starts in: it has no movement
/// vector and no opposite, so any direction may follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction (`None` is its own opposite)
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        *self != Direction::None && self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Validated transition from self towards `requested`.
    ///
    /// Reversals are ignored and leave the current direction in place.
    pub fn turn(self, requested: Direction) -> Direction {
        if self.is_opposite(requested) {
            self
        } else {
            requested
        }
    }
}
