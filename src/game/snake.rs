use super::action::Direction;
use super::grid::Cell;

/// Display role of a segment; logic only cares about positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Head,
    Body,
}

/// One cell occupied by the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Cell,
    pub role: SegmentRole,
}

/// The snake in the game
///
/// Segments are ordered head first. The body is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Segment>,
}

impl Snake {
    /// Create a snake with its head at `head` and `length` segments trailing
    /// one cell apart towards decreasing x.
    pub fn new(head: Cell, length: usize) -> Self {
        let mut body = vec![Segment {
            position: head,
            role: SegmentRole::Head,
        }];

        for i in 1..length.max(1) {
            body.push(Segment {
                position: head.moved_by(-(i as i32), 0),
                role: SegmentRole::Body,
            });
        }

        Self { body }
    }

    /// Build a snake from explicit positions, head first
    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell]) -> Self {
        let mut snake = Self::new(cells.first().copied().unwrap_or_default(), 1);
        snake.body.extend(cells.iter().skip(1).map(|&position| Segment {
            position,
            role: SegmentRole::Body,
        }));
        snake
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0].position
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1].position
    }

    pub fn segments(&self) -> &[Segment] {
        &self.body
    }

    /// Positions of every segment, head first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().map(|segment| segment.position)
    }

    /// Move one step. Every trailing segment takes the cell its predecessor
    /// held before the move; `Direction::None` leaves the snake in place.
    pub fn advance(&mut self, direction: Direction) {
        if direction == Direction::None {
            return;
        }

        for i in (1..self.body.len()).rev() {
            self.body[i].position = self.body[i - 1].position;
        }
        self.body[0].position = self.body[0].position.moved_in_direction(direction);
    }

    /// Append a segment on top of the current tail
    pub fn grow(&mut self) {
        self.body.push(Segment {
            position: self.tail(),
            role: SegmentRole::Body,
        });
    }

    /// True if the head shares a cell with any other segment
    pub fn head_collides_with_body(&self) -> bool {
        let head = self.head();
        self.body[1..].iter().any(|segment| segment.position == head)
    }

    /// Get the length of the snake, at least 1 since the head always exists
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }
}
