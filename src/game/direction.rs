/// Direction the snake can move. Reversal is not restricted: any of the four
/// values is always a valid next direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Per-tile delta (dx, dy) for moving in this direction. Positive y is
    /// down, matching the pixel coordinate system.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
