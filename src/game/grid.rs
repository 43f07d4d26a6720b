use super::direction::Direction;

/// Edge length of one grid cell in pixels. Also the movement step and the
/// collision box size.
pub const TILE_SIZE: i32 = 50;

/// A grid-aligned pixel position on the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the cell at (col, row) in tile units.
    pub fn tile(col: i32, row: i32) -> Self {
        Self {
            x: col * TILE_SIZE,
            y: row * TILE_SIZE,
        }
    }

    /// Position one tile away in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * TILE_SIZE,
            y: self.y + dy * TILE_SIZE,
        }
    }
}

/// Half-open tile-box test: (x, y) is inside the tile at `origin` iff
/// origin <= coord < origin + TILE_SIZE on both axes.
pub fn tile_contains(origin: Position, x: i32, y: i32) -> bool {
    x >= origin.x && x < origin.x + TILE_SIZE && y >= origin.y && y < origin.y + TILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_to_pixel_mapping() {
        assert_eq!(Position::tile(0, 0), Position::new(0, 0));
        assert_eq!(Position::tile(3, 3), Position::new(150, 150));
        assert_eq!(Position::tile(19, 14), Position::new(950, 700));
    }

    #[test]
    fn test_step_moves_one_tile() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.step(Direction::Left), Position::new(50, 100));
        assert_eq!(pos.step(Direction::Right), Position::new(150, 100));
        assert_eq!(pos.step(Direction::Up), Position::new(100, 50));
        assert_eq!(pos.step(Direction::Down), Position::new(100, 150));
    }

    #[test]
    fn test_tile_box_is_half_open() {
        let origin = Position::new(200, 200);

        assert!(tile_contains(origin, 200, 200));
        assert!(tile_contains(origin, 249, 249));

        // Upper bound is exclusive on both axes.
        assert!(!tile_contains(origin, 250, 200));
        assert!(!tile_contains(origin, 200, 250));
        assert!(!tile_contains(origin, 199, 200));
    }
}
