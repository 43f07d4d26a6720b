use rand::Rng;

use super::direction::Direction;
use super::grid::{tile_contains, Position, TILE_SIZE};

/// Placeholder position for a freshly grown tail segment. The next advance
/// shifts a real cell into it, so it never matches a live coordinate.
pub const TAIL_SENTINEL: Position = Position { x: -1, y: -1 };

/// Fixed starting cell of the apple.
pub const APPLE_START: Position = Position {
    x: 3 * TILE_SIZE,
    y: 3 * TILE_SIZE,
};

/// The snake: ordered body segments with the head at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub segments: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of the given length with every segment stacked on the
    /// origin cell. Length is clamped to at least 1.
    pub fn new(origin: Position, direction: Direction, length: usize) -> Self {
        Self {
            segments: vec![origin; length.max(1)],
            direction,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Set the movement direction. All four directions are always accepted,
    /// including a direct reversal.
    pub fn change_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Shift every segment into its predecessor's cell (tail first), then
    /// advance the head one tile in the current direction.
    pub fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].step(self.direction);
    }

    /// Append one tail segment holding the sentinel position. It gets a real
    /// position when the next `advance` shifts the old tail into it.
    pub fn grow(&mut self) {
        self.segments.push(TAIL_SENTINEL);
    }

    /// Head overlap against the body, starting at segment index 3. Segments
    /// 0 through 2 are exempt: right after a move or growth they can still
    /// hold shift-filled copies of the head cell.
    pub fn hits_own_body(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(3)
            .any(|seg| tile_contains(*seg, head.x, head.y))
    }
}

/// The apple: a single cell the snake eats to grow.
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn new() -> Self {
        Self {
            position: APPLE_START,
        }
    }

    /// Pick a new cell uniformly over columns 1..=19, rows 1..=14. The cell
    /// is not checked against the snake or the obstacles and may land on an
    /// occupied tile.
    pub fn relocate(&mut self, rng: &mut impl Rng) {
        self.position = Position::tile(rng.gen_range(1..=19), rng.gen_range(1..=14));
    }
}

impl Default for Apple {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell layout of the fixed obstacle field. The (900, 400) entry appears
/// three times; the duplicates are inert for collision checks and are kept
/// as literal data.
const OBSTACLE_LAYOUT: [(i32, i32); 12] = [
    (200, 200),
    (250, 200),
    (300, 200),
    (600, 400),
    (650, 400),
    (700, 400),
    (500, 100),
    (500, 250),
    (500, 200),
    (900, 400),
    (900, 400),
    (900, 400),
];

/// Static obstacle cells, set once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacles {
    cells: Vec<Position>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self {
            cells: OBSTACLE_LAYOUT
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
        }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// True iff (x, y) falls inside any obstacle's half-open tile box.
    pub fn collides(&self, x: i32, y: i32) -> bool {
        self.cells.iter().any(|cell| tile_contains(*cell, x, y))
    }
}

impl Default for Obstacles {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// What ended the round. Used only to pick a sound cue; every cause reaches
/// the presentation layer as the same GameOver transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    Boundary,
    SelfCollision,
    Obstacle,
}

/// Complete state of one round. Built fresh by `GameEngine::reset`; the old
/// entities are discarded wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub obstacles: Obstacles,
    pub surface_width: i32,
    pub surface_height: i32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(
        snake: Snake,
        apple: Apple,
        obstacles: Obstacles,
        surface_width: i32,
        surface_height: i32,
    ) -> Self {
        Self {
            snake,
            apple,
            obstacles,
            surface_width,
            surface_height,
            phase: Phase::Running,
        }
    }

    /// Check whether a position lies inside the playfield surface.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.surface_width && pos.y >= 0 && pos.y < self.surface_height
    }

    /// Score is the snake's length; there is no separate counter.
    pub fn score(&self) -> u32 {
        self.snake.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snake_creation_stacks_segments() {
        let snake = Snake::new(Position::tile(1, 1), Direction::Down, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(50, 50));

        let snake = Snake::new(Position::tile(1, 1), Direction::Down, 3);
        assert_eq!(snake.len(), 3);
        assert!(snake.segments.iter().all(|&s| s == Position::new(50, 50)));
    }

    #[test]
    fn test_snake_length_never_zero() {
        let snake = Snake::new(Position::tile(1, 1), Direction::Down, 0);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_change_direction_always_accepted() {
        let mut snake = Snake::new(Position::tile(5, 5), Direction::Right, 3);

        // Direct reversal is allowed; there is no 180-degree rule.
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction, Direction::Left);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_advance_moves_head_one_tile_per_direction() {
        for (direction, expected) in [
            (Direction::Left, Position::new(200, 250)),
            (Direction::Right, Position::new(300, 250)),
            (Direction::Up, Position::new(250, 200)),
            (Direction::Down, Position::new(250, 300)),
        ] {
            let mut snake = Snake::new(Position::tile(5, 5), direction, 3);
            let length_before = snake.len();
            snake.advance();
            assert_eq!(snake.head(), expected);
            assert_eq!(snake.len(), length_before);
        }
    }

    #[test]
    fn test_advance_shifts_segments_toward_tail() {
        let mut snake = Snake::new(Position::tile(5, 5), Direction::Right, 3);
        snake.advance();
        snake.advance();
        // After two moves right from a stacked start the segments trail the
        // head one tile apart.
        assert_eq!(snake.segments[0], Position::tile(7, 5));
        assert_eq!(snake.segments[1], Position::tile(6, 5));
        assert_eq!(snake.segments[2], Position::tile(5, 5));
    }

    #[test]
    fn test_grow_appends_sentinel_then_fills_on_advance() {
        let mut snake = Snake::new(Position::tile(5, 5), Direction::Right, 2);
        snake.advance();
        let old_tail = snake.segments[snake.len() - 1];

        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.segments[2], TAIL_SENTINEL);

        // The next advance shifts the vacated predecessor cell into the new
        // tail slot.
        snake.advance();
        assert_eq!(snake.segments[2], old_tail);
    }

    #[test]
    fn test_self_collision_exempts_first_three_segments() {
        let mut snake = Snake::new(Position::tile(5, 5), Direction::Right, 4);
        let head = snake.head();

        // Head overlapping segments 1 and 2 is never a collision.
        snake.segments[1] = head;
        snake.segments[2] = head;
        snake.segments[3] = Position::tile(9, 9);
        assert!(!snake.hits_own_body());

        // Segment 3 overlapping the head is.
        snake.segments[3] = head;
        assert!(snake.hits_own_body());
    }

    #[test]
    fn test_apple_relocation_stays_in_range() {
        let mut apple = Apple::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            apple.relocate(&mut rng);
            let pos = apple.position;
            assert_eq!(pos.x % TILE_SIZE, 0);
            assert_eq!(pos.y % TILE_SIZE, 0);
            assert!((1..=19).contains(&(pos.x / TILE_SIZE)));
            assert!((1..=14).contains(&(pos.y / TILE_SIZE)));
        }
    }

    #[test]
    fn test_obstacle_cells_and_duplicates() {
        let obstacles = Obstacles::new();
        assert_eq!(obstacles.cells().len(), 12);

        let count_900_400 = obstacles
            .cells()
            .iter()
            .filter(|c| **c == Position::new(900, 400))
            .count();
        assert_eq!(count_900_400, 3);
    }

    #[test]
    fn test_obstacle_collision_is_half_open() {
        let obstacles = Obstacles::new();

        // Every listed cell collides at its own origin.
        for cell in obstacles.cells() {
            assert!(obstacles.collides(cell.x, cell.y));
        }

        // One tile past a cell with a free right neighbor does not.
        assert!(!obstacles.collides(300 + TILE_SIZE, 200));
        assert!(!obstacles.collides(700 + TILE_SIZE, 400));
        assert!(!obstacles.collides(900 + TILE_SIZE, 400));
        assert!(!obstacles.collides(0, 0));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::tile(1, 1), Direction::Down, 1),
            Apple::new(),
            Obstacles::new(),
            1000,
            800,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(950, 750)));
        assert!(!state.is_in_bounds(Position::new(-50, 0)));
        assert!(!state.is_in_bounds(Position::new(1000, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 800)));
    }

    #[test]
    fn test_score_tracks_length() {
        let mut state = GameState::new(
            Snake::new(Position::tile(1, 1), Direction::Down, 1),
            Apple::new(),
            Obstacles::new(),
            1000,
            800,
        );
        assert_eq!(state.score(), 1);

        state.snake.grow();
        assert_eq!(state.score(), 2);
    }
}
