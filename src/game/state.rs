use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::action::Direction;
use super::config::GameConfig;
use super::food::Food;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Collision that forced a reset, if any
    pub collision: Option<CollisionType>,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
}

/// Complete game state
///
/// Owns the snake and the food outright; both are replaced or moved by
/// `tick` and `reset` only.
#[derive(Debug)]
pub struct GameState<R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    direction: Direction,
    running: bool,
    ticks: u64,
    resets: u64,
    rng: R,
}

impl GameState<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R> GameState<R> {
    /// Create a game state drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            grid: config.grid(),
            snake: Snake::new(config.initial_snake, config.initial_snake_length),
            food: Food::new(config.initial_food),
            direction: Direction::None,
            running: true,
            ticks: 0,
            resets: 0,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, cell: Cell) {
        self.food = Food::new(cell);
    }

    /// Request a new direction. Returns false if it was a reversal and got ignored.
    pub fn steer(&mut self, requested: Direction) -> bool {
        let next = self.direction.turn(requested);
        if next != requested {
            trace!("ignoring reversal {:?} -> {:?}", self.direction, requested);
            return false;
        }
        self.direction = next;
        true
    }

    /// Put the snake back to its initial layout and stop it
    pub fn reset(&mut self) {
        self.snake = Snake::new(
            self.config.initial_snake,
            self.config.initial_snake_length,
        );
        self.direction = Direction::None;
        self.resets += 1;
    }

    /// Stop the game loop after the current frame
    pub fn quit(&mut self) {
        info!("quit requested after {} ticks", self.ticks);
        self.running = false;
    }
}

impl<R: Rng> GameState<R> {
    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.snake.advance(self.direction);
        self.ticks += 1;

        let head = self.snake.head();
        if !self.grid.in_bounds(head) {
            outcome.collision = Some(CollisionType::Wall);
        } else if self.snake.head_collides_with_body() {
            outcome.collision = Some(CollisionType::SelfCollision);
        }

        if let Some(collision) = outcome.collision {
            let length = self.snake.len();
            self.reset();
            info!(
                "{:?} collision at ({}, {}) with length {}, reset #{} after {} ticks",
                collision, head.x, head.y, length, self.resets, self.ticks
            );
        }

        // Checked against whichever snake exists now, reset or not
        if self.snake.head() == self.food.position() {
            self.snake.grow();
            let forbidden: Vec<Cell> = if self.config.food_avoids_snake {
                self.snake.cells().collect()
            } else {
                Vec::new()
            };
            self.food.relocate(&self.grid, &forbidden, &mut self.rng);
            outcome.ate_food = true;

            let food = self.food.position();
            debug!(
                "food eaten, length {}, food moved to ({}, {})",
                self.snake.len(),
                food.x,
                food.y
            );
        }

        outcome
    }
}
