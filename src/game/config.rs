use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::{Cell, Grid};

/// Configuration for the game
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid columns
    pub grid_cols: u32,
    /// Number of grid rows
    pub grid_rows: u32,
    /// Side length of a cell in pixels
    pub cell_size: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Head cell of a freshly created snake
    pub initial_snake: Cell,
    /// Segment count of a freshly created snake
    pub initial_snake_length: usize,
    /// Where the food sits when the game starts
    pub initial_food: Cell,
    /// Keep respawned food off cells the snake occupies
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_cols: 18,
            grid_rows: 18,
            cell_size: 25,
            tick_rate: 10,
            initial_snake: Cell::new(5, 5),
            initial_snake_length: 1,
            initial_food: Cell::new(10, 15),
            food_avoids_snake: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            grid_cols: cols,
            grid_rows: rows,
            ..Default::default()
        }
    }

    /// Derive the grid from a window size in pixels
    pub fn from_window(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        Self {
            grid_cols: width_px / cell_size.max(1),
            grid_rows: height_px / cell_size.max(1),
            cell_size,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_cols, self.grid_rows, self.cell_size)
    }

    /// Time budget of a single frame
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Reject configurations the game cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.grid_cols == 0 || self.grid_rows == 0 {
            bail!(
                "grid must have at least one cell, got {}x{}",
                self.grid_cols,
                self.grid_rows
            );
        }
        if self.cell_size == 0 {
            bail!("cell size must be positive");
        }
        if self.tick_rate == 0 {
            bail!("tick rate must be positive");
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }

        // Cell coordinates and pixel offsets are i32
        for (name, cells) in [("columns", self.grid_cols), ("rows", self.grid_rows)] {
            let fits = cells
                .checked_mul(self.cell_size)
                .is_some_and(|px| i32::try_from(px).is_ok());
            if !fits {
                bail!(
                    "grid {} {} at {} px per cell exceed the pixel range",
                    name,
                    cells,
                    self.cell_size
                );
            }
        }
        let length = i32::try_from(self.initial_snake_length).with_context(|| {
            format!(
                "initial snake length {} is too large",
                self.initial_snake_length
            )
        })?;

        let grid = self.grid();
        if !grid.in_bounds(self.initial_snake) {
            bail!(
                "initial snake head ({}, {}) is outside the grid",
                self.initial_snake.x,
                self.initial_snake.y
            );
        }
        // Trailing segments are laid out towards decreasing x
        let tail = self
            .initial_snake
            .x
            .checked_sub(length - 1)
            .map(|x| Cell::new(x, self.initial_snake.y));
        let Some(tail) = tail else {
            bail!(
                "initial snake of length {} does not fit left of ({}, {})",
                self.initial_snake_length,
                self.initial_snake.x,
                self.initial_snake.y
            );
        };
        if !grid.in_bounds(tail) {
            bail!(
                "initial snake of length {} does not fit left of ({}, {})",
                self.initial_snake_length,
                self.initial_snake.x,
                self.initial_snake.y
            );
        }
        if !grid.in_bounds(self.initial_food) {
            bail!(
                "initial food ({}, {}) is outside the grid",
                self.initial_food.x,
                self.initial_food.y
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_cols, 18);
        assert_eq!(config.grid_rows, 18);
        assert_eq!(config.cell_size, 25);
        assert_eq!(config.tick_rate, 10);
        assert_eq!(config.initial_snake, Cell::new(5, 5));
        assert_eq!(config.initial_snake_length, 1);
        assert!(!config.food_avoids_snake);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_window_matches_default() {
        let config = GameConfig::from_window(450, 450, 25);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(
            GameConfig::default().tick_interval(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid().cols(), 15);
        assert_eq!(config.grid().rows(), 12);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::new(0, 10).validate().is_err());

        let mut config = GameConfig::default();
        config.tick_rate = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_food = Cell::new(18, 0);
        assert!(config.validate().is_err());

        // (5,5) leaves room for six segments, not seven
        let mut config = GameConfig::default();
        config.initial_snake_length = 6;
        assert!(config.validate().is_ok());
        config.initial_snake_length = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_pixel_overflow() {
        let mut config = GameConfig::default();
        config.grid_cols = 100_000;
        config.cell_size = 100_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pixel range"));

        let mut config = GameConfig::default();
        config.grid_cols = u32::MAX;
        config.cell_size = 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("grid columns"));

        let mut config = GameConfig::default();
        config.grid_rows = 2_000_000;
        config.cell_size = 2_000;
        assert!(config.validate().is_err());

        // Largest board whose pixel extent still fits
        let mut config = GameConfig::new(i32::MAX as u32, 18);
        config.cell_size = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_huge_snake_length() {
        let mut config = GameConfig::default();
        config.initial_snake_length = usize::MAX;
        assert!(config.validate().is_err());

        config.initial_snake_length = i32::MAX as usize;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_cols": 30, "tick_rate": 15}}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_cols, 30);
        assert_eq!(config.grid_rows, 18);
        assert_eq!(config.tick_rate, 15);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_food": {{"x": 40, "y": 0}}}}"#).unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }
}
