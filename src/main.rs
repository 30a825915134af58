use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed-size grid")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    cols: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    rows: Option<u32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Never respawn food under the snake
    #[arg(long)]
    avoid_snake: bool,

    /// Where log output is written
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level '{s}'"))
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(cols) = self.cols {
            config.grid_cols = cols;
        }
        if let Some(rows) = self.rows {
            config.grid_rows = rows;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if self.avoid_snake {
            config.food_avoids_snake = true;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    match &cli.config {
        Some(path) => info!("starting with config from {}", path.display()),
        None => info!("starting with default config"),
    }

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    info!("exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "grid_snake",
            "--cols",
            "30",
            "--tick-rate",
            "5",
            "--avoid-snake",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_cols, 30);
        assert_eq!(config.grid_rows, 18);
        assert_eq!(config.tick_rate, 5);
        assert!(config.food_avoids_snake);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--rows", "0"]);
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn test_log_level_parses() {
        let cli = Cli::parse_from(["grid_snake", "--log-level", "debug"]);
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert!(Cli::try_parse_from(["grid_snake", "--log-level", "loud"]).is_err());
    }
}
