use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning for one game session. Every field falls back to the built-in defaults, so a
/// config file only needs to name what it overrides.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub grid: GridConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        BallConfig {
            x: BALL_X,
            y: BALL_Y,
            width: BALL_SIZE,
            height: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PaddleConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        PaddleConfig {
            x: PADDLE_X,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub pitch_x: f32,
    pub pitch_y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: BLOCK_ROWS,
            cols: BLOCK_COLS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            pitch_x: BLOCK_PITCH_X,
            pitch_y: BLOCK_PITCH_Y,
            origin_x: BLOCK_ORIGIN_X,
            origin_y: BLOCK_ORIGIN_Y,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        require(world.width > 0.0 && world.height > 0.0, "world size must be positive")?;

        let ball = &self.ball;
        require(ball.width > 0.0 && ball.height > 0.0, "ball size must be positive")?;
        require(ball.speed > 0.0, "ball speed must be positive")?;
        require(
            ball.x >= 0.0 && ball.x + ball.width <= world.width,
            "ball must start inside the world horizontally",
        )?;
        require(
            ball.y >= 0.0 && ball.y + ball.height <= world.height,
            "ball must start inside the world vertically",
        )?;

        let paddle = &self.paddle;
        require(paddle.width > 0.0 && paddle.height > 0.0, "paddle size must be positive")?;
        require(paddle.speed > 0.0, "paddle speed must be positive")?;
        require(
            paddle.x >= 0.0 && paddle.x + paddle.width <= world.width,
            "paddle must start inside the world horizontally",
        )?;

        let grid = &self.grid;
        require(grid.rows > 0 && grid.cols > 0, "block grid must not be empty")?;
        require(
            grid.block_width > 0.0 && grid.block_height > 0.0,
            "block size must be positive",
        )?;

        Ok(())
    }
}

fn require(condition: bool, message: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_string()))
    }
}
