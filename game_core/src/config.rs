use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::params::Params;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game configuration
///
/// Every field is optional in TOML; missing fields take the [`Params`] value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_inset: i32,
    pub ball_radius: i32,
    pub ball_vel_x: i32,
    pub ball_vel_y: i32,
    pub ball_speed_max: i32,
    pub tick_rate: u32,
    /// First side to reach this many goals wins; `None` plays forever.
    pub win_score: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_vel_x: Params::BALL_VEL_X,
            ball_vel_y: Params::BALL_VEL_Y,
            ball_speed_max: Params::BALL_SPEED_MAX,
            tick_rate: Params::TICK_RATE,
            win_score: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Seconds between two ticks
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    /// Reject values the simulation cannot represent sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_max", self.ball_speed_max),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_inset < 0 {
            return Err(ConfigError::Invalid(format!(
                "paddle_inset must not be negative, got {}",
                self.paddle_inset
            )));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} exceeds arena_height {}",
                self.paddle_height, self.arena_height
            )));
        }
        if 2 * (self.paddle_inset + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::Invalid(
                "paddles overlap: arena_width too small for paddle_inset + paddle_width".into(),
            ));
        }
        if 2 * self.ball_radius >= self.arena_height.min(self.arena_width) {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} does not fit in the arena",
                self.ball_radius
            )));
        }
        if self.ball_vel_x == 0 {
            return Err(ConfigError::Invalid("ball_vel_x must not be zero".into()));
        }
        if self.ball_vel_x.abs() > self.ball_speed_max {
            return Err(ConfigError::Invalid(format!(
                "ball_vel_x {} exceeds ball_speed_max {}",
                self.ball_vel_x, self.ball_speed_max
            )));
        }
        if self.win_score == Some(0) {
            return Err(ConfigError::Invalid("win_score must be at least 1".into()));
        }
        Ok(())
    }
}
