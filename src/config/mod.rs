//! Configuration module - board constants with environment overrides
//!
//! The contract is the source of truth for these values and they have
//! changed between deployments (torpedo acceleration in particular), so
//! none of them are hard-coded at use sites. Defaults match the current
//! deployment; a deployment with different constants overrides them via
//! environment variables without a rebuild.

use std::env;

/// Board and weapon constants mirrored from the game contract
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    /// Squares per side; the board is square and odd-sized so it has a
    /// center square at (0, 0)
    pub board_size: u32,
    /// Manhattan radius of the asteroid field around the origin
    pub asteroid_radius: i64,
    /// Manhattan radius of a mine's blast zone
    pub mine_range: i64,
    /// Half-width of the box a torpedo can home into next turn
    pub torpedo_accel: i64,
    /// Per-axis distance at which a torpedo counts as an imminent threat
    /// to a ship; drives the blinking warning only, no gameplay effect
    pub torpedo_warning_range: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: 41,
            asteroid_radius: 10,
            mine_range: 2,
            torpedo_accel: 1,
            torpedo_warning_range: 1,
        }
    }
}

impl BoardConfig {
    /// Load configuration, overriding defaults from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            board_size: parse_var("BOARD_SIZE", defaults.board_size)?,
            asteroid_radius: parse_var("ASTEROID_RADIUS", defaults.asteroid_radius)?,
            mine_range: parse_var("MINE_RANGE", defaults.mine_range)?,
            torpedo_accel: parse_var("TORPEDO_ACCEL", defaults.torpedo_accel)?,
            torpedo_warning_range: parse_var(
                "TORPEDO_WARNING_RANGE",
                defaults.torpedo_warning_range,
            )?,
        };

        if config.board_size == 0 || config.board_size % 2 == 0 {
            return Err(ConfigError::InvalidBoardSize(config.board_size));
        }

        Ok(config)
    }

    /// Smallest row/col index on the board
    pub fn min_index(&self) -> i64 {
        -(self.board_size as i64 / 2)
    }

    /// Largest row/col index on the board
    pub fn max_index(&self) -> i64 {
        self.board_size as i64 / 2
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Board size must be odd and non-zero, got {0}")]
    InvalidBoardSize(u32),
}
