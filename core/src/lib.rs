use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod types;

/// Knobs shared by the driver and board generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_size: usize,
    pub max_size: usize,
    /// Chance in percent that any single cell holds a mine.
    pub mine_probability: u8,
}

impl GameConfig {
    pub const DEFAULT_MIN_SIZE: usize = 7;
    pub const DEFAULT_MAX_SIZE: usize = 20;
    pub const DEFAULT_MINE_PROBABILITY: u8 = 10;

    pub const fn new_unchecked(min_size: usize, max_size: usize, mine_probability: u8) -> Self {
        Self {
            min_size,
            max_size,
            mine_probability,
        }
    }

    pub fn new(min_size: usize, max_size: usize, mine_probability: u8) -> Result<Self> {
        if min_size == 0 || min_size > max_size || mine_probability > 100 {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(min_size, max_size, mine_probability))
    }

    /// Checks a requested board size against the configured range.
    pub fn check_size(&self, size: usize) -> Result<usize> {
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(size)
        } else {
            Err(GameError::InvalidSize {
                size,
                min: self.min_size,
                max: self.max_size,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_MIN_SIZE,
            Self::DEFAULT_MAX_SIZE,
            Self::DEFAULT_MINE_PROBABILITY,
        )
    }
}
