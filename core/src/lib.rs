#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use input::*;
pub use reveal::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod error;
mod input;
mod reveal;
mod session;
mod tile;
mod types;
mod view;

/// Dimensions and mine count used whenever a fresh board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const DEFAULT_WIDTH: Coord = 20;
    pub const DEFAULT_HEIGHT: Coord = 15;
    pub const DEFAULT_MINES: CellCount = 40;

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be non-zero and at least one tile must stay free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.mines >= self.total_tiles() {
            Err(GameError::InvalidConfig)
        } else {
            Ok(())
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_MINES,
        )
    }
}
