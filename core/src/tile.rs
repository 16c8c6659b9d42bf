use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Mine,
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// One board cell. `adjacent_mines` is only meaningful for [`TileKind::Empty`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub adjacent_mines: u8,
    pub revealed: bool,
    pub flagged: bool,
}

impl Tile {
    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, TileKind::Mine)
    }

    /// Hidden and not flagged, the only state a reveal is accepted in.
    pub const fn is_revealable(&self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Empty tile with no mines around, the tiles a cascade spreads from.
    pub const fn is_blank(&self) -> bool {
        matches!(self.kind, TileKind::Empty) && self.adjacent_mines == 0
    }
}
