use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the presentation layer is allowed to know about a tile.
///
/// Kind and count stay hidden until the tile is revealed, unless the debug
/// view discloses them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub kind: Option<TileKind>,
    pub adjacent_mines: Option<u8>,
    pub revealed: bool,
    pub flagged: bool,
}

impl TileView {
    pub fn new(tile: &Tile, disclose: bool) -> Self {
        let visible = tile.revealed || disclose;
        Self {
            kind: visible.then_some(tile.kind),
            adjacent_mines: (visible && !tile.is_mine()).then_some(tile.adjacent_mines),
            revealed: tile.revealed,
            flagged: tile.flagged,
        }
    }
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        Self::new(tile, false)
    }
}

/// Everything needed to draw one frame, `tiles` is indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub width: Coord,
    pub height: Coord,
    pub mine_count: CellCount,
    pub revealed_count: CellCount,
    pub flagged_count: CellCount,
    pub debug_view: bool,
    pub tiles: Vec<Vec<TileView>>,
}

impl Snapshot {
    pub fn from_session<R>(session: &GameSession<R>) -> Self {
        let tiles = match session.board() {
            Some(board) => (0..board.height())
                .map(|y| {
                    (0..board.width())
                        .map(|x| TileView::new(board.tile_at((x, y)), session.debug_view()))
                        .collect()
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            state: session.state(),
            width: session.width(),
            height: session.height(),
            mine_count: session.mine_count(),
            revealed_count: session.revealed_count(),
            flagged_count: session.flagged_count(),
            debug_view: session.debug_view(),
            tiles,
        }
    }
}
