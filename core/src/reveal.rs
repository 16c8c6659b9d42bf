use alloc::vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Safe tiles were revealed and some remain hidden
    Continue,
    /// The target was a mine, nothing was revealed
    Loss,
    /// The last safe tile was revealed
    Win,
}

/// Reveals the tile at `coords`, cascading over blank tiles.
///
/// Every revealed tile increments `revealed_count`, which is compared against
/// [`Board::safe_tile_count`] to detect a win. Hidden mines are never touched:
/// revealing one reports [`RevealOutcome::Loss`] and leaves the board as is,
/// disclosing the board is up to the caller (see [`reveal_all`]).
///
/// The cascade only spreads orthogonally from tiles without adjacent mines and
/// stops at flagged tiles.
pub fn reveal_cascade(
    board: &mut Board,
    coords: Coord2,
    revealed_count: &mut CellCount,
) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    let target = board.tile_at(coords);
    if !target.is_revealable() {
        return Err(GameError::InvalidOperation);
    }
    if target.is_mine() {
        log::debug!("Mine hit at {:?}", coords);
        return Ok(RevealOutcome::Loss);
    }

    let bounds = board.size();
    let mut to_visit = vec![coords];
    while let Some(visit_coords) = to_visit.pop() {
        let Some(tile) = board.get_mut(visit_coords) else {
            continue;
        };
        if !tile.is_revealable() {
            continue;
        }

        tile.revealed = true;
        *revealed_count += 1;
        log::trace!(
            "Revealed tile at {:?}, mine count: {}",
            visit_coords,
            tile.adjacent_mines
        );

        if tile.is_blank() {
            to_visit.extend(Neighbors::new(visit_coords, bounds, Adjacency::Orthogonal));
        }
    }

    if *revealed_count >= board.safe_tile_count() {
        Ok(RevealOutcome::Win)
    } else {
        Ok(RevealOutcome::Continue)
    }
}

/// Flips the flag on a hidden tile and returns the new flag value.
pub fn toggle_flag(board: &mut Board, coords: Coord2) -> Result<bool> {
    let coords = board.validate_coords(coords)?;
    let tile = board.tile_at_mut(coords);
    if tile.revealed {
        return Err(GameError::InvalidOperation);
    }

    tile.flagged = !tile.flagged;
    Ok(tile.flagged)
}

/// Discloses the whole board, dropping every flag.
pub fn reveal_all(board: &mut Board) {
    for index in 0..usize::from(board.total_tiles()) {
        let tile = board.tile_at_index_mut(index);
        tile.revealed = true;
        tile.flagged = false;
    }
}
