use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: u32 = 32;

/// Pointer and keyboard input, in window pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PrimaryClick { x: i32, y: i32 },
    SecondaryClick { x: i32, y: i32 },
    DebugToggle,
}

/// What an input event ended up doing to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    Started,
    Revealed(RevealOutcome),
    Flagged(bool),
    DebugView(bool),
}

/// Maps a pixel position to the tile under it, `None` for negative positions.
pub fn tile_at_pixel(x: i32, y: i32, tile_size: u32) -> Option<Coord2> {
    let x = u32::try_from(x).ok()? / tile_size.max(1);
    let y = u32::try_from(y).ok()? / tile_size.max(1);
    Some((x.try_into().ok()?, y.try_into().ok()?))
}

/// Routes input events to a [`GameSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputController {
    tile_size: u32,
}

impl InputController {
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size: tile_size.max(1),
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// A primary click outside of a running game starts a new one, moves are
    /// only accepted while playing.
    pub fn handle<R: Rng>(
        &self,
        session: &mut GameSession<R>,
        event: InputEvent,
    ) -> Result<EventOutcome> {
        use InputEvent::*;

        match event {
            PrimaryClick { .. } if !session.state().is_playing() => {
                session.start_new_game()?;
                Ok(EventOutcome::Started)
            }
            PrimaryClick { x, y } => {
                let coords = self.tile_coords(x, y)?;
                session.reveal(coords).map(EventOutcome::Revealed)
            }
            SecondaryClick { x, y } => {
                let coords = self.tile_coords(x, y)?;
                session.toggle_flag(coords).map(EventOutcome::Flagged)
            }
            DebugToggle => Ok(EventOutcome::DebugView(session.toggle_debug_view())),
        }
    }

    fn tile_coords(&self, x: i32, y: i32) -> Result<Coord2> {
        tile_at_pixel(x, y, self.tile_size).ok_or(GameError::OutOfBounds)
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(TILE_SIZE)
    }
}
