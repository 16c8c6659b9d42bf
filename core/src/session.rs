use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - any -> Playing, on a new game
/// - Playing -> Exploded
/// - Playing -> Won
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No board exists yet
    #[default]
    Idle,
    /// Game in progress
    Playing,
    /// A mine was revealed
    Exploded,
    /// Every safe tile was revealed
    Won,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the game has ended and only a restart is accepted
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Exploded | Self::Won)
    }
}

/// Owns the current board and drives it from player actions.
#[derive(Clone, Debug)]
pub struct GameSession<R = SmallRng> {
    config: BoardConfig,
    board: Option<Board>,
    state: GameState,
    revealed_count: CellCount,
    debug_view: bool,
    rng: R,
}

impl GameSession<SmallRng> {
    pub fn seeded(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates an idle session, no board is generated until the first game starts.
    pub fn new(config: BoardConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            board: None,
            state: GameState::Idle,
            revealed_count: 0,
            debug_view: false,
            rng,
        })
    }

    /// Replaces the board with a freshly generated one.
    pub fn start_new_game(&mut self) -> Result<()> {
        let board = Board::generate(self.config, &mut self.rng)?;
        self.start_with_board(board)
    }
}

impl<R> GameSession<R> {
    /// Starts a game on a prepared board, its mine count becomes the session's.
    ///
    /// The board must be untouched: no tile revealed or flagged.
    pub fn start_with_board(&mut self, board: Board) -> Result<()> {
        if board.iter().any(|(_, tile)| tile.revealed || tile.flagged) {
            return Err(GameError::InvalidOperation);
        }
        log::debug!(
            "New game on {:?} board with {} mines",
            board.size(),
            board.mine_count()
        );
        self.board = Some(board);
        self.revealed_count = 0;
        self.state = GameState::Playing;
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_playing()?;
        let board = self.board.as_mut().ok_or(GameError::InvalidOperation)?;

        let outcome = reveal_cascade(board, coords, &mut self.revealed_count)?;
        match outcome {
            RevealOutcome::Continue => {}
            RevealOutcome::Loss => {
                reveal_all(board);
                self.state = GameState::Exploded;
                log::debug!("Exploded at {:?}", coords);
            }
            RevealOutcome::Win => {
                self.state = GameState::Won;
                log::debug!("Won after revealing {} tiles", self.revealed_count);
            }
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        self.check_playing()?;
        let board = self.board.as_mut().ok_or(GameError::InvalidOperation)?;
        toggle_flag(board, coords)
    }

    /// Flips the debug view and returns its new value, allowed in any state.
    pub fn toggle_debug_view(&mut self) -> bool {
        self.debug_view = !self.debug_view;
        log::debug!("Debug view {}", if self.debug_view { "on" } else { "off" });
        self.debug_view
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn width(&self) -> Coord {
        self.board.as_ref().map_or(self.config.width, Board::width)
    }

    pub fn height(&self) -> Coord {
        self.board.as_ref().map_or(self.config.height, Board::height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.board
            .as_ref()
            .map_or(self.config.mines, Board::mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.as_ref().map_or(0, Board::flagged_count)
    }

    pub fn debug_view(&self) -> bool {
        self.debug_view
    }

    /// Player-facing view of a single tile.
    pub fn tile(&self, coords: Coord2) -> Result<TileView> {
        let board = self.board.as_ref().ok_or(GameError::InvalidOperation)?;
        let coords = board.validate_coords(coords)?;
        Ok(TileView::new(board.tile_at(coords), self.debug_view))
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::InvalidOperation)
        }
    }
}
