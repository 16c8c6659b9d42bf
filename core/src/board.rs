use ndarray::Array2;
use rand::Rng;
use serde::Serialize;

use crate::*;

/// Random picks tried for a single mine before falling back to a linear scan.
const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Grid of tiles, indexed by `(x, y)`.
///
/// Linear indices used by [`Board::tile_at_index`] run row by row, `y * width + x`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Board {
    fn empty(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Places `config.mines` mines uniformly at random and computes the neighbor counts.
    pub fn generate<R: Rng>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut board = Self::empty(config.size());
        let mut fallbacks = 0;
        for _ in 0..config.mines {
            if !board.place_random_mine(rng) {
                board.place_first_free_mine();
                fallbacks += 1;
            }
        }
        if fallbacks > 0 {
            log::debug!(
                "{} of {} mines placed by linear scan after {} failed attempts each",
                fallbacks,
                config.mines,
                MAX_PLACEMENT_ATTEMPTS
            );
        }

        board.mine_count = config.mines;
        board.update_adjacent_counts();
        log::debug!(
            "Generated {}x{} board with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(board)
    }

    /// Builds a board with a fixed mine layout, duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidConfig);
        }

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            let tile = board.tile_at_mut(coords);
            if !tile.is_mine() {
                tile.kind = TileKind::Mine;
                board.mine_count += 1;
            }
        }

        if board.mine_count >= board.total_tiles() {
            return Err(GameError::InvalidConfig);
        }

        board.update_adjacent_counts();
        Ok(board)
    }

    fn place_random_mine<R: Rng>(&mut self, rng: &mut R) -> bool {
        let (width, height) = self.size();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            let tile = self.tile_at_mut(coords);
            if !tile.is_mine() {
                tile.kind = TileKind::Mine;
                return true;
            }
        }
        false
    }

    fn place_first_free_mine(&mut self) {
        for index in 0..usize::from(self.total_tiles()) {
            let tile = self.tile_at_index_mut(index);
            if !tile.is_mine() {
                tile.kind = TileKind::Mine;
                return;
            }
        }
        log::warn!("No free tile left for a mine");
    }

    fn update_adjacent_counts(&mut self) {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                let coords = (x, y);
                if self.tile_at(coords).is_mine() {
                    continue;
                }
                let count = self
                    .neighbors(coords)
                    .filter(|&pos| self.tile_at(pos).is_mine())
                    .count();
                self.tile_at_mut(coords).adjacent_mines = count as u8;
            }
        }
    }

    pub fn width(&self) -> Coord {
        self.tiles.dim().0 as Coord
    }

    pub fn height(&self) -> Coord {
        self.tiles.dim().1 as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_tiles(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    /// Number of tiles that have to be revealed to win.
    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mine_count)
    }

    pub fn is_valid_coordinate(&self, (x, y): Coord2) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_valid_coordinate(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Panics when `coords` is outside the board, validate first.
    pub fn tile_at(&self, coords: Coord2) -> &Tile {
        &self.tiles[coords.to_nd_index()]
    }

    /// Panics when `coords` is outside the board, validate first.
    pub fn tile_at_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut Tile> {
        self.tiles.get_mut(coords.to_nd_index())
    }

    pub fn coords_of_index(&self, index: usize) -> Option<Coord2> {
        if index >= usize::from(self.total_tiles()) {
            return None;
        }
        let width = usize::from(self.width());
        Some(((index % width) as Coord, (index / width) as Coord))
    }

    /// Panics when `index` is not below [`Board::total_tiles`].
    pub fn tile_at_index(&self, index: usize) -> &Tile {
        let width = usize::from(self.width());
        &self.tiles[[index % width, index / width]]
    }

    /// Panics when `index` is not below [`Board::total_tiles`].
    pub fn tile_at_index_mut(&mut self, index: usize) -> &mut Tile {
        let width = usize::from(self.width());
        &mut self.tiles[[index % width, index / width]]
    }

    /// All tiles in linear index order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Tile)> + '_ {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| ((x, y), self.tile_at((x, y)))))
    }

    /// The up to eight tiles surrounding `coords`.
    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.adjacent(coords, Adjacency::Surrounding)
    }

    pub fn adjacent(&self, coords: Coord2, adjacency: Adjacency) -> Neighbors {
        Neighbors::new(coords, self.size(), adjacency)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.flagged).count() as CellCount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn brute_force_count(board: &Board, (x, y): Coord2) -> u8 {
        let mut count = 0;
        for dy in -1i16..=1 {
            for dx in -1i16..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = i16::from(x) + dx;
                let ny = i16::from(y) + dy;
                if nx < 0 || ny < 0 || nx >= i16::from(board.width()) || ny >= i16::from(board.height()) {
                    continue;
                }
                if board.tile_at((nx as Coord, ny as Coord)).is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    fn assert_consistent(board: &Board, mines: CellCount) {
        let actual = board.iter().filter(|(_, tile)| tile.is_mine()).count();
        assert_eq!(actual, usize::from(mines));
        assert_eq!(board.mine_count(), mines);

        for (coords, tile) in board.iter() {
            if !tile.is_mine() {
                assert_eq!(tile.adjacent_mines, brute_force_count(board, coords), "at {:?}", coords);
            }
        }
    }

    #[test]
    fn generated_boards_match_brute_force_counts() {
        let configs = [
            BoardConfig::new_unchecked(9, 9, 10),
            BoardConfig::new_unchecked(16, 16, 40),
            BoardConfig::new_unchecked(30, 16, 99),
            BoardConfig::new_unchecked(1, 7, 3),
            BoardConfig::new_unchecked(4, 4, 0),
        ];
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for config in configs {
                let board = Board::generate(config, &mut rng).unwrap();
                assert_eq!(board.size(), config.size());
                assert_consistent(&board, config.mines);
            }
        }
    }

    #[test]
    fn saturated_board_places_every_mine() {
        let config = BoardConfig::new_unchecked(8, 8, 63);
        for seed in 0..10 {
            let board = Board::generate(config, &mut SmallRng::seed_from_u64(seed)).unwrap();
            assert_consistent(&board, 63);
            assert_eq!(board.safe_tile_count(), 1);
        }
    }

    #[test]
    fn safe_tile_count_never_underflows() {
        let board = Board {
            tiles: Array2::default([2, 1]),
            mine_count: 5,
        };

        assert_eq!(board.safe_tile_count(), 0);
    }

    #[test]
    fn generate_rejects_invalid_config() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(
            Board::generate(BoardConfig::new_unchecked(5, 5, 25), &mut rng),
            Err(GameError::InvalidConfig)
        );
        assert_eq!(
            Board::generate(BoardConfig::new_unchecked(0, 5, 1), &mut rng),
            Err(GameError::InvalidConfig)
        );
    }

    #[test]
    fn from_mine_coords_counts_neighbors() {
        let board = Board::from_mine_coords((3, 3), &[(2, 2)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.tile_at((0, 0)).adjacent_mines, 0);
        assert_eq!(board.tile_at((1, 1)).adjacent_mines, 1);
        assert_eq!(board.tile_at((2, 1)).adjacent_mines, 1);
        assert!(board.tile_at((2, 2)).is_mine());
    }

    #[test]
    fn from_mine_coords_ignores_duplicates() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.tile_at((0, 0)).adjacent_mines, 1);
    }

    #[test]
    fn from_mine_coords_rejects_bad_layouts() {
        assert_eq!(
            Board::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            Board::from_mine_coords((1, 1), &[(0, 0)]),
            Err(GameError::InvalidConfig)
        );
        assert_eq!(Board::from_mine_coords((0, 3), &[]), Err(GameError::InvalidConfig));
    }

    #[test]
    fn coordinate_validity() {
        let board = Board::from_mine_coords((4, 2), &[]).unwrap();

        assert!(board.is_valid_coordinate((3, 1)));
        assert!(!board.is_valid_coordinate((4, 1)));
        assert!(!board.is_valid_coordinate((3, 2)));
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::OutOfBounds));
        assert!(board.get((4, 0)).is_none());
        assert!(board.get((0, 1)).is_some());
    }

    #[test]
    fn linear_index_runs_row_by_row() {
        let mut board = Board::from_mine_coords((3, 2), &[(1, 1)]).unwrap();

        assert_eq!(board.coords_of_index(4), Some((1, 1)));
        assert_eq!(board.coords_of_index(6), None);
        assert!(board.tile_at_index(4).is_mine());

        board.tile_at_index_mut(2).flagged = true;
        assert!(board.tile_at((2, 0)).flagged);
        assert_eq!(board.flagged_count(), 1);

        let order: alloc::vec::Vec<_> = board.iter().map(|(coords, _)| coords).collect();
        assert_eq!(order, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn same_seed_gives_same_board() {
        let config = BoardConfig::default();
        let first = Board::generate(config, &mut SmallRng::seed_from_u64(7)).unwrap();
        let second = Board::generate(config, &mut SmallRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }
}
