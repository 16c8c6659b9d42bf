/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const SURROUNDING: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Which tiles count as touching a given tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// All eight surrounding tiles, used for mine counts
    Surrounding,
    /// Up, left, right and down, the directions a cascade spreads in
    Orthogonal,
}

impl Adjacency {
    fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            Self::Surrounding => &SURROUNDING,
            Self::Orthogonal => &ORTHOGONAL,
        }
    }
}

/// In-bounds tiles adjacent to `center`, tiles past an edge are skipped.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2, adjacency: Adjacency) -> Self {
        Self {
            center,
            bounds,
            offsets: adjacency.offsets().iter(),
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.center;
        let (width, height) = self.bounds;
        self.offsets.by_ref().find_map(|&(dx, dy)| {
            let next_x = x.checked_add_signed(dx).filter(|&next_x| next_x < width)?;
            let next_y = y.checked_add_signed(dy).filter(|&next_y| next_y < height)?;
            Some((next_x, next_y))
        })
    }
}
