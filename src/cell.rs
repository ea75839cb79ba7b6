use std::{cmp::Ordering, fmt};

/// Offsets of the Moore neighborhood, relative to the center cell.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// A position on the unbounded plane.
///
/// Every `i64` coordinate is a valid cell, but only cells strictly inside
/// `i64::MIN..=i64::MAX` on both axes have a complete neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Moves the cell by `(dx, dy)`, or `None` if either coordinate would overflow.
    #[inline]
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Whether all eight neighbors of this cell are representable.
    #[inline]
    pub fn has_neighborhood(self) -> bool {
        self.x != i64::MIN && self.x != i64::MAX && self.y != i64::MIN && self.y != i64::MAX
    }

    /// The eight Moore neighbors, in [`NEIGHBOR_OFFSETS`] order
    ///
    /// Returns `None` for a cell on the edge of the coordinate range instead
    /// of wrapping around to the other side of the plane.
    pub fn checked_neighbors(self) -> Option<[Cell; 8]> {
        let mut out = [self; 8];
        for (slot, (dx, dy)) in out.iter_mut().zip(NEIGHBOR_OFFSETS) {
            *slot = self.checked_offset(dx, dy)?;
        }
        Some(out)
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: y first, then x
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}

impl From<(i64, i64)> for Cell {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    #[inline]
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
