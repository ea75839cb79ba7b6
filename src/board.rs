//! The live-cell set and its bounding box.

use crate::{Cell, Error, Result};
use std::{
    collections::{HashSet, hash_set},
    ops::RangeInclusive,
};

/// A set of live cells; every cell not in the set is dead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: HashSet<Cell>,
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Marks `cell` as alive, returning `false` if it already was.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The smallest box holding every live cell, `None` for an empty board.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self)
    }

    /// Live cells in row-major order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// A copy of the board moved by `(dx, dy)`.
    pub fn translate(&self, dx: i64, dy: i64) -> Result<Board> {
        self.iter()
            .map(|&cell| cell.checked_offset(dx, dy).ok_or(Error::OutOfRange(cell)))
            .collect()
    }

    /// The same board moved so its bounding box starts at the origin.
    pub fn normalized(&self) -> Result<Board> {
        match self.bounds() {
            Some(Bounds { min, .. }) => match (min.x.checked_neg(), min.y.checked_neg()) {
                (Some(dx), Some(dy)) => self.translate(dx, dy),
                _ => Err(Error::OutOfRange(min)),
            },
            None => Ok(Board::new()),
        }
    }

    /// The translation that maps this board onto `other`, if they hold the
    /// same shape.
    ///
    /// Two empty boards match with a zero offset.
    pub fn offset_to(&self, other: &Board) -> Option<(i64, i64)> {
        if self.len() != other.len() {
            return None;
        }
        let (Some(from), Some(to)) = (self.bounds(), other.bounds()) else {
            return Some((0, 0));
        };
        if from.width() != to.width() || from.height() != to.height() {
            return None;
        }

        let dx = to.min.x.checked_sub(from.min.x)?;
        let dy = to.min.y.checked_sub(from.min.y)?;
        self.iter()
            .all(|cell| {
                cell.checked_offset(dx, dy)
                    .is_some_and(|moved| other.contains(moved))
            })
            .then_some((dx, dy))
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for Board {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl Extend<Cell> for Board {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Board {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// An inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    pub fn of(board: &Board) -> Option<Self> {
        let mut cells = board.iter();
        let &first = cells.next()?;
        Some(cells.fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, cell| Self {
                min: Cell::new(bounds.min.x.min(cell.x), bounds.min.y.min(cell.y)),
                max: Cell::new(bounds.max.x.max(cell.x), bounds.max.y.max(cell.y)),
            },
        ))
    }

    /// Number of columns, saturating for boxes spanning the whole axis.
    #[inline]
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    #[inline]
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.columns().contains(&cell.x) && self.rows().contains(&cell.y)
    }

    /// Grows the box by `margin` cells on every side, clamped to the plane.
    pub fn expand(&self, margin: i64) -> Self {
        Self {
            min: Cell::new(
                self.min.x.saturating_sub(margin),
                self.min.y.saturating_sub(margin),
            ),
            max: Cell::new(
                self.max.x.saturating_add(margin),
                self.max.y.saturating_add(margin),
            ),
        }
    }

    #[inline]
    pub fn columns(&self) -> RangeInclusive<i64> {
        self.min.x..=self.max.x
    }

    #[inline]
    pub fn rows(&self) -> RangeInclusive<i64> {
        self.min.y..=self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().collect()
    }

    #[test]
    fn duplicates_collapse() {
        let board = board(&[(1, 1), (1, 1), (2, 1)]);

        assert_eq!(board.len(), 2);
        assert!(board.contains(Cell::new(1, 1)));
        assert!(!board.contains(Cell::new(0, 0)));
    }

    #[test]
    fn bounds_of_empty_board() {
        assert_eq!(Board::new().bounds(), None);
    }

    #[test]
    fn bounds_cover_all_cells() {
        let bounds = board(&[(3, -2), (-1, 4), (0, 0)]).bounds().expect("non-empty");

        assert_eq!(bounds.min, Cell::new(-1, -2));
        assert_eq!(bounds.max, Cell::new(3, 4));
        assert_eq!((bounds.width(), bounds.height()), (5, 7));
        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(!bounds.contains(Cell::new(4, 0)));
    }

    #[test]
    fn expand_saturates_at_the_edge() {
        let bounds = Bounds {
            min: Cell::new(i64::MIN, 0),
            max: Cell::new(0, i64::MAX),
        }
        .expand(1);

        assert_eq!(bounds.min, Cell::new(i64::MIN, -1));
        assert_eq!(bounds.max, Cell::new(1, i64::MAX));
    }

    #[test]
    fn sorted_is_row_major() {
        let sorted = board(&[(1, 2), (0, 0), (2, 0), (0, 1)]).sorted();

        assert_eq!(
            sorted,
            vec![Cell::new(0, 0), Cell::new(2, 0), Cell::new(0, 1), Cell::new(1, 2)]
        );
    }

    #[test]
    fn normalized_moves_to_origin() {
        let moved = board(&[(10, -5), (11, -5), (10, -4)]).normalized().expect("in range");

        assert_eq!(moved, board(&[(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn translate_reports_overflow() {
        let err = board(&[(i64::MAX, 0)]).translate(1, 0).unwrap_err();

        assert!(matches!(err, Error::OutOfRange(cell) if cell == Cell::new(i64::MAX, 0)));
    }

    #[test]
    fn offset_to_matches_translated_shapes() {
        let a = board(&[(0, 0), (1, 0), (1, 1)]);
        let b = a.translate(-3, 7).expect("in range");

        assert_eq!(a.offset_to(&b), Some((-3, 7)));
        assert_eq!(b.offset_to(&a), Some((3, -7)));
        assert_eq!(Board::new().offset_to(&Board::new()), Some((0, 0)));
    }

    #[test]
    fn offset_to_rejects_different_shapes() {
        let a = board(&[(0, 0), (1, 0), (1, 1)]);
        let mirrored = board(&[(0, 0), (1, 0), (0, 1)]);

        assert_eq!(a.offset_to(&mirrored), None);
        assert_eq!(a.offset_to(&board(&[(0, 0)])), None);
    }
}
