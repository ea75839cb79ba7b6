mod cycle;
mod rule;

pub use self::cycle::{Cycle, detect_cycle};
use crate::{Board, Cell, Error, Result};
use std::collections::HashMap;
use tracing::trace;

/// The eight Moore neighbors of `cell`.
///
/// # Panics
/// If `cell` lies on the edge of the `i64` plane. Use
/// [`Cell::checked_neighbors`] to handle that case.
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    match cell.checked_neighbors() {
        Some(around) => around,
        None => panic!("{}", Error::OutOfRange(cell)),
    }
}

/// Computes the next generation of `board`.
///
/// Every live cell adds one to the tally of each of its neighbors, so the
/// tally's keys are exactly the cells that can be alive next generation.
/// Live cells missing from the tally have no neighbors and die.
///
/// Fails with [`Error::OutOfRange`] if a live cell has no complete
/// neighborhood; the input is never modified.
pub fn try_advance(board: &Board) -> Result<Board> {
    let mut tally: HashMap<Cell, u8> = HashMap::with_capacity(board.len() * 4);
    for &cell in board {
        let around = cell.checked_neighbors().ok_or(Error::OutOfRange(cell))?;
        for neighbor in around {
            *tally.entry(neighbor).or_default() += 1;
        }
    }

    let candidates = tally.len();
    let next: Board = tally
        .into_iter()
        .filter(|&(cell, count)| rule::next_state(board.contains(cell), count))
        .map(|(cell, _)| cell)
        .collect();
    trace!(alive = board.len(), candidates, next = next.len(), "advanced");
    Ok(next)
}

/// Computes the next generation of `board`.
///
/// # Panics
/// If a live cell lies on the edge of the `i64` plane; see [`try_advance`].
pub fn advance(board: &Board) -> Board {
    match try_advance(board) {
        Ok(next) => next,
        Err(err) => panic!("{err}"),
    }
}

/// Applies [`advance`] `generations` times.
pub fn advance_by(board: &Board, generations: usize) -> Board {
    let mut current = board.clone();
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}

impl Board {
    /// Method form of [`advance`].
    #[inline]
    pub fn advance(&self) -> Board {
        advance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().collect()
    }

    const BLOCK: &[(i64, i64)] = &[(1, 0), (2, 0), (1, 1), (2, 1)];
    const BLINKER: &[(i64, i64)] = &[(0, 1), (1, 1), (2, 1)];
    const GLIDER: &[(i64, i64)] = &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 2)];

    #[test]
    fn neighbors_are_the_moore_neighborhood() {
        for center in [Cell::zero(), Cell::new(-7, 3), Cell::new(i64::MAX - 1, i64::MIN + 1)] {
            let around = neighbors(center);
            let distinct: HashSet<Cell> = around.iter().copied().collect();

            assert_eq!(distinct.len(), 8);
            assert!(!distinct.contains(&center));
            for cell in around {
                assert!(cell.x.abs_diff(center.x) <= 1 && cell.y.abs_diff(center.y) <= 1);
                // adjacency is symmetric
                if let Some(back) = cell.checked_neighbors() {
                    assert!(back.contains(&center));
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside the supported coordinate range")]
    fn neighbors_panics_at_the_edge() {
        neighbors(Cell::new(0, i64::MAX));
    }

    #[test]
    fn empty_stays_empty() {
        assert!(advance(&Board::new()).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let seed = board(GLIDER);
        let before = seed.clone();
        let _ = advance(&seed);

        assert_eq!(seed, before);
    }

    #[test]
    fn advance_is_deterministic() {
        let seed = board(GLIDER);

        assert_eq!(advance(&seed), advance(&seed));
    }

    #[test]
    fn block_is_still() {
        let block = board(BLOCK);

        assert_eq!(advance(&block), block);
    }

    #[test]
    fn blinker_has_period_two() {
        let blinker = board(BLINKER);
        let vertical = advance(&blinker);

        assert_eq!(vertical, board(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(advance(&vertical), blinker);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = board(GLIDER);
        let moved = advance_by(&glider, 4);

        assert_eq!(moved, glider.translate(-1, -1).expect("in range"));
    }

    #[test]
    fn isolated_cell_dies() {
        assert!(advance(&board(&[(4, 4)])).is_empty());
    }

    #[test]
    fn crowded_cell_dies() {
        // center with four live neighbors
        let plus = board(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);

        assert!(!advance(&plus).contains(Cell::zero()));
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let corner = board(&[(0, 0), (1, 0), (0, 1)]);

        assert!(advance(&corner).contains(Cell::new(1, 1)));
    }

    #[test]
    fn far_from_origin_matches_origin() {
        let offset = (i64::MAX / 2, i64::MIN / 3);
        let glider = board(GLIDER);
        let far = glider.translate(offset.0, offset.1).expect("in range");

        let expected = advance_by(&glider, 9).translate(offset.0, offset.1).expect("in range");
        assert_eq!(advance_by(&far, 9), expected);
    }

    #[test]
    fn near_the_edge_is_not_special() {
        // blinker whose outer cells touch the last cells with full neighborhoods
        let blinker = board(BLINKER);
        let far = blinker.translate(i64::MAX - 3, i64::MAX - 3).expect("in range");

        let vertical = try_advance(&far).expect("in range");
        assert_eq!(try_advance(&vertical).expect("in range"), far);
    }

    #[test]
    fn edge_cell_is_reported() {
        let edge = Cell::new(i64::MIN, 0);
        let err = try_advance(&Board::from_iter([edge])).unwrap_err();

        assert!(matches!(err, Error::OutOfRange(cell) if cell == edge));
    }

    #[test]
    fn method_form_matches_function() {
        let glider = board(GLIDER);

        assert_eq!(glider.advance(), advance(&glider));
    }
}
