use crate::{Board, Bounds};
use std::fmt::{self, Write};

pub const LIVE: char = '█';
pub const DEAD: char = '░';

/// A text grid of a board, framed by its bounding box.
pub struct Frame<'a> {
    board: &'a Board,
    margin: i64,
}

impl<'a> Frame<'a> {
    /// A frame with a one-cell margin around the live cells.
    pub fn new(board: &'a Board) -> Self {
        Self { board, margin: 1 }
    }

    pub fn with_margin(mut self, margin: i64) -> Self {
        self.margin = margin.max(0);
        self
    }

    /// The drawn area, `None` when there is nothing to draw.
    pub fn view(&self) -> Option<Bounds> {
        self.board.bounds().map(|bounds| bounds.expand(self.margin))
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bounds) = self.board.bounds() else {
            return writeln!(f, "(empty board)");
        };

        writeln!(f, "low: {} high: {}", bounds.min, bounds.max)?;
        let view = bounds.expand(self.margin);
        for y in view.rows() {
            for x in view.columns() {
                let glyph = if self.board.contains((x, y).into()) {
                    LIVE
                } else {
                    DEAD
                };
                f.write_char(glyph)?;
            }
            // y coordinate at the end of each row
            writeln!(f, " {y}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_explicit() {
        let board = Board::new();
        let frame = Frame::new(&board);

        assert_eq!(frame.view(), None);
        assert_eq!(frame.to_string(), "(empty board)\n");
    }

    #[test]
    fn blinker_with_margin() {
        let board: Board = [(0_i64, 1), (1, 1), (2, 1)].into_iter().collect();

        let expected = "low: (0, 1) high: (2, 1)\n\
                        ░░░░░ 0\n\
                        ░███░ 1\n\
                        ░░░░░ 2\n";
        assert_eq!(Frame::new(&board).to_string(), expected);
    }

    #[test]
    fn without_margin_and_negative_rows() {
        let board: Board = [(-1_i64, -2), (0, -1)].into_iter().collect();

        let expected = "low: (-1, -2) high: (0, -1)\n\
                        █░ -2\n\
                        ░█ -1\n";
        assert_eq!(Frame::new(&board).with_margin(0).to_string(), expected);
    }
}
