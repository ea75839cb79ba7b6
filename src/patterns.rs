//! Named seed patterns.
//!
//! Coordinates use screen orientation: x grows to the right, y grows downward.

use crate::{Board, Error};
use std::{fmt, str::FromStr};

pub const GLIDER: &[(i64, i64)] = &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 2)];
pub const TWO_BY_TWO: &[(i64, i64)] = &[(1, 0), (2, 0), (1, 1), (2, 1)];
pub const BLINKER: &[(i64, i64)] = &[(0, 1), (1, 1), (2, 1)];
pub const TOAD: &[(i64, i64)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];

#[rustfmt::skip]
pub const R_PENTOMINO: &[(i64, i64)] = &[
           (1, 0), (2, 0),
    (0, 1), (1, 1),
           (1, 2),
];

#[rustfmt::skip]
pub const ACORN: &[(i64, i64)] = &[
           (1, 0),
                           (3, 1),
    (0, 2), (1, 2),                (4, 2), (5, 2), (6, 2),
];

#[rustfmt::skip]
pub const FIVE_BY_FIVE: &[(i64, i64)] = &[
    (0, 0), (1, 0), (2, 0),         (4, 0),
    (0, 1),
                            (3, 2), (4, 2),
            (1, 3), (2, 3),         (4, 3),
    (0, 4),         (2, 4),         (4, 4),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Glider,
    TwoByTwo,
    Blinker,
    Toad,
    RPentomino,
    Acorn,
    FiveByFive,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Self::Glider,
        Self::TwoByTwo,
        Self::Blinker,
        Self::Toad,
        Self::RPentomino,
        Self::Acorn,
        Self::FiveByFive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::TwoByTwo => "two-by-two",
            Self::Blinker => "blinker",
            Self::Toad => "toad",
            Self::RPentomino => "r-pentomino",
            Self::Acorn => "acorn",
            Self::FiveByFive => "five-by-five",
        }
    }

    pub fn cells(self) -> &'static [(i64, i64)] {
        match self {
            Self::Glider => GLIDER,
            Self::TwoByTwo => TWO_BY_TWO,
            Self::Blinker => BLINKER,
            Self::Toad => TOAD,
            Self::RPentomino => R_PENTOMINO,
            Self::Acorn => ACORN,
            Self::FiveByFive => FIVE_BY_FIVE,
        }
    }

    pub fn board(self) -> Board {
        self.cells().iter().copied().collect()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        match wanted.as_str() {
            "block" => Ok(Self::TwoByTwo),
            "r" => Ok(Self::RPentomino),
            _ => Self::ALL
                .into_iter()
                .find(|pattern| pattern.name() == wanted)
                .ok_or_else(|| Error::UnknownPattern(s.to_owned())),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
