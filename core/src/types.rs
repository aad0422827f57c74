use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Row index, 0 at the top edge, increasing downward.
pub type Row = i32;

/// Column index, 0 at the left edge, increasing rightward.
pub type Col = i32;

/// One of the eight compass directions connecting a cell to its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::North,
        Step::South,
        Step::East,
        Step::West,
        Step::NorthEast,
        Step::NorthWest,
        Step::SouthEast,
        Step::SouthWest,
    ];

    /// `(row, col)` displacement of the step.
    pub const fn delta(self) -> (Row, Col) {
        use Step::*;
        match self {
            North => (-1, 0),
            South => (1, 0),
            East => (0, 1),
            West => (0, -1),
            NorthEast => (-1, 1),
            NorthWest => (-1, -1),
            SouthEast => (1, 1),
            SouthWest => (1, -1),
        }
    }

    /// Token form used by puzzle files.
    pub const fn token(self) -> &'static str {
        use Step::*;
        match self {
            North => "n",
            South => "s",
            East => "e",
            West => "w",
            NorthEast => "ne",
            NorthWest => "nw",
            SouthEast => "se",
            SouthWest => "sw",
        }
    }
}

impl FromStr for Step {
    type Err = GameError;

    /// Parse a puzzle-file step token, case-insensitively.
    fn from_str(token: &str) -> Result<Self> {
        use Step::*;
        match token.to_ascii_lowercase().as_str() {
            "n" => Ok(North),
            "s" => Ok(South),
            "e" => Ok(East),
            "w" => Ok(West),
            "ne" => Ok(NorthEast),
            "nw" => Ok(NorthWest),
            "se" => Ok(SouthEast),
            "sw" => Ok(SouthWest),
            _ => Err(GameError::InvalidStep),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A cell position, not necessarily on any particular board.
///
/// Bounds are a `Board` concern; coordinates may go negative while a path is
/// being traced or validated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: Row,
    pub col: Col,
}

impl Pos {
    pub const fn new(row: Row, col: Col) -> Self {
        Self { row, col }
    }

    /// Neighbor reached by taking `step` from this position.
    pub const fn take_step(self, step: Step) -> Pos {
        let (row_delta, col_delta) = step.delta();
        Pos::new(self.row + row_delta, self.col + col_delta)
    }

    /// The unique step leading from this position to `other`.
    ///
    /// Fails with `InvalidStep` when the positions coincide or are more than
    /// one cell apart.
    pub fn step_to(self, other: Pos) -> Result<Step> {
        let delta = (other.row - self.row, other.col - self.col);
        Step::ALL
            .into_iter()
            .find(|step| step.delta() == delta)
            .ok_or(GameError::InvalidStep)
    }

    /// Whether `other` is connected to this position by a single step.
    pub fn is_adjacent_to(self, other: Pos) -> bool {
        self.step_to(other).is_ok()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
