use std::collections::HashSet;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::*;

/// A path on the board: a start cell plus a sequence of steps.
///
/// Construction guarantees that consecutive positions are grid-adjacent;
/// whether the path stays on a particular board is a `Board` concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strand {
    start: Pos,
    steps: Vec<Step>,
}

impl Strand {
    pub fn new(start: Pos, steps: Vec<Step>) -> Self {
        Self { start, steps }
    }

    /// Rebuild a strand from consecutively traced cells, as a front end does
    /// when converting pointer or keyboard input into a submission.
    ///
    /// Fails with `InvalidStep` if the sequence is empty or two consecutive
    /// cells are not neighbors.
    pub fn from_positions(positions: &[Pos]) -> Result<Self> {
        let (&start, rest) = positions.split_first().ok_or(GameError::InvalidStep)?;
        let mut steps = Vec::with_capacity(rest.len());
        let mut current = start;
        for &next in rest {
            steps.push(current.step_to(next)?);
            current = next;
        }
        Ok(Self::new(start, steps))
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of cells covered, always `steps + 1`.
    pub fn cell_count(&self) -> usize {
        self.steps.len() + 1
    }

    /// Last cell of the path; equals `start` for a single-cell strand.
    pub fn end(&self) -> Pos {
        self.steps
            .iter()
            .fold(self.start, |pos, &step| pos.take_step(step))
    }

    /// Absolute positions covered by the strand, start cell first.
    ///
    /// The iterator is restartable: every call walks the same sequence.
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            next: Some(self.start),
            steps: self.steps.iter(),
        }
    }

    /// Whether any cell appears more than once in the path.
    pub fn is_cyclic(&self) -> bool {
        let mut seen = HashSet::new();
        self.positions().any(|pos| !seen.insert(pos))
    }

    /// Whether any two edges of the path cross or coincide.
    ///
    /// Two unit king-move edges intersect away from their endpoints exactly
    /// when they share a geometric midpoint, so midpoints are compared as
    /// doubled integers to stay off floating point. This flags an edge
    /// retraced in either direction as well as diagonals crossing at a cell
    /// corner.
    pub fn is_folded(&self) -> bool {
        let mut midpoints = HashSet::new();
        let mut prev = self.start;
        for &step in &self.steps {
            let next = prev.take_step(step);
            if !midpoints.insert((prev.row + next.row, prev.col + next.col)) {
                return true;
            }
            prev = next;
        }
        false
    }
}

/// Iterator over the cells of a strand, in path order.
#[derive(Clone, Debug)]
pub struct Positions<'a> {
    next: Option<Pos>,
    steps: slice::Iter<'a, Step>,
}

impl Iterator for Positions<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let current = self.next?;
        self.next = self.steps.next().map(|&step| current.take_step(step));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(_) => self.steps.len() + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions<'_> {}
