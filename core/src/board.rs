use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable rectangular grid of single lowercase letters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    letters: Array2<char>,
}

impl Board {
    /// Build a board from row-major letter rows.
    ///
    /// Fails with `InvalidBoard` when there are no rows, rows differ in
    /// length, or any cell is not a lowercase ASCII letter. Case folding is
    /// the loader's job; the board only stores what it is given.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(GameError::InvalidBoard);
        }
        let mut flat = Vec::with_capacity(num_rows * num_cols);
        for row in &rows {
            if row.len() != num_cols {
                return Err(GameError::InvalidBoard);
            }
            for &letter in row {
                if !letter.is_ascii_lowercase() {
                    return Err(GameError::InvalidBoard);
                }
                flat.push(letter);
            }
        }
        let letters = Array2::from_shape_vec((num_rows, num_cols), flat)
            .map_err(|_| GameError::InvalidBoard)?;
        Ok(Self { letters })
    }

    pub fn num_rows(&self) -> usize {
        self.letters.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.letters.ncols()
    }

    /// Letter at `pos`, failing with `OutOfBounds` off the grid.
    pub fn get_letter(&self, pos: Pos) -> Result<char> {
        let index = self.checked_index(pos)?;
        Ok(self.letters[index])
    }

    /// Concatenate the letters along `strand`, in path order.
    ///
    /// Propagates `OutOfBounds` when any position leaves the grid. Cycle and
    /// fold checks are the caller's concern.
    pub fn evaluate_strand(&self, strand: &Strand) -> Result<String> {
        strand.positions().map(|pos| self.get_letter(pos)).collect()
    }

    fn checked_index(&self, pos: Pos) -> Result<(usize, usize)> {
        let row = usize::try_from(pos.row).map_err(|_| GameError::OutOfBounds)?;
        let col = usize::try_from(pos.col).map_err(|_| GameError::OutOfBounds)?;
        if row < self.num_rows() && col < self.num_cols() {
            Ok((row, col))
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Step::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn construction_rejects_bad_grids() {
        let ragged = vec![vec!['a', 'b'], vec!['c']];
        assert!(matches!(
            Board::from_rows(ragged),
            Err(GameError::InvalidBoard)
        ));
        assert!(matches!(
            Board::from_rows(vec![]),
            Err(GameError::InvalidBoard)
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![]]),
            Err(GameError::InvalidBoard)
        ));
        let uppercase = vec![vec!['a', 'B']];
        assert!(matches!(
            Board::from_rows(uppercase),
            Err(GameError::InvalidBoard)
        ));
        let digit = vec![vec!['a', '1']];
        assert!(matches!(
            Board::from_rows(digit),
            Err(GameError::InvalidBoard)
        ));
    }

    #[test]
    fn get_letter_checks_bounds_in_all_directions() {
        let board = board(&["ab", "cd"]);
        assert_eq!(board.num_rows(), 2);
        assert_eq!(board.num_cols(), 2);
        assert_eq!(board.get_letter(Pos::new(1, 0)).unwrap(), 'c');
        for pos in [
            Pos::new(2, 0),
            Pos::new(0, 2),
            Pos::new(-1, 0),
            Pos::new(0, -1),
        ] {
            assert!(matches!(
                board.get_letter(pos),
                Err(GameError::OutOfBounds)
            ));
        }
    }

    #[test]
    fn evaluate_strand_spells_along_the_path() {
        let board = board(&["ab", "cd"]);
        let strand = Strand::new(Pos::new(0, 0), vec![South, East, North]);
        assert_eq!(board.evaluate_strand(&strand).unwrap(), "acdb");
    }

    #[test]
    fn evaluate_strand_propagates_out_of_bounds() {
        let board = board(&["ab", "cd"]);
        let strand = Strand::new(Pos::new(1, 1), vec![South, South]);
        assert!(matches!(
            board.evaluate_strand(&strand),
            Err(GameError::OutOfBounds)
        ));
    }
}
