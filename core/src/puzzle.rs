use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::*;

/// A theme word and the strand that spells it on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    word: String,
    strand: Strand,
}

impl Answer {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn strand(&self) -> &Strand {
        &self.strand
    }
}

/// A parsed puzzle definition: theme, board, and theme answers in file order.
///
/// Loading is strict: structural problems and answers that leave the board,
/// misspell their word, or fold are all rejected up front, so a constructed
/// puzzle is always playable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    theme: String,
    board: Board,
    answers: Vec<Answer>,
}

impl Puzzle {
    /// Load and parse a puzzle definition from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_lines(text.lines())
    }

    /// Parse a puzzle from pre-split lines, trailing newlines already
    /// stripped.
    ///
    /// The format is: a theme line, a blank line, whitespace-separated board
    /// rows, a blank line, then `WORD ROW COL STEP...` answer lines with
    /// 1-indexed coordinates. Everything from the first line starting with
    /// `http` (case-insensitive) onward is an attribution trailer and is
    /// ignored.
    pub fn from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trimmed: Vec<String> = Vec::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line
                .as_bytes()
                .get(..4)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"http"))
            {
                log::debug!("ignoring trailer after line {}", trimmed.len());
                break;
            }
            trimmed.push(line.to_owned());
        }

        let mut blanks = trimmed
            .iter()
            .enumerate()
            .filter_map(|(index, line)| line.is_empty().then_some(index));
        let (first_blank, second_blank) = match (blanks.next(), blanks.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                return Err(GameError::MalformedPuzzle(
                    "expected two blank separator lines".into(),
                ));
            }
        };

        let theme = trimmed[..first_blank]
            .first()
            .cloned()
            .ok_or_else(|| GameError::MalformedPuzzle("missing theme line".into()))?;

        let board = parse_board(&trimmed[first_blank + 1..second_blank])?;

        let mut answers = Vec::new();
        for line in trimmed[second_blank + 1..]
            .iter()
            .filter(|line| !line.is_empty())
        {
            answers.push(parse_answer(line)?);
        }
        if answers.is_empty() {
            return Err(GameError::MalformedPuzzle("missing answer section".into()));
        }

        let puzzle = Self {
            theme,
            board,
            answers,
        };
        puzzle.check_answers()?;
        log::debug!(
            "loaded puzzle {:?}: {}x{} board, {} answers",
            puzzle.theme,
            puzzle.board.num_rows(),
            puzzle.board.num_cols(),
            puzzle.answers.len()
        );
        Ok(puzzle)
    }

    /// Theme string, with the casing of the puzzle file.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Full authoring contract: everything loading enforces, plus the
    /// requirement that the answers exactly tile the board.
    pub fn verify(&self) -> Result<()> {
        self.check_answers()?;
        let mut covered = HashSet::new();
        for answer in &self.answers {
            for pos in answer.strand.positions() {
                if !covered.insert(pos) {
                    return Err(GameError::MalformedPuzzle(format!(
                        "answers overlap at {pos}"
                    )));
                }
            }
        }
        let total = self.board.num_rows() * self.board.num_cols();
        if covered.len() != total {
            return Err(GameError::MalformedPuzzle(format!(
                "answers cover {} of {} cells",
                covered.len(),
                total
            )));
        }
        Ok(())
    }

    /// Per-answer integrity: in bounds, spells its word, unfolded.
    fn check_answers(&self) -> Result<()> {
        for answer in &self.answers {
            let spelled = self.board.evaluate_strand(&answer.strand)?;
            if spelled != answer.word {
                return Err(GameError::MalformedPuzzle(format!(
                    "answer {:?} traces {:?} on the board",
                    answer.word, spelled
                )));
            }
            if answer.strand.is_folded() {
                return Err(GameError::MalformedPuzzle(format!(
                    "answer {:?} folds over itself",
                    answer.word
                )));
            }
        }
        Ok(())
    }
}

fn parse_board(lines: &[String]) -> Result<Board> {
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => row.push(letter.to_ascii_lowercase()),
                _ => return Err(GameError::InvalidBoard),
            }
        }
        rows.push(row);
    }
    Board::from_rows(rows)
}

fn parse_answer(line: &str) -> Result<Answer> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [word, row, col, steps @ ..] = tokens.as_slice() else {
        return Err(GameError::MalformedPuzzle(format!(
            "incomplete answer line {line:?}"
        )));
    };
    let start = Pos::new(parse_index(row)?, parse_index(col)?);
    let steps = steps
        .iter()
        .map(|token| token.parse())
        .collect::<Result<Vec<Step>>>()?;
    Ok(Answer {
        word: word.to_ascii_lowercase(),
        strand: Strand::new(start, steps),
    })
}

/// Answer coordinates are 1-indexed in puzzle files.
fn parse_index(token: &str) -> Result<i32> {
    let value: i32 = token.parse().map_err(|_| {
        GameError::MalformedPuzzle(format!("expected a 1-indexed coordinate, got {token:?}"))
    })?;
    Ok(value - 1)
}
