use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::*;

/// Minimum number of cells a submission must cover.
pub const MIN_WORD_CELLS: usize = 4;

/// Bonus words banked before a hint becomes available, unless the front end
/// installs its own threshold.
pub const DEFAULT_HINT_THRESHOLD: u32 = 3;

const SCORE_THEME_WORD: i32 = 10;
const SCORE_DICTIONARY_WORD: i32 = 5;
const SCORE_REJECTED: i32 = -2;
const SCORE_HINT: i32 = -5;

/// Outcome of submitting a strand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than `MIN_WORD_CELLS` cells were traced.
    TooShort,
    /// The matching theme answer was already on the found list.
    AlreadyFound,
    /// A theme answer, newly found.
    ThemeWord(String),
    /// A bonus dictionary word; repeatable.
    DictionaryWord(String),
    /// Spells neither a theme word nor a dictionary word.
    NotInWordList,
}

impl SubmitOutcome {
    /// Whether this outcome found a word, theme or bonus.
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::ThemeWord(_) | Self::DictionaryWord(_))
    }

    /// Score adjustment applied together with this outcome.
    pub const fn score_delta(&self) -> i32 {
        match self {
            Self::ThemeWord(_) => SCORE_THEME_WORD,
            Self::DictionaryWord(_) => SCORE_DICTIONARY_WORD,
            Self::TooShort | Self::NotInWordList => SCORE_REJECTED,
            Self::AlreadyFound => 0,
        }
    }
}

/// Progress of the active hint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveHint {
    /// Index into `answers()` of the hinted theme word.
    pub index: usize,
    /// Whether the word's first and last cells should be highlighted.
    pub ends_shown: bool,
}

/// Outcome of requesting a hint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// The active hint was created or escalated.
    Revealed(ActiveHint),
    /// The current hint is already fully revealed, or there is nothing left
    /// to hint at; nothing changed.
    UseCurrentHint,
}

/// Rule engine for one puzzle session.
///
/// The puzzle and dictionary are fixed at construction; all mutation goes
/// through [`submit_strand`](Self::submit_strand) and
/// [`use_hint`](Self::use_hint). Front ends translate raw input into
/// [`Strand`] values, call those two methods, and render from the accessors.
#[derive(Clone, Debug)]
pub struct StrandsGame {
    puzzle: Puzzle,
    dictionary: Dictionary,
    found: Vec<Strand>,
    active_hint: Option<ActiveHint>,
    hint_threshold: u32,
    hint_meter: u32,
    score: i32,
}

impl StrandsGame {
    pub fn new(puzzle: Puzzle, dictionary: Dictionary) -> Self {
        Self::with_hint_threshold(puzzle, dictionary, DEFAULT_HINT_THRESHOLD)
    }

    pub fn with_hint_threshold(
        puzzle: Puzzle,
        dictionary: Dictionary,
        hint_threshold: u32,
    ) -> Self {
        Self {
            puzzle,
            dictionary,
            found: Vec::new(),
            active_hint: None,
            hint_threshold,
            hint_meter: 0,
            score: 0,
        }
    }

    /// Load a puzzle file and a dictionary file and start a game.
    pub fn from_path(puzzle: impl AsRef<Path>, dictionary: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            Puzzle::from_path(puzzle)?,
            Dictionary::from_path(dictionary)?,
        ))
    }

    pub fn theme(&self) -> &str {
        self.puzzle.theme()
    }

    pub fn board(&self) -> &Board {
        self.puzzle.board()
    }

    pub fn answers(&self) -> &[Answer] {
        self.puzzle.answers()
    }

    /// Theme answers found so far, as their canonical strands, in the order
    /// they were found.
    pub fn found_strands(&self) -> &[Strand] {
        &self.found
    }

    /// Whether every theme answer has been found.
    pub fn game_over(&self) -> bool {
        self.puzzle
            .answers()
            .iter()
            .all(|answer| self.found.contains(answer.strand()))
    }

    pub fn active_hint(&self) -> Option<ActiveHint> {
        self.active_hint
    }

    pub fn hint_meter(&self) -> u32 {
        self.hint_meter
    }

    pub fn hint_threshold(&self) -> u32 {
        self.hint_threshold
    }

    /// Whether the meter has banked enough bonus words for a hint.
    ///
    /// Advisory only: [`use_hint`](Self::use_hint) leaves the gating policy
    /// to the front end.
    pub fn hint_ready(&self) -> bool {
        self.hint_meter >= self.hint_threshold
    }

    /// Running score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Adjudicate a submitted strand.
    ///
    /// Fails with `OutOfBounds` when the strand leaves the board; front ends
    /// are expected to keep traced input on the grid or handle the error.
    /// Every other result, including rejections, is an ordinary outcome, and
    /// each applies its score delta before returning.
    pub fn submit_strand(&mut self, strand: &Strand) -> Result<SubmitOutcome> {
        let outcome = self.adjudicate(strand)?;
        self.score += outcome.score_delta();
        if let SubmitOutcome::DictionaryWord(_) = outcome {
            self.hint_meter += 1;
        }
        log::debug!("submitted strand from {}: {:?}", strand.start(), outcome);
        Ok(outcome)
    }

    fn adjudicate(&mut self, strand: &Strand) -> Result<SubmitOutcome> {
        if strand.cell_count() < MIN_WORD_CELLS {
            return Ok(SubmitOutcome::TooShort);
        }

        let word = self.puzzle.board().evaluate_strand(strand)?;

        let answers = self.puzzle.answers();
        if let Some(index) = answers.iter().position(|answer| answer.word() == word) {
            let canonical = answers[index].strand();
            if self.found.contains(canonical) {
                return Ok(SubmitOutcome::AlreadyFound);
            }
            self.found.push(canonical.clone());
            if self.active_hint.is_some_and(|hint| hint.index == index) {
                self.active_hint = None;
            }
            return Ok(SubmitOutcome::ThemeWord(word));
        }

        if self.dictionary.contains(&word) {
            Ok(SubmitOutcome::DictionaryWord(word))
        } else {
            Ok(SubmitOutcome::NotInWordList)
        }
    }

    /// Create or escalate the active hint.
    ///
    /// The first call points the hint at the first unfound answer, a second
    /// call reveals that word's end cells, and further calls change nothing
    /// until the hinted answer is found. Each successful reveal applies the
    /// hint score penalty.
    pub fn use_hint(&mut self) -> HintOutcome {
        let outcome = match self.active_hint {
            None => match self.first_unfound_answer() {
                Some(index) => {
                    let hint = ActiveHint {
                        index,
                        ends_shown: false,
                    };
                    self.active_hint = Some(hint);
                    HintOutcome::Revealed(hint)
                }
                None => HintOutcome::UseCurrentHint,
            },
            Some(ActiveHint {
                index,
                ends_shown: false,
            }) => {
                let hint = ActiveHint {
                    index,
                    ends_shown: true,
                };
                self.active_hint = Some(hint);
                HintOutcome::Revealed(hint)
            }
            Some(_) => HintOutcome::UseCurrentHint,
        };
        if let HintOutcome::Revealed(hint) = outcome {
            self.score += SCORE_HINT;
            log::debug!(
                "hint revealed for answer {}, ends_shown: {}",
                hint.index,
                hint.ends_shown
            );
        }
        outcome
    }

    fn first_unfound_answer(&self) -> Option<usize> {
        self.puzzle
            .answers()
            .iter()
            .position(|answer| !self.found.contains(answer.strand()))
    }
}
