//! Rule engine for a grid word-search puzzle in the style of Strands.
//!
//! Players trace connected sequences of adjacent letter cells to spell theme
//! words and bonus dictionary words, aided by a rate-limited hint mechanic.
//! This crate is the board model and game-state machine only: geometry
//! ([`Pos`], [`Step`]), paths ([`Strand`]), the letter grid ([`Board`]), the
//! puzzle-file loader ([`Puzzle`]), the word list ([`Dictionary`]), and the
//! session state machine ([`StrandsGame`]). Rendering and input polling live
//! in front-end crates that consume this API.

pub use board::*;
pub use dictionary::*;
pub use error::*;
pub use game::*;
pub use puzzle::*;
pub use strand::*;
pub use types::*;

mod board;
mod dictionary;
mod error;
mod game;
mod puzzle;
mod strand;
mod types;
