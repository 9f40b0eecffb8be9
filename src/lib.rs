//! Iterative Tower of Hanoi solver.
//!
//! A [`Puzzle`] holds three pegs and moves its whole stack from peg 0 to
//! peg 2, alternating between fixed peg pairs chosen by the parity of the
//! disc count.

pub mod puzzle;

pub use puzzle::{Move, Puzzle, PuzzleError};
