use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

pub const PEG_COUNT: usize = 3;
pub const DEFAULT_DISCS: i32 = 5;
/// Largest disc count whose step count `2^n - 1` still fits in a `u64`.
pub const MAX_DISCS: u32 = 63;

const SOURCE: usize = 0;
const DESTINATION: usize = 2;

// Peg pairs tried at `step % 3`, selected by the parity of the disc count.
const ODD_CYCLE: [(usize, usize); 3] = [(0, 2), (0, 1), (1, 2)];
const EVEN_CYCLE: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("cannot put disc {disc} from peg {from} on top of smaller disc {onto} on peg {to}")]
    IllegalMove {
        disc: u32,
        onto: u32,
        from: usize,
        to: usize,
    },
    #[error("peg {peg} has no disc to move")]
    EmptyPeg { peg: usize },
    #[error("peg {peg} does not exist")]
    InvalidPeg { peg: usize },
}

/// A single executed disc move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub disc: u32,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (disc {})", self.from, self.to, self.disc)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    discs: u32,
    pegs: [Vec<u32>; PEG_COUNT],
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new(DEFAULT_DISCS)
    }
}

impl Puzzle {
    /// Stacks `disc_count` discs on the source peg, largest at the bottom.
    ///
    /// Non-positive counts build a single-disc puzzle; counts above
    /// [`MAX_DISCS`] are clamped to it.
    pub fn new(disc_count: i32) -> Self {
        let discs = disc_count.clamp(1, MAX_DISCS as i32) as u32;
        let mut pegs: [Vec<u32>; PEG_COUNT] = Default::default();
        pegs[SOURCE] = (1..=discs).rev().collect();

        Self { discs, pegs }
    }

    pub fn disc_count(&self) -> u32 {
        self.discs
    }

    /// Peg contents, bottom to top.
    pub fn pegs(&self) -> &[Vec<u32>; PEG_COUNT] {
        &self.pegs
    }

    pub fn top(&self, peg: usize) -> Option<u32> {
        self.pegs.get(peg)?.last().copied()
    }

    /// Number of moves in a full solve, `2^n - 1`.
    pub fn step_count(&self) -> u64 {
        (1u64 << self.discs) - 1
    }

    pub fn is_solved(&self) -> bool {
        self.pegs[SOURCE].is_empty()
            && self.pegs[1].is_empty()
            && self.pegs[DESTINATION]
                .iter()
                .copied()
                .eq((1..=self.discs).rev())
    }

    /// Moves the top disc of `from` onto `to`.
    ///
    /// The pegs are left untouched when the move is rejected.
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<Move, PuzzleError> {
        for peg in [from, to] {
            if peg >= PEG_COUNT {
                return Err(PuzzleError::InvalidPeg { peg });
            }
        }

        let disc = self.top(from).ok_or(PuzzleError::EmptyPeg { peg: from })?;
        let onto = self.top(to);
        if let Some(onto) = onto {
            if onto <= disc {
                return Err(PuzzleError::IllegalMove {
                    disc,
                    onto,
                    from,
                    to,
                });
            }
        }

        self.pegs[from].pop();
        self.pegs[to].push(disc);
        debug!(from, to, disc, onto = ?onto, "moved disc");

        Ok(Move { from, to, disc })
    }

    /// Picks the only legal direction between two pegs: the smaller top disc
    /// moves, and an empty peg always receives.
    fn legal_direction(&self, a: usize, b: usize) -> (usize, usize) {
        match (self.top(a), self.top(b)) {
            (None, _) => (b, a),
            (_, None) => (a, b),
            (Some(top_a), Some(top_b)) if top_a > top_b => (b, a),
            _ => (a, b),
        }
    }

    /// Runs the iterative solution, calling `observer` after every move.
    ///
    /// Returns the number of moves made. An already solved puzzle is left as
    /// is and reports zero moves.
    pub fn solve_with<F>(&mut self, mut observer: F) -> Result<u64, PuzzleError>
    where
        F: FnMut(&Move),
    {
        if self.is_solved() {
            info!(discs = self.discs, "puzzle already solved");
            return Ok(0);
        }

        let cycle = if self.discs % 2 == 1 {
            ODD_CYCLE
        } else {
            EVEN_CYCLE
        };
        let steps = self.step_count();
        info!(discs = self.discs, steps, "solving");

        for step in 0..steps {
            let (a, b) = cycle[(step % 3) as usize];
            let (from, to) = self.legal_direction(a, b);
            let movement = self.apply_move(from, to)?;
            observer(&movement);
        }

        info!(moves = steps, "solved");
        Ok(steps)
    }

    /// Solves the puzzle and returns the moves in order.
    pub fn solve(&mut self) -> Result<Vec<Move>, PuzzleError> {
        let mut moves = Vec::new();
        self.solve_with(|movement| moves.push(*movement))?;
        Ok(moves)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listings: Vec<String> = self
            .pegs
            .iter()
            .map(|peg| {
                peg.iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let width = listings.iter().map(String::len).max().unwrap_or(0);

        for (i, listing) in listings.iter().enumerate() {
            writeln!(f, "{i}: {listing:>width$}")?;
        }
        Ok(())
    }
}
