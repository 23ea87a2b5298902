//! Next-piece queue - fixed-depth lookahead of upcoming matrices
//!
//! Always holds exactly `NEXT_QUEUE_LEN` pieces: taking the front appends a
//! freshly generated one at the back. Stored inline (no heap).

use arrayvec::ArrayVec;

use crate::pieces::{piece, Matrix};
use crate::rng::SimpleRng;
use crate::types::NEXT_QUEUE_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    pieces: ArrayVec<Matrix, NEXT_QUEUE_LEN>,
}

impl NextQueue {
    /// Fill a new queue from the generator
    pub fn new(rng: &mut SimpleRng) -> Self {
        let mut pieces = ArrayVec::new();
        while !pieces.is_full() {
            pieces.push(piece(rng.next_kind()));
        }
        Self { pieces }
    }

    /// Remove the front piece and refill the back
    pub fn advance(&mut self, rng: &mut SimpleRng) -> Matrix {
        let front = self.pieces.remove(0);
        self.pieces.push(piece(rng.next_kind()));
        front
    }

    /// Pending pieces, front first
    pub fn pieces(&self) -> &[Matrix] {
        &self.pieces
    }

    pub fn front(&self) -> &Matrix {
        &self.pieces[0]
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
