//! Swap moves and the restricted neighborhood.
//!
//! Only the first two and the last two operations of each block are
//! swapped. With positive durations such a swap never creates a cycle.
//! Zero-duration operations can link the two swapped operations through a
//! second, zero-length path, so a generated move may deadlock; the
//! simulator reports it as [`EncodingDefect::Cyclic`](crate::error::EncodingDefect::Cyclic).
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the
//! job shop problem", *Management Science* 42(6), 797-813.

use serde::{Deserialize, Serialize};

use super::Block;

/// Exchange of two positions within one machine's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    /// Machine whose sequence is modified.
    pub machine: usize,
    /// First position.
    pub first: usize,
    /// Second position.
    pub second: usize,
}

impl Swap {
    /// Creates a swap.
    pub fn new(machine: usize, first: usize, second: usize) -> Self {
        Self {
            machine,
            first,
            second,
        }
    }
}

/// Candidate swaps for one block: its first pair and its last pair.
///
/// A two-operation block yields a single swap.
pub fn neighbors(block: &Block) -> Vec<Swap> {
    let head = Swap::new(block.machine, block.first, block.first + 1);
    let tail = Swap::new(block.machine, block.last - 1, block.last);
    if head == tail {
        vec![head]
    } else {
        vec![head, tail]
    }
}
