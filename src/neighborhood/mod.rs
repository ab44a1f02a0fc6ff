//! Critical-path neighborhood.
//!
//! Everything the descent needs to propose moves from a schedule:
//!
//! - [`critical_path`]: zero-slack chain of operations ending at the makespan
//! - [`blocks_of`]: maximal same-machine runs on that chain
//! - [`neighbors`]: boundary swaps of each block
//!
//! Only moves on the critical path can shorten the makespan; restricting
//! to block boundaries discards swaps that provably cannot improve it.
//!
//! # References
//!
//! - van Laarhoven, Aarts & Lenstra (1992), "Job shop scheduling by
//!   simulated annealing", *Operations Research* 40(1), 113-125.
//! - Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the
//!   job shop problem", *Management Science* 42(6), 797-813.

mod blocks;
mod critical_path;
mod moves;

pub use blocks::{blocks_of, Block};
pub use critical_path::critical_path;
pub use moves::{neighbors, Swap};
