//! Best-improvement descent over the critical-block neighborhood.
//!
//! Starting from a feasible machine order, repeatedly evaluate every
//! boundary swap of every critical block and move to the best strictly
//! improving neighbor. Stops at a local optimum or at the deadline.
//!
//! # References
//!
//! - Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the
//!   job shop problem", *Management Science* 42(6), 797-813.
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 14

mod config;
mod runner;

pub use config::DescentConfig;
pub use runner::{DescentResult, DescentRunner, ExitCause};
