//! Priority dispatching for initial solutions.
//!
//! Provides priority rules (SPT, LPT, SRPT, LRPT and their
//! earliest-free-machine restricted variants) and a greedy dispatcher that
//! turns a rule into a feasible [`MachineOrder`](crate::models::MachineOrder).
//!
//! # Usage
//!
//! ```
//! use u_jobshop::dispatching::{GreedyDispatcher, PriorityRule};
//!
//! let dispatcher = GreedyDispatcher::new(PriorityRule::EstLrpt);
//! assert_eq!(dispatcher.rule().name(), "EST_LRPT");
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod rules;

pub use context::DispatchContext;
pub use engine::GreedyDispatcher;
pub use rules::PriorityRule;

/// Score returned by a priority rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;
