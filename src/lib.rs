//! Job-shop scheduling by critical-block descent.
//!
//! Simulates per-machine processing orders into semi-active schedules,
//! extracts the critical path and its blocks, and improves an order by
//! best-improvement descent over block boundary swaps under a deadline.
//! Greedy priority dispatching supplies initial solutions.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instance`, `Operation`, `MachineOrder`,
//!   `JobSequence`, `Schedule`, `Assignment`
//! - **`validation`**: Instance and encoding integrity checks
//! - **`scheduler`**: Order simulation and schedule KPIs
//! - **`neighborhood`**: Critical path, blocks, and swap moves
//! - **`dispatching`**: Priority rules and the greedy dispatcher
//! - **`descent`**: Deadline-bounded local search
//!
//! # Example
//!
//! ```
//! use u_jobshop::descent::{DescentConfig, DescentRunner};
//! use u_jobshop::models::Instance;
//!
//! let instance = Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap();
//! let result = DescentRunner::solve(&instance, &DescentConfig::default()).unwrap();
//! assert_eq!(result.makespan(), 5);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the
//!   job shop problem"

pub mod descent;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod neighborhood;
pub mod scheduler;
pub mod validation;

pub use error::JobShopError;
