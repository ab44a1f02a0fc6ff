//! Schedule simulation and KPI evaluation.
//!
//! Turns a [`MachineOrder`](crate::models::MachineOrder) into concrete
//! start and completion times, and measures the result.
//!
//! # Simulation
//!
//! `simulate` builds the semi-active schedule of an encoding: every
//! operation starts as soon as both its job predecessor and its machine
//! predecessor have completed.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, lower-bound gap, utilization, and
//! idle time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod simulate;

pub use kpi::ScheduleKpi;
pub use simulate::simulate;
