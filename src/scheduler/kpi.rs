//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Lower Bound | max(longest job, most loaded machine) |
//! | Gap | (C_max - LB) / LB |
//! | Utilization | Machine busy time / C_max |
//! | Idle Time | Sum over machines of C_max - busy time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Trivial makespan lower bound of the instance.
    pub lower_bound: i64,
    /// Relative distance to the lower bound (0.0 = provably optimal).
    pub gap: f64,
    /// Per-machine utilization (0.0..1.0), indexed by machine.
    pub utilization_by_machine: Vec<f64>,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Total idle time summed over machines, measured up to the makespan.
    pub total_idle: i64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule of `instance`.
    pub fn calculate(instance: &Instance, schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let lower_bound = instance.lower_bound();

        let gap = if lower_bound > 0 {
            (makespan - lower_bound) as f64 / lower_bound as f64
        } else {
            0.0
        };

        let busy: Vec<i64> = (0..instance.num_machines())
            .map(|m| schedule.machine_busy(m))
            .collect();

        let utilization_by_machine: Vec<f64> = busy
            .iter()
            .map(|&b| {
                if makespan > 0 {
                    b as f64 / makespan as f64
                } else {
                    0.0
                }
            })
            .collect();

        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };

        let total_idle = busy.iter().map(|&b| makespan - b).sum();

        Self {
            makespan,
            lower_bound,
            gap,
            utilization_by_machine,
            avg_utilization,
            total_idle,
        }
    }

    /// Whether the makespan equals the lower bound.
    pub fn is_provably_optimal(&self) -> bool {
        self.makespan == self.lower_bound
    }
}
