//! Descent execution engine.
//!
//! # Algorithm
//!
//! 1. Simulate the initial order.
//! 2. At each iteration:
//!    a. Stop if the deadline has passed
//!    b. Extract the critical path and its blocks (none: local optimum)
//!    c. Evaluate every boundary swap on its own copy of the order
//!    d. Adopt the best neighbor if it strictly improves the makespan,
//!    otherwise stop at a local optimum
//!
//! Ties between equally good neighbors go to the one generated first.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::config::DescentConfig;
use crate::dispatching::GreedyDispatcher;
use crate::error::{EncodingDefect, JobShopError};
use crate::models::{Instance, MachineOrder, Schedule};
use crate::neighborhood::{blocks_of, critical_path, neighbors, Swap};
use crate::scheduler::simulate;

/// Why a descent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitCause {
    /// No neighbor improves the incumbent.
    Converged,
    /// The deadline passed before convergence.
    TimedOut,
}

/// Result of a descent run.
#[derive(Debug, Clone)]
pub struct DescentResult {
    /// Best machine order found.
    pub order: MachineOrder,
    /// Schedule of `order`.
    pub schedule: Schedule,
    /// Why the run stopped.
    pub exit_cause: ExitCause,
    /// Iterations started before stopping.
    pub iterations: usize,
    /// Incumbent makespan at the start and after each accepted move.
    pub makespan_history: Vec<i64>,
}

impl DescentResult {
    /// Makespan of the returned schedule.
    pub fn makespan(&self) -> i64 {
        self.schedule.makespan()
    }
}

/// Outcome of scanning one neighborhood.
enum Scan {
    Improved(MachineOrder, Schedule),
    LocalOptimum,
    Interrupted,
}

/// Critical-block descent runner.
pub struct DescentRunner;

impl DescentRunner {
    /// Descends from `initial` until a local optimum or `deadline`.
    ///
    /// # Errors
    /// [`JobShopError::InvalidEncoding`] if `initial` is not a valid
    /// order for `instance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    /// use u_jobshop::descent::{DescentConfig, DescentRunner, ExitCause};
    /// use u_jobshop::models::{Instance, MachineOrder, Operation};
    ///
    /// let instance = Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap();
    /// let initial = MachineOrder::new(vec![
    ///     vec![Operation::new(0, 0), Operation::new(1, 1)],
    ///     vec![Operation::new(0, 1), Operation::new(1, 0)],
    /// ]);
    /// let deadline = Instant::now() + Duration::from_secs(5);
    /// let result = DescentRunner::improve(&instance, initial, deadline, &DescentConfig::default()).unwrap();
    /// assert_eq!(result.makespan(), 5);
    /// assert_eq!(result.exit_cause, ExitCause::Converged);
    /// ```
    pub fn improve(
        instance: &Instance,
        initial: MachineOrder,
        deadline: Instant,
        config: &DescentConfig,
    ) -> Result<DescentResult, JobShopError> {
        Self::descend(instance, initial, Some(deadline), config)
    }

    /// Descends from `initial` for at most `config.time_limit`.
    pub fn run(
        instance: &Instance,
        initial: MachineOrder,
        config: &DescentConfig,
    ) -> Result<DescentResult, JobShopError> {
        let deadline = Instant::now().checked_add(config.time_limit);
        Self::descend(instance, initial, deadline, config)
    }

    /// Builds an initial order with `config.initial_rule`, then descends.
    pub fn solve(instance: &Instance, config: &DescentConfig) -> Result<DescentResult, JobShopError> {
        let initial = GreedyDispatcher::new(config.initial_rule).dispatch_order(instance);
        Self::run(instance, initial, config)
    }

    /// `None` deadline: the time limit is too large to represent.
    fn descend(
        instance: &Instance,
        initial: MachineOrder,
        deadline: Option<Instant>,
        config: &DescentConfig,
    ) -> Result<DescentResult, JobShopError> {
        let expired = || deadline.is_some_and(|d| Instant::now() >= d);

        let mut order = initial;
        let mut schedule = simulate(instance, &order)?;
        let mut makespan_history = vec![schedule.makespan()];
        let mut iterations = 0;

        let exit_cause = loop {
            if expired() {
                break ExitCause::TimedOut;
            }
            iterations += 1;

            let path = critical_path(instance, &order, &schedule)?;
            let blocks = blocks_of(instance, &order, &path);
            let candidates: Vec<Swap> = blocks.iter().flat_map(neighbors).collect();

            debug!(
                iteration = iterations,
                makespan = schedule.makespan(),
                blocks = blocks.len(),
                candidates = candidates.len(),
                "descent iteration"
            );

            if candidates.is_empty() {
                break ExitCause::Converged;
            }

            let check = config.check_deadline_per_neighbor;
            match Self::scan(instance, &order, &schedule, &candidates, || check && expired())? {
                Scan::Improved(next_order, next_schedule) => {
                    order = next_order;
                    schedule = next_schedule;
                    makespan_history.push(schedule.makespan());
                }
                Scan::LocalOptimum => break ExitCause::Converged,
                Scan::Interrupted => break ExitCause::TimedOut,
            }
        };

        info!(
            cause = ?exit_cause,
            makespan = schedule.makespan(),
            iterations,
            "descent finished"
        );

        Ok(DescentResult {
            order,
            schedule,
            exit_cause,
            iterations,
            makespan_history,
        })
    }

    /// Evaluates every candidate on a fresh copy of `order` and returns
    /// the best one that beats the incumbent. Candidates whose order
    /// deadlocks are skipped.
    fn scan(
        instance: &Instance,
        order: &MachineOrder,
        schedule: &Schedule,
        candidates: &[Swap],
        interrupted: impl Fn() -> bool,
    ) -> Result<Scan, JobShopError> {
        let mut best: Option<(MachineOrder, Schedule)> = None;
        let mut best_makespan = schedule.makespan();

        for swap in candidates {
            if interrupted() {
                return Ok(Scan::Interrupted);
            }

            let neighbor = order.with_swap(swap);
            let neighbor_schedule = match simulate(instance, &neighbor) {
                Ok(schedule) => schedule,
                Err(JobShopError::InvalidEncoding {
                    defect: EncodingDefect::Cyclic(op),
                    ..
                }) => {
                    trace!(
                        machine = swap.machine,
                        first = swap.first,
                        second = swap.second,
                        blocked = %op,
                        "neighbor skipped: cyclic"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            let makespan = neighbor_schedule.makespan();
            trace!(
                machine = swap.machine,
                first = swap.first,
                second = swap.second,
                makespan,
                "neighbor evaluated"
            );

            if makespan < best_makespan {
                best_makespan = makespan;
                best = Some((neighbor, neighbor_schedule));
            }
        }

        Ok(match best {
            Some((order, schedule)) => Scan::Improved(order, schedule),
            None => Scan::LocalOptimum,
        })
    }
}
