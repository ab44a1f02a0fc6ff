//! Greedy dispatcher.
//!
//! # Algorithm
//!
//! 1. Candidates are the next unscheduled step of every unfinished job.
//! 2. For EST rules, keep only candidates whose machine becomes free
//!    earliest. The job's ready time is not considered.
//! 3. Pick the candidate with the lowest rule score; ties go to the
//!    lowest job index.
//! 4. Dispatch it at its earliest start and repeat until all jobs finish.
//!
//! The two-stage selection in step 2-3 keeps the choice a total order.
//!
//! # Reference
//! Giffler & Thompson (1960), "Algorithms for Solving
//! Production-Scheduling Problems", *Operations Research* 8(4), 487-503.

use tracing::debug;

use super::{DispatchContext, PriorityRule};
use crate::models::{Instance, JobSequence, MachineOrder, Operation};

/// Builds an initial feasible solution by greedy priority dispatching.
///
/// The rule is an explicit value; dispatchers hold no shared state and
/// can run concurrently.
///
/// # Example
/// ```
/// use u_jobshop::dispatching::{GreedyDispatcher, PriorityRule};
/// use u_jobshop::models::Instance;
///
/// let instance = Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap();
/// let order = GreedyDispatcher::new(PriorityRule::EstSpt).dispatch_order(&instance);
/// assert_eq!(order.num_machines(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyDispatcher {
    rule: PriorityRule,
}

impl GreedyDispatcher {
    /// Creates a dispatcher for `rule`.
    pub fn new(rule: PriorityRule) -> Self {
        Self { rule }
    }

    /// The rule in use.
    pub fn rule(&self) -> PriorityRule {
        self.rule
    }

    /// Dispatches every operation and returns the dispatch order as a
    /// job sequence.
    pub fn dispatch(&self, instance: &Instance) -> JobSequence {
        let mut context = DispatchContext::new(instance);
        let mut jobs = Vec::with_capacity(instance.num_operations());
        let mut makespan = 0;

        while let Some(op) = self.select(&context) {
            makespan = makespan.max(context.commit(op));
            jobs.push(op.job);
        }

        debug!(rule = %self.rule, makespan, "greedy dispatch complete");
        JobSequence::from_dispatch(jobs)
    }

    /// Dispatches every operation and returns the resulting machine order.
    pub fn dispatch_order(&self, instance: &Instance) -> MachineOrder {
        self.dispatch(instance).to_machine_order(instance)
    }

    /// Chooses the next operation to dispatch, or `None` when done.
    pub fn select(&self, context: &DispatchContext<'_>) -> Option<Operation> {
        let candidates: Vec<Operation> = context.candidates().collect();

        let pool = if self.rule.is_est_restricted() {
            let instance = context.instance();
            let free = |op: Operation| context.machine_free(instance.machine_of(op));
            let earliest = candidates.iter().map(|&op| free(op)).min()?;
            candidates
                .into_iter()
                .filter(|&op| free(op) == earliest)
                .collect()
        } else {
            candidates
        };

        pool.into_iter()
            .min_by_key(|&op| (self.rule.evaluate(op, context), op.job))
    }
}
