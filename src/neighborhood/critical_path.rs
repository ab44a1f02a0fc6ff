//! Critical-path extraction.
//!
//! # Algorithm
//!
//! Start at the lowest `(job, step)` finishing at the makespan and walk
//! backwards through tight predecessors: a predecessor is tight when its
//! completion equals the current start. The machine predecessor is tried
//! first, then the job predecessor. The walk stops at an operation
//! starting at time 0.
//!
//! In a semi-active schedule every operation with a positive start has at
//! least one tight predecessor, since its start is the maximum of exactly
//! those two completion times.

use crate::error::JobShopError;
use crate::models::{Instance, MachineOrder, Operation, Schedule};

/// Returns the zero-slack chain ending at the makespan, in execution order.
///
/// # Errors
/// [`JobShopError::InconsistentSchedule`] if `schedule` was not simulated
/// from `order` and an operation with a positive start has no tight
/// predecessor.
pub fn critical_path(
    instance: &Instance,
    order: &MachineOrder,
    schedule: &Schedule,
) -> Result<Vec<Operation>, JobShopError> {
    let Some(mut current) = schedule.last_operation() else {
        return Ok(Vec::new());
    };

    let mut path = vec![current];

    loop {
        let start = schedule.start(current);
        if start == 0 {
            break;
        }

        let machine = instance.machine_of(current);
        let tight = |pred: &Operation| schedule.completion(*pred) == start;

        let next = order
            .machine_predecessor(machine, current)
            .filter(tight)
            .or_else(|| current.job_predecessor().filter(tight))
            .ok_or(JobShopError::InconsistentSchedule { operation: current })?;

        path.push(next);
        current = next;
    }

    path.reverse();
    Ok(path)
}
