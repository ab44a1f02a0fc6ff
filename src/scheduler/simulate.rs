//! List-scheduling simulator.
//!
//! # Algorithm
//!
//! 1. Keep a cursor per job (next unscheduled step) and per machine
//!    (next position in its sequence), each with a ready time.
//! 2. Sweep machines in index order. While a machine's head operation is
//!    also its job's head, start it at `max(job ready, machine ready)`
//!    and advance both cursors.
//! 3. Repeat sweeps until every operation is retired. A sweep that
//!    retires nothing means the machine orders contradict the job orders.
//!
//! Every operation starts as early as the two orders allow (semi-active
//! schedule).
//!
//! # Complexity
//! O(n * m) where n = operations, m = machines.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 7.1: Disjunctive Programming

use crate::error::{EncodingDefect, JobShopError};
use crate::models::{Assignment, Instance, MachineOrder, Operation, Schedule};
use crate::validation::validate_encoding;

/// Computes the semi-active schedule realized by `order`.
///
/// Deterministic. Never returns a partial schedule.
///
/// # Errors
/// [`JobShopError::InvalidEncoding`] when a machine sequence omits,
/// duplicates, or misplaces an operation, or when the orders deadlock.
pub fn simulate(instance: &Instance, order: &MachineOrder) -> Result<Schedule, JobShopError> {
    validate_encoding(instance, order)?;

    let num_jobs = instance.num_jobs();
    let num_machines = instance.num_machines();
    let steps = instance.num_tasks_per_job();

    let mut job_cursor = vec![0usize; num_jobs];
    let mut job_ready = vec![0i64; num_jobs];
    let mut machine_cursor = vec![0usize; num_machines];
    let mut machine_ready = vec![0i64; num_machines];

    let mut jobs: Vec<Vec<Assignment>> = (0..num_jobs).map(|_| Vec::with_capacity(steps)).collect();
    let total = instance.num_operations();
    let mut retired = 0;

    while retired < total {
        let mut progressed = false;

        for machine in 0..num_machines {
            let sequence = order.sequence(machine);
            while let Some(&op) = sequence.get(machine_cursor[machine]) {
                if job_cursor[op.job] != op.step {
                    break;
                }
                let start = job_ready[op.job].max(machine_ready[machine]);
                let end = start + instance.duration_of(op);
                jobs[op.job].push(Assignment::new(op, machine, start, end));

                job_cursor[op.job] += 1;
                job_ready[op.job] = end;
                machine_cursor[machine] += 1;
                machine_ready[machine] = end;
                retired += 1;
                progressed = true;
            }
        }

        if !progressed {
            let (machine, op) = blocked_head(order, &machine_cursor);
            return Err(JobShopError::InvalidEncoding {
                machine,
                defect: EncodingDefect::Cyclic(op),
            });
        }
    }

    Ok(Schedule::from_jobs(jobs))
}

/// First machine whose sequence is not exhausted, with its stuck head.
fn blocked_head(order: &MachineOrder, machine_cursor: &[usize]) -> (usize, Operation) {
    order
        .sequences()
        .iter()
        .enumerate()
        .find_map(|(m, seq)| seq.get(machine_cursor[m]).map(|&op| (m, op)))
        .unwrap_or((0, Operation::new(0, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(job: usize, step: usize) -> Operation {
        Operation::new(job, step)
    }

    /// job0 = [(M0,3),(M1,2)], job1 = [(M1,2),(M0,2)]
    fn two_by_two() -> Instance {
        Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap()
    }

    #[test]
    fn test_job0_first_on_both_machines() {
        let inst = two_by_two();
        let order = MachineOrder::new(vec![vec![op(0, 0), op(1, 1)], vec![op(0, 1), op(1, 0)]]);

        let s = simulate(&inst, &order).unwrap();
        // M0: (0,0) 0-3, (1,1) 7-9; M1: (0,1) 3-5, (1,0) 5-7
        assert_eq!((s.start(op(0, 0)), s.completion(op(0, 0))), (0, 3));
        assert_eq!((s.start(op(0, 1)), s.completion(op(0, 1))), (3, 5));
        assert_eq!((s.start(op(1, 0)), s.completion(op(1, 0))), (5, 7));
        assert_eq!((s.start(op(1, 1)), s.completion(op(1, 1))), (7, 9));
        assert_eq!(s.makespan(), 9);
    }

    #[test]
    fn test_job1_first_on_m1() {
        let inst = two_by_two();
        let order = MachineOrder::new(vec![vec![op(0, 0), op(1, 1)], vec![op(1, 0), op(0, 1)]]);

        let s = simulate(&inst, &order).unwrap();
        assert_eq!(s.start(op(1, 0)), 0);
        assert_eq!(s.start(op(0, 1)), 3);
        assert_eq!(s.start(op(1, 1)), 3);
        assert_eq!(s.makespan(), 5);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let inst = two_by_two();
        let order = MachineOrder::new(vec![vec![op(1, 1), op(0, 0)], vec![op(1, 0), op(0, 1)]]);
        let a = simulate(&inst, &order).unwrap();
        let b = simulate(&inst, &order).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_duration_operations() {
        let inst = Instance::from_pairs(2, &[&[(0, 0), (1, 4)], &[(1, 0), (0, 0)]]).unwrap();
        let order = MachineOrder::new(vec![vec![op(0, 0), op(1, 1)], vec![op(1, 0), op(0, 1)]]);
        let s = simulate(&inst, &order).unwrap();
        assert_eq!(s.start(op(0, 1)), 0);
        assert_eq!(s.makespan(), 4);
    }

    #[test]
    fn test_deadlocked_order_rejected() {
        // M0 wants (1,1) before (0,0); M1 wants (0,1) before (1,0).
        // (1,1) needs (1,0), which needs (0,1), which needs (0,0).
        let inst = two_by_two();
        let order = MachineOrder::new(vec![vec![op(1, 1), op(0, 0)], vec![op(0, 1), op(1, 0)]]);
        let err = simulate(&inst, &order).unwrap_err();
        assert_eq!(
            err,
            JobShopError::InvalidEncoding {
                machine: 0,
                defect: EncodingDefect::Cyclic(op(1, 1)),
            }
        );
    }

    #[test]
    fn test_missing_operation_rejected() {
        let inst = two_by_two();
        let order = MachineOrder::new(vec![vec![op(0, 0)], vec![op(0, 1), op(1, 0)]]);
        assert!(matches!(
            simulate(&inst, &order),
            Err(JobShopError::InvalidEncoding {
                machine: 0,
                defect: EncodingDefect::Missing(_),
            })
        ));
    }

    #[test]
    fn test_single_machine_is_sequential() {
        let inst = Instance::from_pairs(1, &[&[(0, 4)], &[(0, 1)], &[(0, 2)]]).unwrap();
        let order = MachineOrder::new(vec![vec![op(2, 0), op(0, 0), op(1, 0)]]);
        let s = simulate(&inst, &order).unwrap();
        assert_eq!(s.start(op(2, 0)), 0);
        assert_eq!(s.start(op(0, 0)), 2);
        assert_eq!(s.start(op(1, 0)), 6);
        assert_eq!(s.makespan(), 7);
    }
}
