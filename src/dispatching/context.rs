//! Dispatching state passed to priority rules.

use crate::models::{Instance, Operation};

/// Partial schedule built so far by a greedy dispatcher.
///
/// Tracks, per job, the next unscheduled step and when the job becomes
/// ready, and per machine, when it becomes free.
#[derive(Debug, Clone)]
pub struct DispatchContext<'a> {
    instance: &'a Instance,
    next_step: Vec<usize>,
    job_ready: Vec<i64>,
    machine_free: Vec<i64>,
}

impl<'a> DispatchContext<'a> {
    /// Creates an empty context: nothing scheduled, everything free at 0.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            next_step: vec![0; instance.num_jobs()],
            job_ready: vec![0; instance.num_jobs()],
            machine_free: vec![0; instance.num_machines()],
        }
    }

    /// The instance being dispatched.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Next unscheduled step of every unfinished job, by job index.
    pub fn candidates(&self) -> impl Iterator<Item = Operation> + '_ {
        let steps = self.instance.num_tasks_per_job();
        self.next_step
            .iter()
            .enumerate()
            .filter(move |&(_, &step)| step < steps)
            .map(|(job, &step)| Operation::new(job, step))
    }

    /// Whether every operation has been dispatched.
    pub fn is_complete(&self) -> bool {
        self.candidates().next().is_none()
    }

    /// Earliest time `op` could start given what is already dispatched.
    pub fn earliest_start(&self, op: Operation) -> i64 {
        self.job_ready[op.job].max(self.machine_free[self.instance.machine_of(op)])
    }

    /// Time at which `machine` becomes free.
    pub fn machine_free(&self, machine: usize) -> i64 {
        self.machine_free[machine]
    }

    /// Dispatches `op` at its earliest start and returns its completion.
    ///
    /// `op` must be a current candidate.
    pub fn commit(&mut self, op: Operation) -> i64 {
        debug_assert_eq!(self.next_step[op.job], op.step);
        let end = self.earliest_start(op) + self.instance.duration_of(op);
        self.job_ready[op.job] = end;
        self.machine_free[self.instance.machine_of(op)] = end;
        self.next_step[op.job] += 1;
        end
    }
}
