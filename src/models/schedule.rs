//! Schedule (solution) model.
//!
//! A schedule fixes the start and completion time of every operation.
//! It is produced by [`crate::scheduler::simulate`] and is read-only
//! afterwards: changing the encoding means simulating again.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::Operation;

/// Time slot of one operation on its machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Scheduled operation.
    pub operation: Operation,
    /// Machine processing it.
    pub machine: usize,
    /// Start time.
    pub start: i64,
    /// Completion time.
    pub end: i64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(operation: Operation, machine: usize, start: i64, end: i64) -> Self {
        Self {
            operation,
            machine,
            start,
            end,
        }
    }

    /// Processing time (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments indexed by `[job][step]`.
    jobs: Vec<Vec<Assignment>>,
    makespan: i64,
}

impl Schedule {
    /// Builds a schedule from per-job assignment lists.
    pub(crate) fn from_jobs(jobs: Vec<Vec<Assignment>>) -> Self {
        let makespan = jobs.iter().flatten().map(|a| a.end).max().unwrap_or(0);
        Self { jobs, makespan }
    }

    /// Latest completion time.
    #[inline]
    pub fn makespan(&self) -> i64 {
        self.makespan
    }

    /// Assignment of `op`.
    ///
    /// # Panics
    /// If `op` is not part of the scheduled instance.
    #[inline]
    pub fn assignment(&self, op: Operation) -> &Assignment {
        &self.jobs[op.job][op.step]
    }

    /// Start time of `op`.
    #[inline]
    pub fn start(&self, op: Operation) -> i64 {
        self.assignment(op).start
    }

    /// Completion time of `op`.
    #[inline]
    pub fn completion(&self, op: Operation) -> i64 {
        self.assignment(op).end
    }

    /// All assignments, job-major.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.jobs.iter().flatten()
    }

    /// Assignments on one machine, by start time.
    pub fn assignments_for_machine(&self, machine: usize) -> Vec<&Assignment> {
        let mut on_machine: Vec<&Assignment> = self
            .assignments()
            .filter(|a| a.machine == machine)
            .collect();
        on_machine.sort_by_key(|a| (a.start, a.end, a.operation));
        on_machine
    }

    /// Completion time of a job's last step.
    pub fn job_completion(&self, job: usize) -> Option<i64> {
        self.jobs.get(job)?.last().map(|a| a.end)
    }

    /// Total processing time on one machine.
    pub fn machine_busy(&self, machine: usize) -> i64 {
        self.assignments()
            .filter(|a| a.machine == machine)
            .map(Assignment::duration)
            .sum()
    }

    /// The earliest-numbered operation finishing at the makespan.
    pub fn last_operation(&self) -> Option<Operation> {
        self.assignments()
            .filter(|a| a.end == self.makespan)
            .map(|a| a.operation)
            .min()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.jobs.iter().map(Vec::len).sum()
    }
}
