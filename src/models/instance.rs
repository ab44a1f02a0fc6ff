//! Problem instance and operation model.
//!
//! An instance is a set of jobs, each a fixed-order list of steps. Every
//! step occupies one machine exclusively for a fixed, non-negative
//! duration. Operations are referenced by value as `(job, step)` pairs.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::JobShopError;
use crate::validation::validate_instance;

/// One unit of work: step `step` of job `job`.
///
/// Ordered by job, then step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// Job index.
    pub job: usize,
    /// Position within the job (0-indexed).
    pub step: usize,
}

impl Operation {
    /// Creates an operation reference.
    pub fn new(job: usize, step: usize) -> Self {
        Self { job, step }
    }

    /// The preceding step of the same job, if any.
    pub fn job_predecessor(&self) -> Option<Operation> {
        self.step.checked_sub(1).map(|step| Self::new(self.job, step))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.job, self.step)
    }
}

/// Machine and processing time of one job step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Machine index.
    pub machine: usize,
    /// Processing time.
    pub duration: i64,
}

impl Step {
    /// Creates a step.
    pub fn new(machine: usize, duration: i64) -> Self {
        Self { machine, duration }
    }
}

/// An immutable job-shop instance.
///
/// Always structurally valid: every constructor (including
/// deserialization) runs [`validate_instance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstanceData", into = "InstanceData")]
pub struct Instance {
    num_machines: usize,
    jobs: Vec<Vec<Step>>,
}

#[derive(Serialize, Deserialize)]
struct InstanceData {
    num_machines: usize,
    jobs: Vec<Vec<Step>>,
}

impl TryFrom<InstanceData> for Instance {
    type Error = JobShopError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        Self::new(data.num_machines, data.jobs)
    }
}

impl From<Instance> for InstanceData {
    fn from(instance: Instance) -> Self {
        Self {
            num_machines: instance.num_machines,
            jobs: instance.jobs,
        }
    }
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// # Errors
    /// [`JobShopError::InvalidInstance`] listing every detected defect.
    pub fn new(num_machines: usize, jobs: Vec<Vec<Step>>) -> Result<Self, JobShopError> {
        validate_instance(num_machines, &jobs).map_err(JobShopError::InvalidInstance)?;
        Ok(Self { num_machines, jobs })
    }

    /// Creates an instance from `(machine, duration)` pairs per job.
    pub fn from_pairs(
        num_machines: usize,
        jobs: &[&[(usize, i64)]],
    ) -> Result<Self, JobShopError> {
        let jobs = jobs
            .iter()
            .map(|job| job.iter().map(|&(m, d)| Step::new(m, d)).collect())
            .collect();
        Self::new(num_machines, jobs)
    }

    /// Generates a random instance where every job visits every machine
    /// exactly once, in random order, with durations in `0..=max_duration`.
    ///
    /// # Reference
    /// Taillard (1993), "Benchmarks for basic scheduling problems"
    pub fn random<R: Rng>(
        num_jobs: usize,
        num_machines: usize,
        max_duration: i64,
        rng: &mut R,
    ) -> Result<Self, JobShopError> {
        let max_duration = max_duration.max(0);
        let mut jobs = Vec::with_capacity(num_jobs);
        for _ in 0..num_jobs {
            let mut machines: Vec<usize> = (0..num_machines).collect();
            machines.shuffle(rng);
            let job = machines
                .into_iter()
                .map(|m| Step::new(m, rng.random_range(0..=max_duration)))
                .collect();
            jobs.push(job);
        }
        Self::new(num_machines, jobs)
    }

    /// Number of jobs.
    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Number of steps in every job.
    pub fn num_tasks_per_job(&self) -> usize {
        self.jobs[0].len()
    }

    /// Total number of operations.
    pub fn num_operations(&self) -> usize {
        self.num_jobs() * self.num_tasks_per_job()
    }

    /// Machine required by `op`.
    ///
    /// # Panics
    /// If `op` is out of range.
    #[inline]
    pub fn machine_of(&self, op: Operation) -> usize {
        self.jobs[op.job][op.step].machine
    }

    /// Processing time of `op`.
    ///
    /// # Panics
    /// If `op` is out of range.
    #[inline]
    pub fn duration_of(&self, op: Operation) -> i64 {
        self.jobs[op.job][op.step].duration
    }

    /// Whether `op` names an existing operation.
    pub fn contains(&self, op: Operation) -> bool {
        op.job < self.num_jobs() && op.step < self.num_tasks_per_job()
    }

    /// Steps of one job.
    pub fn job(&self, job: usize) -> &[Step] {
        &self.jobs[job]
    }

    /// All operations, job-major.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        let steps = self.num_tasks_per_job();
        (0..self.num_jobs()).flat_map(move |j| (0..steps).map(move |s| Operation::new(j, s)))
    }

    /// Operations assigned to `machine`, job-major.
    pub fn operations_on(&self, machine: usize) -> Vec<Operation> {
        self.operations()
            .filter(|&op| self.machine_of(op) == machine)
            .collect()
    }

    /// Sum of durations of one job.
    pub fn job_duration(&self, job: usize) -> i64 {
        self.jobs[job].iter().map(|s| s.duration).sum()
    }

    /// Sum of durations of the steps from `op` to the end of its job.
    pub fn remaining_work(&self, op: Operation) -> i64 {
        self.jobs[op.job][op.step..].iter().map(|s| s.duration).sum()
    }

    /// Sum of durations assigned to `machine`.
    pub fn machine_load(&self, machine: usize) -> i64 {
        self.jobs
            .iter()
            .flatten()
            .filter(|s| s.machine == machine)
            .map(|s| s.duration)
            .sum()
    }

    /// Trivial makespan lower bound: the largest job length or machine load.
    pub fn lower_bound(&self) -> i64 {
        let jobs = (0..self.num_jobs()).map(|j| self.job_duration(j));
        let machines = (0..self.num_machines).map(|m| self.machine_load(m));
        jobs.chain(machines).max().unwrap_or(0)
    }
}
