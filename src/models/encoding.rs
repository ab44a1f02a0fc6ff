//! Solution encodings.
//!
//! # Machine order
//!
//! For each machine, the sequence in which it processes its operations.
//! This is the representation the simulator and the local search work on.
//! It is a plain owned value: every candidate move is applied to its own
//! clone, so the incumbent is never aliased.
//!
//! # Job sequence
//!
//! A permutation with repetition of job ids. The k-th occurrence of job
//! `j` denotes step `k` of `j`. Every job sequence decodes to a feasible
//! machine order.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Instance, Operation, Schedule};
use crate::error::JobShopError;
use crate::neighborhood::Swap;
use crate::validation::validate_encoding;

/// Per-machine processing order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineOrder {
    sequences: Vec<Vec<Operation>>,
}

impl MachineOrder {
    /// Wraps per-machine sequences without checking them.
    ///
    /// Use [`MachineOrder::validate`] or let [`crate::scheduler::simulate`]
    /// reject a malformed order.
    pub fn new(sequences: Vec<Vec<Operation>>) -> Self {
        Self { sequences }
    }

    /// Reconstructs the machine order realized by a schedule: each
    /// machine's operations sorted by start time, then completion time,
    /// then operation.
    pub fn from_schedule(instance: &Instance, schedule: &Schedule) -> Self {
        let sequences = (0..instance.num_machines())
            .map(|m| {
                let mut ops = instance.operations_on(m);
                ops.sort_by_key(|&op| (schedule.start(op), schedule.completion(op), op));
                ops
            })
            .collect();
        Self { sequences }
    }

    /// Checks that every operation appears exactly once on its own machine.
    pub fn validate(&self, instance: &Instance) -> Result<(), JobShopError> {
        validate_encoding(instance, self)
    }

    /// Number of machine sequences.
    pub fn num_machines(&self) -> usize {
        self.sequences.len()
    }

    /// All sequences, indexed by machine.
    pub fn sequences(&self) -> &[Vec<Operation>] {
        &self.sequences
    }

    /// Processing order of one machine.
    pub fn sequence(&self, machine: usize) -> &[Operation] {
        &self.sequences[machine]
    }

    /// Position of `op` in the sequence of `machine` (linear scan).
    pub fn position_of(&self, machine: usize, op: Operation) -> Option<usize> {
        self.sequences
            .get(machine)?
            .iter()
            .position(|&o| o == op)
    }

    /// Operation processed on the same machine immediately before `op`.
    pub fn machine_predecessor(&self, machine: usize, op: Operation) -> Option<Operation> {
        let pos = self.position_of(machine, op)?;
        pos.checked_sub(1).map(|p| self.sequences[machine][p])
    }

    /// Applies a swap in place.
    ///
    /// # Panics
    /// If the swap's machine or positions are out of range.
    pub fn apply(&mut self, swap: &Swap) {
        self.sequences[swap.machine].swap(swap.first, swap.second);
    }

    /// Returns a copy with `swap` applied; `self` is untouched.
    pub fn with_swap(&self, swap: &Swap) -> Self {
        let mut next = self.clone();
        next.apply(swap);
        next
    }
}

/// Job-repetition encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSequence {
    jobs: Vec<usize>,
}

impl JobSequence {
    /// Creates a job sequence, checking that each job appears exactly
    /// `num_tasks_per_job` times.
    pub fn new(instance: &Instance, jobs: Vec<usize>) -> Result<Self, JobShopError> {
        let mut counts = vec![0usize; instance.num_jobs()];
        for &j in &jobs {
            match counts.get_mut(j) {
                Some(c) => *c += 1,
                None => return Err(JobShopError::InvalidJobSequence(format!("unknown job {j}"))),
            }
        }
        let expected = instance.num_tasks_per_job();
        if let Some((j, &c)) = counts.iter().enumerate().find(|&(_, &c)| c != expected) {
            return Err(JobShopError::InvalidJobSequence(format!(
                "job {j} appears {c} times, expected {expected}"
            )));
        }
        Ok(Self { jobs })
    }

    /// Creates a random job sequence.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let mut jobs: Vec<usize> = (0..instance.num_jobs())
            .flat_map(|j| std::iter::repeat(j).take(instance.num_tasks_per_job()))
            .collect();
        jobs.shuffle(rng);
        Self { jobs }
    }

    /// Wraps a sequence produced by complete dispatching of an instance.
    pub(crate) fn from_dispatch(jobs: Vec<usize>) -> Self {
        Self { jobs }
    }

    /// Job ids in sequence order.
    pub fn jobs(&self) -> &[usize] {
        &self.jobs
    }

    /// Decodes into operations in sequence order.
    pub fn decode(&self) -> Vec<Operation> {
        let mut next_step: Vec<usize> = Vec::new();
        self.jobs
            .iter()
            .map(|&j| {
                if next_step.len() <= j {
                    next_step.resize(j + 1, 0);
                }
                let op = Operation::new(j, next_step[j]);
                next_step[j] += 1;
                op
            })
            .collect()
    }

    /// Appends every decoded operation to its machine's sequence.
    pub fn to_machine_order(&self, instance: &Instance) -> MachineOrder {
        let mut sequences = vec![Vec::new(); instance.num_machines()];
        for op in self.decode() {
            sequences[instance.machine_of(op)].push(op);
        }
        MachineOrder::new(sequences)
    }
}
