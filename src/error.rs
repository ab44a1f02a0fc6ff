//! Error types.
//!
//! Structural defects in caller-supplied instances and encodings are
//! reported here and never repaired. Running out of neighbors or out of
//! time is not an error: see [`crate::descent::ExitCause`].

use thiserror::Error;

use crate::models::Operation;
use crate::validation::ValidationError;

/// Errors raised by the job-shop engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobShopError {
    /// The instance failed structural validation.
    #[error("invalid instance: {}", summarize(.0))]
    InvalidInstance(Vec<ValidationError>),

    /// A machine order does not describe a schedulable encoding.
    #[error("invalid encoding on machine {machine}: {defect}")]
    InvalidEncoding {
        /// Machine whose sequence is defective.
        machine: usize,
        /// What is wrong with it.
        defect: EncodingDefect,
    },

    /// A schedule does not belong to the machine order it was paired with.
    #[error("schedule inconsistent with encoding: {operation} has no tight predecessor")]
    InconsistentSchedule {
        /// Operation at which the backward trace got stuck.
        operation: Operation,
    },

    /// A job sequence does not repeat every job the right number of times.
    #[error("invalid job sequence: {0}")]
    InvalidJobSequence(String),

    /// Unrecognized priority rule name.
    #[error("unknown priority rule '{0}'")]
    UnknownRule(String),
}

/// Kinds of machine-order defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingDefect {
    /// The order has a different number of machines than the instance.
    #[error("expected {expected} machine sequences, found {found}")]
    MachineCount { expected: usize, found: usize },
    /// An operation assigned to the machine is absent.
    #[error("operation {0} is missing")]
    Missing(Operation),
    /// An operation appears more than once.
    #[error("operation {0} appears more than once")]
    Duplicate(Operation),
    /// An operation belongs to another machine or does not exist.
    #[error("operation {0} does not belong to this machine")]
    Foreign(Operation),
    /// Machine order contradicts job order; no operation can be started.
    #[error("machine order deadlocks at {0}")]
    Cyclic(Operation),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
