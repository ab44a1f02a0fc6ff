//! Structural validation of instances and machine orders.
//!
//! Instance checks collect every defect found, so a caller can fix an
//! input in one pass:
//! - At least one machine and one job
//! - No empty jobs, all jobs of equal length
//! - Machine references in range
//! - Non-negative durations whose total fits in `i64`
//! - No job visiting the same machine twice
//!
//! Machine-order checks stop at the first defect and report it as
//! [`JobShopError::InvalidEncoding`].

use crate::error::{EncodingDefect, JobShopError};
use crate::models::{Instance, MachineOrder, Operation, Step};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of instance validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance declares zero machines.
    NoMachines,
    /// The instance has no jobs.
    NoJobs,
    /// A job has no steps.
    EmptyJob,
    /// Jobs have different numbers of steps.
    RaggedJobs,
    /// A step references a machine outside `0..num_machines`.
    InvalidMachine,
    /// A step has a negative duration.
    NegativeDuration,
    /// A job visits one machine more than once.
    RepeatedMachine,
    /// The sum of all durations exceeds `i64::MAX`.
    DurationOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw instance data.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(num_machines: usize, jobs: &[Vec<Step>]) -> ValidationResult {
    let mut errors = Vec::new();

    if num_machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "Instance has no machines",
        ));
    }
    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoJobs,
            "Instance has no jobs",
        ));
    }

    let expected_len = jobs.first().map(Vec::len).unwrap_or(0);
    // Every completion time is bounded by this total.
    let mut total: Option<i64> = Some(0);

    for (j, job) in jobs.iter().enumerate() {
        if job.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("Job {j} has no operations"),
            ));
        } else if job.len() != expected_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedJobs,
                format!(
                    "Job {j} has {} operations, expected {expected_len}",
                    job.len()
                ),
            ));
        }

        let mut visited = vec![false; num_machines];
        for (s, step) in job.iter().enumerate() {
            if step.duration < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!("Operation ({j}, {s}) has negative duration {}", step.duration),
                ));
            } else {
                total = total.and_then(|t| t.checked_add(step.duration));
            }
            match visited.get_mut(step.machine) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidMachine,
                    format!(
                        "Operation ({j}, {s}) references unknown machine {}",
                        step.machine
                    ),
                )),
                Some(seen) if *seen => errors.push(ValidationError::new(
                    ValidationErrorKind::RepeatedMachine,
                    format!("Job {j} visits machine {} more than once", step.machine),
                )),
                Some(seen) => *seen = true,
            }
        }
    }

    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOverflow,
            "Total processing time exceeds i64::MAX",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that `order` holds every operation of `instance` exactly once,
/// each in the sequence of its own machine.
///
/// Feasibility (absence of deadlock between job and machine orders) is
/// not checked here; the simulator detects it.
pub fn validate_encoding(instance: &Instance, order: &MachineOrder) -> Result<(), JobShopError> {
    if order.num_machines() != instance.num_machines() {
        return Err(JobShopError::InvalidEncoding {
            machine: order.num_machines().min(instance.num_machines()),
            defect: EncodingDefect::MachineCount {
                expected: instance.num_machines(),
                found: order.num_machines(),
            },
        });
    }

    let steps = instance.num_tasks_per_job();
    let mut seen = vec![false; instance.num_operations()];

    for (machine, sequence) in order.sequences().iter().enumerate() {
        for &op in sequence {
            if !instance.contains(op) || instance.machine_of(op) != machine {
                return Err(JobShopError::InvalidEncoding {
                    machine,
                    defect: EncodingDefect::Foreign(op),
                });
            }
            let slot = &mut seen[op.job * steps + op.step];
            if *slot {
                return Err(JobShopError::InvalidEncoding {
                    machine,
                    defect: EncodingDefect::Duplicate(op),
                });
            }
            *slot = true;
        }
    }

    if let Some(idx) = seen.iter().position(|&s| !s) {
        let op = Operation::new(idx / steps, idx % steps);
        return Err(JobShopError::InvalidEncoding {
            machine: instance.machine_of(op),
            defect: EncodingDefect::Missing(op),
        });
    }

    Ok(())
}
