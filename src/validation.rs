//! Input validation for scheduling and resource-safety problems.
//!
//! Checks structural integrity before any simulation starts. Detects:
//! - Duplicate process IDs
//! - Negative arrival times and non-positive bursts
//! - Non-positive Round Robin quanta
//! - Resource matrices with mismatched dimensions or negative entries
//! - Allocations exceeding the declared maximum demand
//! - Magnitudes whose simulation would overflow `i64` ticks or units
//!
//! Every check runs; the caller gets all problems at once.

use crate::models::ProcessDescriptor;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no (or negative) processor time.
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// A matrix or vector has the wrong shape.
    DimensionMismatch,
    /// A resource count is negative.
    NegativeResource,
    /// `allocation[i][j] > max[i][j]`, i.e. a negative need.
    AllocationExceedsMax,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
    /// Available plus every allocation of a resource does not fit in `i64`.
    ResourceOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate pids
/// 2. `arrival >= 0`
/// 3. `burst > 0`
/// 4. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value any engine can reach
///
/// An empty set is valid.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();
    let mut horizon = Some(0i64);

    for p in processes {
        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.pid, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.pid, p.burst),
            ));
        }

        horizon = horizon.and_then(|h| h.checked_add(p.burst.max(0)));
    }

    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0).max(0);
    if horizon.and_then(|h| h.checked_add(latest_arrival)).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst overflows the clock"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates Banker's algorithm input.
///
/// Checks:
/// 1. `max` and `allocation` are `n x m`, `available` has length `m`
/// 2. All entries are non-negative
/// 3. `allocation[i][j] <= max[i][j]` (need is never negative)
/// 4. `available[j] + sum_i allocation[i][j]` fits in `i64`, the most a
///    safety scan can accumulate
///
/// The need and overflow checks only run on rows whose shape is correct.
pub fn validate_resource_matrices(
    n: usize,
    m: usize,
    max: &[Vec<i64>],
    allocation: &[Vec<i64>],
    available: &[i64],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_matrix_shape("Max", max, n, m, &mut errors);
    check_matrix_shape("Allocation", allocation, n, m, &mut errors);
    if available.len() != m {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "Available has {} entries, expected {m}",
                available.len()
            ),
        ));
    }

    for (name, matrix) in [("Max", max), ("Allocation", allocation)] {
        for (i, row) in matrix.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if v < 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NegativeResource,
                        format!("{name}[{i}][{j}] is negative ({v})"),
                    ));
                }
            }
        }
    }
    for (j, &v) in available.iter().enumerate() {
        if v < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeResource,
                format!("Available[{j}] is negative ({v})"),
            ));
        }
    }

    for (i, (max_row, alloc_row)) in max.iter().zip(allocation).enumerate() {
        if max_row.len() != m || alloc_row.len() != m {
            continue;
        }
        for (j, (&mx, &al)) in max_row.iter().zip(alloc_row).enumerate() {
            if al > mx {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AllocationExceedsMax,
                    format!("P{} allocation {al} exceeds max {mx} for resource {j}", i + 1),
                ));
            }
        }
    }

    if available.len() == m {
        for (j, &free) in available.iter().enumerate() {
            let total = allocation
                .iter()
                .filter(|row| row.len() == m)
                .try_fold(free.max(0), |acc, row| acc.checked_add(row[j].max(0)));
            if total.is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ResourceOverflow,
                    format!("Resource {j}: available plus allocations overflows"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_matrix_shape(
    name: &str,
    matrix: &[Vec<i64>],
    n: usize,
    m: usize,
    errors: &mut Vec<ValidationError>,
) {
    if matrix.len() != n {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!("{name} has {} rows, expected {n}", matrix.len()),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != m {
            errors.push(ValidationError::new(
                ValidationErrorKind::DimensionMismatch,
                format!("{name} row {i} has {} columns, expected {m}", row.len()),
            ));
        }
    }
}
