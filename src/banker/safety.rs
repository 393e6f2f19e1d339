//! Banker's safety algorithm.
//!
//! # Algorithm
//!
//! 1. `work = available`, every process unfinished.
//! 2. Scan unfinished processes in index order; grant the first whose
//!    `need <= work`: `work += allocation[i]`, mark it finished, append it
//!    to the sequence.
//! 3. Repeat until all are finished (SAFE) or a full scan grants nothing
//!    (UNSAFE).
//!
//! [`ScanPolicy`] decides where scanning resumes after a grant. It changes
//! which safe sequence is reported, never the verdict.
//!
//! # Complexity
//! O(n^2 * m).
//!
//! # Reference
//! Dijkstra (1965), "Cooperating Sequential Processes"

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ResourceState;

/// Where the scan resumes after granting a process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPolicy {
    /// Start over from the lowest index.
    #[default]
    RestartAfterGrant,
    /// Keep going from the next index; start over only after a full pass.
    ContinueScan,
}

/// Outcome of a safety check. Both arms are normal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyVerdict {
    /// Every process can finish in `sequence` order.
    Safe {
        /// Process indices in grant order.
        sequence: Vec<usize>,
    },
    /// Some processes can never be granted.
    Unsafe {
        /// Indices left unfinished when scanning stalled.
        blocked: Vec<usize>,
    },
}

impl SafetyVerdict {
    /// Whether the state is safe.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }

    /// The safe sequence, if any.
    pub fn safe_sequence(&self) -> Option<&[usize]> {
        match self {
            Self::Safe { sequence } => Some(sequence),
            Self::Unsafe { .. } => None,
        }
    }
}

/// Renders a process index the way operators read it: `0 -> "P1"`.
pub fn process_label(index: usize) -> String {
    format!("P{}", index + 1)
}

impl fmt::Display for SafetyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe { sequence } => {
                let labels: Vec<String> = sequence.iter().map(|&i| process_label(i)).collect();
                write!(f, "SAFE: {}", labels.join(" -> "))
            }
            Self::Unsafe { .. } => write!(f, "UNSAFE"),
        }
    }
}

/// Runs the safety check.
///
/// # Example
///
/// ```
/// use u_cpusched::banker::{check_safety, ResourceState, ScanPolicy};
///
/// let state = ResourceState::new(
///     3,
///     2,
///     vec![vec![7, 5], vec![3, 2], vec![9, 0]],
///     vec![vec![0, 1], vec![2, 0], vec![3, 0]],
///     vec![5, 4],
/// )
/// .unwrap();
/// let verdict = check_safety(&state, ScanPolicy::RestartAfterGrant);
/// assert_eq!(verdict.safe_sequence(), Some(&[1, 0, 2][..]));
/// ```
pub fn check_safety(state: &ResourceState, policy: ScanPolicy) -> SafetyVerdict {
    let n = state.process_count();
    let mut work = state.available().to_vec();
    let mut finish = vec![false; n];
    let mut sequence = Vec::with_capacity(n);

    while sequence.len() < n {
        let mut granted = false;

        for i in 0..n {
            if finish[i] || !state.can_finish(i, &work) {
                continue;
            }
            state.release_into(i, &mut work);
            finish[i] = true;
            sequence.push(i);
            granted = true;
            debug!(process = %process_label(i), work = ?work, "grant");

            if policy == ScanPolicy::RestartAfterGrant {
                break;
            }
        }

        if !granted {
            let blocked: Vec<usize> = (0..n).filter(|&i| !finish[i]).collect();
            warn!(
                blocked = blocked.len(),
                granted = sequence.len(),
                "resource state is unsafe"
            );
            return SafetyVerdict::Unsafe { blocked };
        }
    }

    SafetyVerdict::Safe { sequence }
}
