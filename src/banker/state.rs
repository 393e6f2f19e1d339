//! Resource-allocation state.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_resource_matrices, ValidationError};

/// Raw Banker's input, as read from a caller or a JSON document.
///
/// Not yet validated; convert with [`BankerRequest::into_state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankerRequest {
    /// Number of processes.
    pub n: usize,
    /// Number of resource types.
    pub m: usize,
    /// Maximum demand, `n x m`.
    pub max: Vec<Vec<i64>>,
    /// Currently held units, `n x m`.
    pub allocation: Vec<Vec<i64>>,
    /// Free units per resource type, length `m`.
    pub available: Vec<i64>,
}

impl BankerRequest {
    /// Validates and builds the state.
    pub fn into_state(self) -> Result<ResourceState, Vec<ValidationError>> {
        ResourceState::new(self.n, self.m, self.max, self.allocation, self.available)
    }
}

/// A validated resource-allocation state.
///
/// Invariants (checked on construction): `max` and `allocation` are
/// `n x m`, `available` has `m` entries, nothing is negative, and
/// `need = max - allocation` is non-negative everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceState {
    n: usize,
    m: usize,
    max: Vec<Vec<i64>>,
    allocation: Vec<Vec<i64>>,
    need: Vec<Vec<i64>>,
    available: Vec<i64>,
}

impl ResourceState {
    /// Validates the matrices and derives `need`.
    pub fn new(
        n: usize,
        m: usize,
        max: Vec<Vec<i64>>,
        allocation: Vec<Vec<i64>>,
        available: Vec<i64>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_resource_matrices(n, m, &max, &allocation, &available)?;

        let need = max
            .iter()
            .zip(&allocation)
            .map(|(mx, al)| mx.iter().zip(al).map(|(x, a)| x - a).collect())
            .collect();

        Ok(Self {
            n,
            m,
            max,
            allocation,
            need,
            available,
        })
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.n
    }

    /// Number of resource types.
    pub fn resource_count(&self) -> usize {
        self.m
    }

    /// Maximum demand matrix.
    pub fn max(&self) -> &[Vec<i64>] {
        &self.max
    }

    /// Allocation matrix.
    pub fn allocation(&self) -> &[Vec<i64>] {
        &self.allocation
    }

    /// Outstanding demand, `max - allocation`.
    pub fn need(&self) -> &[Vec<i64>] {
        &self.need
    }

    /// Free units per resource type.
    pub fn available(&self) -> &[i64] {
        &self.available
    }

    /// Whether process `i` could run to completion with `work` free units.
    pub(crate) fn can_finish(&self, i: usize, work: &[i64]) -> bool {
        self.need[i].iter().zip(work).all(|(need, free)| need <= free)
    }

    /// Returns process `i`'s holdings to `work`.
    pub(crate) fn release_into(&self, i: usize, work: &mut [i64]) {
        for (free, held) in work.iter_mut().zip(&self.allocation[i]) {
            *free += held;
        }
    }

    /// Replays `sequence` and checks it witnesses a safe state.
    ///
    /// Each process must appear exactly once and satisfy
    /// `need <= available` at the moment it is granted.
    pub fn is_safe_sequence(&self, sequence: &[usize]) -> bool {
        if sequence.len() != self.n {
            return false;
        }
        let mut work = self.available.clone();
        let mut seen = vec![false; self.n];
        for &i in sequence {
            if i >= self.n || seen[i] || !self.can_finish(i, &work) {
                return false;
            }
            seen[i] = true;
            self.release_into(i, &mut work);
        }
        true
    }
}
