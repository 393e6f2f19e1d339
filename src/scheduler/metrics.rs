//! Run metrics.
//!
//! Derives per-process timing figures and their averages from a completed
//! [`ScheduleRun`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | `completion - arrival` |
//! | Waiting | `turnaround - burst` |
//! | Response | `first dispatch - arrival` |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ScheduleRun;

/// Timing figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: String,
    /// Arrival tick.
    pub arrival: i64,
    /// Requested service.
    pub burst: i64,
    /// Completion tick.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
    /// `start - arrival`.
    pub response: i64,
}

/// Cross-process means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
}

/// Metrics for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Per-process figures, in run order.
    pub processes: Vec<ProcessMetrics>,
    /// Means over `processes`.
    pub averages: Averages,
    /// Latest completion tick.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the processor was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

/// Raised when a run is not actually complete.
///
/// A finished run always has start and completion times for every process,
/// so this points at a scheduler defect rather than bad caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The process never finished (or never started).
    IncompleteProcess {
        /// Offending process.
        pid: String,
    },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteProcess { pid } => {
                write!(f, "process '{pid}' has no completion time; run is incomplete")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

impl RunMetrics {
    /// Computes metrics for a completed run.
    ///
    /// An empty run yields no records and all-zero averages.
    ///
    /// # Errors
    /// [`MetricsError::IncompleteProcess`] if any process lacks a start or
    /// completion time.
    pub fn calculate(run: &ScheduleRun) -> Result<Self, MetricsError> {
        let mut processes = Vec::with_capacity(run.processes.len());

        for p in &run.processes {
            let (Some(start), Some(completion)) = (p.start_time, p.completion_time) else {
                return Err(MetricsError::IncompleteProcess { pid: p.pid.clone() });
            };
            let turnaround = completion - p.arrival;
            processes.push(ProcessMetrics {
                pid: p.pid.clone(),
                arrival: p.arrival,
                burst: p.burst,
                completion,
                turnaround,
                waiting: turnaround - p.burst,
                response: start - p.arrival,
            });
        }

        let averages = if processes.is_empty() {
            Averages::default()
        } else {
            let n = processes.len() as f64;
            // Summed as f64: individual figures fit in i64, their total may not.
            let sum = |f: fn(&ProcessMetrics) -> i64| {
                processes.iter().map(|m| f(m) as f64).sum::<f64>()
            };
            Averages {
                avg_waiting: sum(|m| m.waiting) / n,
                avg_turnaround: sum(|m| m.turnaround) / n,
                avg_response: sum(|m| m.response) / n,
            }
        };

        let makespan = run.makespan();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                run.timeline.total_busy_time() as f64 / makespan as f64,
                processes.len() as f64 / makespan as f64,
            )
        };

        Ok(Self {
            processes,
            averages,
            makespan,
            cpu_utilization,
            throughput,
        })
    }

    /// Finds the record for a process.
    pub fn get(&self, pid: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.pid == pid)
    }

    /// Number of per-process records.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether there are no per-process records.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
