//! Single-processor scheduling engines and run metrics.
//!
//! Every engine implements [`CpuScheduler`]: it borrows the caller's
//! process slice, builds a fresh working set, and returns a
//! [`ScheduleRun`]. No state survives between calls, so one engine value
//! can serve many runs, including concurrent ones.
//!
//! # Engines
//!
//! | Engine | Selection | Preemption |
//! |--------|-----------|------------|
//! | [`Fcfs`] | arrival | none |
//! | [`Sjf`] | burst / remaining, then arrival | optional, per tick |
//! | [`Priority`] | priority, then arrival | optional, per tick |
//! | [`RoundRobin`] | FIFO queue | after each quantum |
//!
//! # Metrics
//!
//! [`RunMetrics`] derives turnaround, waiting, and response times plus their
//! averages from a completed run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod priority;
mod ready_set;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use metrics::{Averages, MetricsError, ProcessMetrics, RunMetrics};
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::models::{ProcessDescriptor, ScheduleRun};
use crate::validation::{validate_processes, ValidationError, ValidationResult};

/// A CPU scheduling policy.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SJF Preemptive").
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes`.
    ///
    /// Assumes the input passed [`CpuScheduler::validate`]; use
    /// [`CpuScheduler::run`] for unchecked input. Unvalidated input still
    /// terminates: a process with a non-positive burst completes at its
    /// first dispatch without occupying the processor.
    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleRun;

    /// Checks that `processes` is a valid input for this policy.
    fn validate(&self, processes: &[ProcessDescriptor]) -> ValidationResult {
        validate_processes(processes)
    }

    /// Validates, then simulates.
    fn run(&self, processes: &[ProcessDescriptor]) -> Result<ScheduleRun, Vec<ValidationError>> {
        self.validate(processes)?;
        Ok(self.schedule(processes))
    }
}
