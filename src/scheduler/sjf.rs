//! Shortest Job First, non-preemptive and preemptive (SRTF).
//!
//! Non-preemptive mode ranks ready processes by `(burst, arrival)` and runs
//! the winner to completion. Preemptive mode ranks by
//! `(remaining, arrival)` and re-decides every tick.

use super::ready_set::simulate;
use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{ProcessDescriptor, ScheduleRun};

/// Shortest Job First scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{CpuScheduler, Sjf};
///
/// let procs = vec![
///     ProcessDescriptor::new("P1", 0, 8),
///     ProcessDescriptor::new("P2", 1, 4),
/// ];
/// let run = Sjf::preemptive().schedule(&procs);
/// assert_eq!(run.completion_time("P2"), Some(5));
/// assert_eq!(run.completion_time("P1"), Some(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sjf {
    preemptive: bool,
}

impl Sjf {
    /// Runs the shortest ready job to completion.
    pub fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    /// Shortest remaining time first, re-evaluated every tick.
    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }

    /// Whether this is the SRTF variant.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }

    fn engine(&self) -> RuleEngine {
        let engine = if self.preemptive {
            RuleEngine::new().with_rule(rules::ShortestRemaining)
        } else {
            RuleEngine::new().with_rule(rules::ShortestBurst)
        };
        engine.with_tie_breaker(rules::EarliestArrival)
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "SJF Preemptive"
        } else {
            "SJF Non-Preemptive"
        }
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleRun {
        simulate(self.name(), processes, &self.engine(), self.preemptive)
    }
}
