//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit arrivals (`arrival <= clock`) to the back of a FIFO queue.
//! 2. Empty queue: jump the clock to the next arrival and admit.
//! 3. Dispatch the head for `min(quantum, remaining)` ticks.
//! 4. Admit processes that arrived during the slice, then re-queue the
//!    dispatched process if it still has work.
//!
//! Step 4's order means newcomers queue ahead of the process returning
//! from its slice.

use std::collections::VecDeque;

use tracing::{debug, info};

use super::CpuScheduler;
use crate::models::{working_set, ProcessDescriptor, ScheduleRun};
use crate::validation::{validate_quantum, ValidationError};

/// Round Robin scheduler.
///
/// The quantum is checked on construction, so a `RoundRobin` value always
/// makes progress.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobin};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let run = rr.schedule(&[ProcessDescriptor::new("P1", 0, 5)]);
/// assert_eq!(run.timeline.len(), 3);
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum (must be positive).
    pub fn new(quantum: i64) -> Result<Self, Vec<ValidationError>> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Time slice per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

fn admit_arrivals(
    procs: &[ProcessDescriptor],
    clock: i64,
    next: &mut usize,
    queue: &mut VecDeque<usize>,
) {
    while *next < procs.len() && procs[*next].has_arrived(clock) {
        queue.push_back(*next);
        *next += 1;
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleRun {
        let mut run = ScheduleRun::new(self.name());
        let mut procs = working_set(processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(procs.len());
        let mut next = 0;
        let mut clock = 0;

        loop {
            admit_arrivals(&procs, clock, &mut next, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match procs.get(next) {
                    Some(p) => {
                        clock = clock.max(p.arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let p = &mut procs[idx];
            let served = p.serve(clock, self.quantum);
            debug!(pid = %p.pid, clock, served, remaining = p.remaining, "dispatch");
            run.timeline.push(p.pid.clone(), clock, clock + served);
            clock += served;
            let unfinished = !p.is_finished();

            admit_arrivals(&procs, clock, &mut next, &mut queue);
            if unfinished {
                queue.push_back(idx);
            }
        }

        run.processes = procs;
        info!(
            algorithm = self.name(),
            quantum = self.quantum,
            processes = run.process_count(),
            makespan = run.makespan(),
            "run complete"
        );
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    #[test]
    fn test_rr_newcomers_before_returning_process() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
            ProcessDescriptor::new("P3", 2, 1),
        ];
        let run = RoundRobin::new(2).unwrap().schedule(&procs);
        assert_eq!(
            run.timeline.entries,
            vec![
                TimelineEntry::new("P1", 0, 2),
                TimelineEntry::new("P2", 2, 4),
                TimelineEntry::new("P3", 4, 5),
                TimelineEntry::new("P1", 5, 7),
                TimelineEntry::new("P2", 7, 8),
                TimelineEntry::new("P1", 8, 9),
            ]
        );
        assert_eq!(run.completion_time("P1"), Some(9));
        assert_eq!(run.completion_time("P2"), Some(8));
        assert_eq!(run.completion_time("P3"), Some(5));
    }

    #[test]
    fn test_rr_arrival_at_slice_end_queues_first() {
        // P2 arrives exactly when P1's slice ends.
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 4),
            ProcessDescriptor::new("P2", 2, 2),
        ];
        let run = RoundRobin::new(2).unwrap().schedule(&procs);
        let order: Vec<&str> = run.timeline.iter().map(|e| e.pid.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2", "P1"]);
    }

    #[test]
    fn test_rr_idle_gap() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 2),
            ProcessDescriptor::new("P2", 5, 3),
        ];
        let run = RoundRobin::new(2).unwrap().schedule(&procs);
        assert_eq!(
            run.timeline.entries,
            vec![
                TimelineEntry::new("P1", 0, 2),
                TimelineEntry::new("P2", 5, 7),
                TimelineEntry::new("P2", 7, 8),
            ]
        );
        assert_eq!(run.process("P2").unwrap().start_time, Some(5));
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let procs = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
            ProcessDescriptor::new("P3", 2, 8),
        ];
        let rr = RoundRobin::new(100).unwrap().schedule(&procs);
        let fcfs = crate::scheduler::Fcfs.schedule(&procs);
        assert_eq!(rr.timeline, fcfs.timeline);
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        assert!(RoundRobin::new(0).is_err());
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::new(3).unwrap().quantum(), 3);
    }
}
