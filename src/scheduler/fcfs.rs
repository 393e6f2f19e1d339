//! First Come First Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Walk the list with a clock; if the clock is behind the next arrival,
//!    jump it forward (the idle gap is not recorded).
//! 3. Run each process for its whole burst.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use tracing::{debug, info};

use super::CpuScheduler;
use crate::models::{working_set, ProcessDescriptor, ScheduleRun};

/// Non-preemptive arrival-order scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleRun {
        let mut run = ScheduleRun::new(self.name());
        let mut procs = working_set(processes);
        let mut clock = 0;

        for p in &mut procs {
            clock = clock.max(p.arrival);
            let served = p.serve(clock, p.burst);
            debug!(pid = %p.pid, clock, served, "dispatch");
            run.timeline.push(p.pid.clone(), clock, clock + served);
            clock += served;
        }

        run.processes = procs;
        info!(
            algorithm = self.name(),
            processes = run.process_count(),
            makespan = run.makespan(),
            "run complete"
        );
        run
    }
}
