//! Ready-set simulation loop shared by SJF and Priority scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival is at or before the clock.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Otherwise pick the best ready process with the rule engine and run it:
//!    to completion (non-preemptive) or for one tick (preemptive).
//!
//! Preemptive runs emit one timeline entry per tick; callers wanting
//! contiguous bars use [`Timeline::merged`](crate::models::Timeline::merged).
//!
//! # Complexity
//! Non-preemptive: O(n^2) selections. Preemptive: O(B * n) where B is the
//! total burst.

use tracing::{debug, info};

use crate::dispatching::RuleEngine;
use crate::models::{working_set, ProcessDescriptor, ScheduleRun};

/// Simulates a ready-set policy.
pub(crate) fn simulate(
    name: &str,
    processes: &[ProcessDescriptor],
    engine: &RuleEngine,
    preemptive: bool,
) -> ScheduleRun {
    let mut run = ScheduleRun::new(name);
    let mut procs = working_set(processes);
    let mut ready: Vec<usize> = Vec::new();
    let mut next = 0;
    let mut finished = 0;
    let mut clock = 0;
    let mut last_dispatched: Option<usize> = None;

    while finished < procs.len() {
        while next < procs.len() && procs[next].has_arrived(clock) {
            ready.push(next);
            next += 1;
        }

        let Some(idx) = engine.select_best(&procs, &ready) else {
            match procs.get(next) {
                Some(p) => {
                    clock = clock.max(p.arrival);
                    continue;
                }
                None => break,
            }
        };

        let p = &mut procs[idx];
        let slice = if preemptive { 1 } else { p.remaining };
        let served = p.serve(clock, slice);
        if last_dispatched != Some(idx) {
            debug!(pid = %p.pid, clock, remaining = p.remaining, "dispatch");
            last_dispatched = Some(idx);
        }
        run.timeline.push(p.pid.clone(), clock, clock + served);
        clock += served;

        if p.is_finished() {
            ready.retain(|&i| i != idx);
            finished += 1;
        }
    }

    run.processes = procs;
    info!(
        algorithm = name,
        processes = run.process_count(),
        makespan = run.makespan(),
        "run complete"
    );
    run
}
