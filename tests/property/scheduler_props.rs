//! Timeline invariants that hold for every engine and every valid input.

use proptest::prelude::*;

use u_cpusched::models::{ProcessDescriptor, ScheduleRun};
use u_cpusched::scheduler::{CpuScheduler, Fcfs, Priority, RoundRobin, RunMetrics, Sjf};

fn process_set() -> impl Strategy<Value = Vec<ProcessDescriptor>> {
    prop::collection::vec((0i64..20, 1i64..10, 0i32..5), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessDescriptor::new(format!("P{}", i + 1), arrival, burst)
                    .with_priority(priority)
            })
            .collect()
    })
}

fn engines(quantum: i64) -> Vec<Box<dyn CpuScheduler>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf::non_preemptive()),
        Box::new(Sjf::preemptive()),
        Box::new(Priority::non_preemptive()),
        Box::new(Priority::preemptive()),
        Box::new(RoundRobin::new(quantum).unwrap()),
    ]
}

fn runs_to_completion(engine: &dyn CpuScheduler) -> bool {
    matches!(
        engine.name(),
        "FCFS" | "SJF Non-Preemptive" | "Priority Non-Preemptive"
    )
}

fn check_timeline(run: &ScheduleRun, input: &[ProcessDescriptor]) -> Result<(), TestCaseError> {
    let entries = &run.timeline.entries;
    for pair in entries.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "overlap in {}", run.algorithm);
    }
    for e in entries {
        prop_assert!(e.start < e.end);
    }

    prop_assert_eq!(run.processes.len(), input.len());
    for p in input {
        prop_assert_eq!(run.timeline.busy_time(&p.pid), p.burst);
        let done = run.process(&p.pid).unwrap();
        let start = done.start_time.unwrap();
        let completion = done.completion_time.unwrap();
        prop_assert!(start >= p.arrival);
        prop_assert!(completion - start >= p.burst);
        prop_assert_eq!(done.remaining, 0);
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_engine_serves_exact_bursts(procs in process_set(), quantum in 1i64..6) {
        for engine in engines(quantum) {
            let run = engine.run(&procs).unwrap();
            check_timeline(&run, &procs)?;
        }
    }

    #[test]
    fn run_to_completion_engines_dispatch_once(procs in process_set()) {
        for engine in engines(1) {
            if !runs_to_completion(engine.as_ref()) {
                continue;
            }
            let run = engine.run(&procs).unwrap();
            prop_assert_eq!(run.timeline.len(), procs.len());
            for p in &run.processes {
                let start = p.start_time.unwrap();
                prop_assert_eq!(p.completion_time.unwrap() - start, p.burst);
            }
        }
    }

    #[test]
    fn fcfs_starts_follow_arrival(procs in process_set()) {
        let run = Fcfs.run(&procs).unwrap();
        let arrivals: Vec<i64> = run
            .timeline
            .iter()
            .map(|e| run.process(&e.pid).unwrap().arrival)
            .collect();
        prop_assert!(arrivals.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn round_robin_wait_is_bounded(procs in process_set(), quantum in 1i64..6) {
        let run = RoundRobin::new(quantum).unwrap().run(&procs).unwrap();
        let metrics = RunMetrics::calculate(&run).unwrap();
        let others = procs.len().saturating_sub(1) as i64;
        for m in &metrics.processes {
            let rounds = (m.burst + quantum - 1) / quantum;
            prop_assert!(m.waiting <= others * quantum * rounds);
        }
    }

    #[test]
    fn round_robin_gap_between_dispatches_is_bounded(
        procs in process_set(),
        quantum in 1i64..6,
    ) {
        let run = RoundRobin::new(quantum).unwrap().run(&procs).unwrap();
        let Some(latest_arrival) = procs.iter().map(|p| p.arrival).max() else {
            return Ok(());
        };

        for p in &run.processes {
            let slices: Vec<_> = run
                .timeline
                .entries_for(&p.pid)
                .into_iter()
                .filter(|e| e.start >= latest_arrival)
                .collect();
            for pair in slices.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                // Everyone has arrived; count who still owes work at `prev.end`.
                let unfinished = run
                    .processes
                    .iter()
                    .filter(|q| q.completion_time.is_some_and(|c| c > prev.end))
                    .count() as i64;
                prop_assert!(
                    next.start - prev.end <= (unfinished - 1) * quantum,
                    "{} waited {} with {} unfinished, q={}",
                    p.pid,
                    next.start - prev.end,
                    unfinished,
                    quantum
                );
            }
        }
    }

    #[test]
    fn metrics_identities(procs in process_set()) {
        let run = Sjf::preemptive().run(&procs).unwrap();
        let metrics = RunMetrics::calculate(&run).unwrap();
        for m in &metrics.processes {
            prop_assert_eq!(m.turnaround, m.completion - m.arrival);
            prop_assert_eq!(m.waiting, m.turnaround - m.burst);
            prop_assert!(m.waiting >= 0);
            prop_assert!(m.response <= m.waiting);
        }
        prop_assert!(metrics.cpu_utilization <= 1.0 + 1e-9);
    }
}
