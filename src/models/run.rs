//! Schedule run (simulation result) model.

use serde::{Deserialize, Serialize};

use super::{ProcessDescriptor, Timeline};

/// Outcome of one scheduling run.
///
/// Holds the execution timeline and the completed working copies of the
/// processes, in the order the engine admitted them (arrival, then input
/// order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Name of the policy that produced this run.
    pub algorithm: String,
    /// Execution intervals.
    pub timeline: Timeline,
    /// Completed process records.
    pub processes: Vec<ProcessDescriptor>,
}

impl ScheduleRun {
    /// Creates an empty run for the named policy.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    /// Finds the record for a process.
    pub fn process(&self, pid: &str) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Completion tick of a process, if it finished.
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.process(pid).and_then(|p| p.completion_time)
    }

    /// Whether every process finished.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(|p| p.completion_time.is_some())
    }

    /// Latest completion tick (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> ScheduleRun {
        let mut a = ProcessDescriptor::new("A", 0, 2);
        a.serve(0, 2);
        let mut b = ProcessDescriptor::new("B", 1, 3);
        b.serve(2, 3);

        let mut run = ScheduleRun::new("FCFS");
        run.timeline.push("A", 0, 2);
        run.timeline.push("B", 2, 5);
        run.processes = vec![a, b];
        run
    }

    #[test]
    fn test_run_queries() {
        let run = sample_run();
        assert_eq!(run.algorithm, "FCFS");
        assert_eq!(run.completion_time("A"), Some(2));
        assert_eq!(run.completion_time("B"), Some(5));
        assert_eq!(run.completion_time("Z"), None);
        assert_eq!(run.makespan(), 5);
        assert_eq!(run.process_count(), 2);
        assert!(run.is_complete());
    }

    #[test]
    fn test_incomplete_run() {
        let mut run = sample_run();
        run.processes.push(ProcessDescriptor::new("C", 9, 1));
        assert!(!run.is_complete());
    }

    #[test]
    fn test_json_round_trip_preserves_run() {
        let run = sample_run();
        let json = serde_json::to_string(&run).unwrap();
        let back: ScheduleRun = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
        assert_eq!(back.completion_time("B"), Some(5));
        assert_eq!(back.processes[1].start_time, Some(2));
        assert!(back.is_complete());
    }

    #[test]
    fn test_empty_run() {
        let run = ScheduleRun::new("RR");
        assert!(run.is_complete());
        assert_eq!(run.makespan(), 0);
    }
}
