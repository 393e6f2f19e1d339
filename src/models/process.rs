//! Process descriptor model.
//!
//! A process is the schedulable unit of work: it becomes eligible at its
//! arrival time and needs `burst` units of processor time to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single processor.
///
/// The descriptor carries both the caller-supplied attributes and the
/// mutable bookkeeping (`remaining`, `start_time`, `completion_time`) a
/// scheduler fills in while simulating. Schedulers never touch the caller's
/// descriptors: each run starts from [`ProcessDescriptor::fresh_copy`].
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessInput")]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub pid: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total processor time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Processor time still owed. Starts at `burst`.
    pub remaining: i64,
    /// First tick the process held the processor.
    pub start_time: Option<i64>,
    /// Tick at which `remaining` reached zero.
    pub completion_time: Option<i64>,
}

/// Serialized shape of a process.
///
/// Callers usually send only `{pid, arrival, burst, priority?}`; the
/// bookkeeping fields are present when a finished run is read back.
#[derive(Deserialize)]
struct ProcessInput {
    pid: String,
    arrival: i64,
    burst: i64,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    remaining: Option<i64>,
    #[serde(default)]
    start_time: Option<i64>,
    #[serde(default)]
    completion_time: Option<i64>,
}

impl From<ProcessInput> for ProcessDescriptor {
    fn from(input: ProcessInput) -> Self {
        let mut process =
            Self::new(input.pid, input.arrival, input.burst).with_priority(input.priority);
        if let Some(remaining) = input.remaining {
            process.remaining = remaining;
        }
        process.start_time = input.start_time;
        process.completion_time = input.completion_time;
        process
    }
}

impl ProcessDescriptor {
    /// Creates a process with priority 0.
    pub fn new(pid: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            start_time: None,
            completion_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds an untouched working copy: same identity and attributes,
    /// `remaining = burst`, no start or completion recorded.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.pid.clone(), self.arrival, self.burst).with_priority(self.priority)
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival <= now
    }

    /// Whether all service has been delivered.
    ///
    /// A non-positive `remaining` (only reachable from unvalidated input)
    /// counts as finished so every engine loop still terminates.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining <= 0
    }

    /// Delivers `units` of service starting at tick `now`.
    ///
    /// Records `start_time` on the first call and `completion_time` once
    /// `remaining` reaches zero. `units` is clamped to what is still owed.
    /// Returns the number of units actually delivered.
    pub fn serve(&mut self, now: i64, units: i64) -> i64 {
        let units = units.min(self.remaining).max(0);
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        self.remaining -= units;
        if self.remaining <= 0 && self.completion_time.is_none() {
            self.completion_time = Some(now + units);
        }
        units
    }
}

/// Fresh working copies of `processes`, stably sorted by arrival.
///
/// Ties keep input order, which every engine relies on as the last
/// tie-break.
pub(crate) fn working_set(processes: &[ProcessDescriptor]) -> Vec<ProcessDescriptor> {
    let mut procs: Vec<ProcessDescriptor> =
        processes.iter().map(ProcessDescriptor::fresh_copy).collect();
    procs.sort_by_key(|p| p.arrival);
    procs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessDescriptor::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining, 7);
        assert!(p.start_time.is_none());
        assert!(p.completion_time.is_none());
    }

    #[test]
    fn test_serve_sets_start_once() {
        let mut p = ProcessDescriptor::new("P1", 0, 4);
        assert_eq!(p.serve(2, 1), 1);
        assert_eq!(p.serve(5, 1), 1);
        assert_eq!(p.start_time, Some(2));
        assert_eq!(p.remaining, 2);
        assert!(p.completion_time.is_none());
    }

    #[test]
    fn test_serve_clamps_and_completes() {
        let mut p = ProcessDescriptor::new("P1", 0, 3);
        assert_eq!(p.serve(0, 10), 3);
        assert!(p.is_finished());
        assert_eq!(p.completion_time, Some(3));
    }

    #[test]
    fn test_fresh_copy_resets_bookkeeping() {
        let mut p = ProcessDescriptor::new("P1", 1, 5).with_priority(4);
        p.serve(1, 5);
        let copy = p.fresh_copy();
        assert_eq!(copy.remaining, 5);
        assert_eq!(copy.priority, 4);
        assert!(copy.start_time.is_none());
        assert!(copy.completion_time.is_none());
    }

    #[test]
    fn test_working_set_is_stable() {
        let input = vec![
            ProcessDescriptor::new("B", 2, 1),
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("C", 2, 1),
        ];
        let set = working_set(&input);
        let order: Vec<&str> = set.iter().map(|p| p.pid.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_serve_negative_burst_completes_immediately() {
        let mut p = ProcessDescriptor::new("P1", 0, -3);
        assert_eq!(p.serve(4, 1), 0);
        assert!(p.is_finished());
        assert_eq!(p.start_time, Some(4));
        assert_eq!(p.completion_time, Some(4));
    }

    #[test]
    fn test_deserialize_keeps_bookkeeping() {
        let p: ProcessDescriptor = serde_json::from_str(
            r#"{"pid":"P1","arrival":0,"burst":4,"remaining":1,"start_time":2,"completion_time":null}"#,
        )
        .unwrap();
        assert_eq!(p.remaining, 1);
        assert_eq!(p.start_time, Some(2));
        assert!(p.completion_time.is_none());
    }

    #[test]
    fn test_deserialize_derives_bookkeeping() {
        let p: ProcessDescriptor =
            serde_json::from_str(r#"{"pid":"P1","arrival":1,"burst":6}"#).unwrap();
        assert_eq!(p.priority, 0);
        assert_eq!(p.remaining, 6);
        assert!(p.start_time.is_none());
    }
}
