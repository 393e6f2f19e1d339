//! Execution timeline model.
//!
//! A timeline records which process held the processor during which
//! half-open interval `[start, end)`. On a single processor the entries
//! never overlap and are appended in time order.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process that held the processor.
    pub pid: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered, non-overlapping sequence of [`TimelineEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in non-decreasing start order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution interval.
    ///
    /// Empty intervals are dropped.
    pub fn push(&mut self, pid: impl Into<String>, start: i64, end: i64) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.entries.last().map_or(true, |last| last.end <= start),
            "timeline entries must not overlap"
        );
        self.entries.push(TimelineEntry::new(pid, start, end));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// End of the last interval (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// All intervals executed by `pid`.
    pub fn entries_for(&self, pid: &str) -> Vec<&TimelineEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Total processor time given to `pid`.
    pub fn busy_time(&self, pid: &str) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Total processor time across all processes.
    pub fn total_busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Distinct pids in order of first execution.
    pub fn pids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !seen.contains(&e.pid.as_str()) {
                seen.push(&e.pid);
            }
        }
        seen
    }

    /// Coalesces back-to-back entries of the same process.
    ///
    /// Preemptive engines emit one entry per tick; this gives the
    /// presentation-friendly view. Entries separated by idle time stay apart.
    pub fn merged(&self) -> Timeline {
        let mut out: Vec<TimelineEntry> = Vec::with_capacity(self.entries.len());
        for e in &self.entries {
            match out.last_mut() {
                Some(last) if last.pid == e.pid && last.end == e.start => last.end = e.end,
                _ => out.push(e.clone()),
            }
        }
        Timeline { entries: out }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
