//! Static-priority scheduling, non-preemptive and preemptive.
//!
//! Same loop as SJF with the key `(priority, arrival)`: lower numeric
//! priority wins, earlier arrival breaks ties.

use super::ready_set::simulate;
use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{ProcessDescriptor, ScheduleRun};

/// Priority scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    preemptive: bool,
}

impl Priority {
    /// Runs the most important ready process to completion.
    pub fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    /// Re-evaluates priorities every tick.
    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }

    /// Whether this is the preemptive variant.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }

    fn engine(&self) -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
    }
}

impl CpuScheduler for Priority {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "Priority Preemptive"
        } else {
            "Priority Non-Preemptive"
        }
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> ScheduleRun {
        simulate(self.name(), processes, &self.engine(), self.preemptive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    fn sample() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 10).with_priority(3),
            ProcessDescriptor::new("P2", 1, 1).with_priority(1),
            ProcessDescriptor::new("P3", 2, 2).with_priority(4),
            ProcessDescriptor::new("P4", 3, 1).with_priority(5),
            ProcessDescriptor::new("P5", 4, 5).with_priority(2),
        ]
    }

    #[test]
    fn test_priority_non_preemptive() {
        let run = Priority::non_preemptive().schedule(&sample());
        assert_eq!(
            run.timeline.entries,
            vec![
                TimelineEntry::new("P1", 0, 10),
                TimelineEntry::new("P2", 10, 11),
                TimelineEntry::new("P5", 11, 16),
                TimelineEntry::new("P3", 16, 18),
                TimelineEntry::new("P4", 18, 19),
            ]
        );
    }

    #[test]
    fn test_priority_preemptive() {
        let run = Priority::preemptive().schedule(&sample());
        assert_eq!(run.completion_time("P1"), Some(16));
        assert_eq!(run.completion_time("P2"), Some(2));
        assert_eq!(run.completion_time("P3"), Some(18));
        assert_eq!(run.completion_time("P4"), Some(19));
        assert_eq!(run.completion_time("P5"), Some(9));
        assert_eq!(
            run.timeline.merged().entries,
            vec![
                TimelineEntry::new("P1", 0, 1),
                TimelineEntry::new("P2", 1, 2),
                TimelineEntry::new("P1", 2, 4),
                TimelineEntry::new("P5", 4, 9),
                TimelineEntry::new("P1", 9, 16),
                TimelineEntry::new("P3", 16, 18),
                TimelineEntry::new("P4", 18, 19),
            ]
        );
    }

    #[test]
    fn test_priority_tie_prefers_earlier_arrival() {
        let procs = vec![
            ProcessDescriptor::new("late", 1, 2).with_priority(1),
            ProcessDescriptor::new("early", 0, 2).with_priority(1),
        ];
        let run = Priority::preemptive().schedule(&procs);
        assert_eq!(run.completion_time("early"), Some(2));
        assert_eq!(run.completion_time("late"), Some(4));
    }

    #[test]
    fn test_negative_priority_wins() {
        let procs = vec![
            ProcessDescriptor::new("A", 0, 1).with_priority(0),
            ProcessDescriptor::new("B", 0, 1).with_priority(-5),
        ];
        let run = Priority::non_preemptive().schedule(&procs);
        assert_eq!(run.timeline.entries[0].pid, "B");
    }
}
