//! Built-in selection rules.
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Smith (1956), SPT optimal for mean flow time on a single machine

use super::{RuleKey, SelectionRule};
use crate::models::ProcessDescriptor;

/// Shortest Job First.
///
/// Ranks by total burst. Non-preemptive SJF minimizes average waiting time
/// among non-preemptive policies when all jobs are present.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &ProcessDescriptor) -> RuleKey {
        process.burst
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by outstanding work; the preemptive form of SJF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &ProcessDescriptor) -> RuleKey {
        process.remaining
    }
}

/// Static priority.
///
/// Lower numeric priority wins.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &ProcessDescriptor) -> RuleKey {
        RuleKey::from(process.priority)
    }
}

/// First Come First Served.
///
/// Ranks by arrival. Used as the tie-breaker for every other rule.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &ProcessDescriptor) -> RuleKey {
        process.arrival
    }
}
