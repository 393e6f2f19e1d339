//! Selection rules and rule engine for ready-set scheduling.
//!
//! SJF and Priority scheduling differ only in which process they pick from
//! the ready set. A [`SelectionRule`] turns a process into an integer key,
//! and a [`RuleEngine`] chains rules into a total order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let procs = vec![
//!     ProcessDescriptor::new("P1", 0, 8),
//!     ProcessDescriptor::new("P2", 1, 4),
//! ];
//! assert_eq!(engine.select_best(&procs, &[0, 1]), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = selected first.
pub type RuleKey = i64;

/// A rule that ranks processes in the ready set.
///
/// # Key Convention
/// **Lower key = higher precedence.** Integer keys keep the comparison
/// exact, so equal keys are genuine ties.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Ranks a process. Lower = picked sooner.
    fn key(&self, process: &ProcessDescriptor) -> RuleKey;
}
