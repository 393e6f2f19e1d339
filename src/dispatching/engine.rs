//! Rule engine for multi-key ready-set selection.
//!
//! Composes selection rules lexicographically: the second rule is consulted
//! only when the first ties, and so on. Remaining ties fall back to the
//! candidate's position in the working set, which engines keep in
//! (arrival, input) order, so the overall comparison is total.

use std::cmp::Ordering;
use std::sync::Arc;

use super::SelectionRule;
use crate::models::ProcessDescriptor;

/// A composable, deterministic process selector.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, position decides.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the chained rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes at positions `ia` and `ib`.
    pub fn compare(
        &self,
        a: &ProcessDescriptor,
        ia: usize,
        b: &ProcessDescriptor,
        ib: usize,
    ) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.key(a).cmp(&rule.key(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| ia.cmp(&ib))
    }

    /// Picks the best of `candidates` (indices into `processes`).
    pub fn select_best(&self, processes: &[ProcessDescriptor], candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(&processes[a], a, &processes[b], b))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
