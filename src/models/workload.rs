//! Random workload generation.
//!
//! Produces process sets for exploring how policies behave on varied
//! inputs. The generator is driven by a caller-supplied RNG so a seeded
//! `SmallRng` gives reproducible workloads.

use rand::Rng;

use super::ProcessDescriptor;

/// Parameters for random process sets.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::models::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let procs = WorkloadGenerator::new(4)
///     .with_arrival_range(0, 10)
///     .with_burst_range(1, 5)
///     .generate(&mut rng);
/// assert_eq!(procs.len(), 4);
/// assert_eq!(procs[0].pid, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Inclusive arrival range.
    pub arrival: (i64, i64),
    /// Inclusive burst range. Lower bound is forced to at least 1.
    pub burst: (i64, i64),
    /// Inclusive priority range.
    pub priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with small default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 10),
            burst: (1, 10),
            priority: (0, 5),
        }
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = (min.max(0), max.max(min.max(0)));
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max.max(min));
        self
    }

    /// Draws a process set. Pids are `P1..=Pn` in generation order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        (0..self.count)
            .map(|i| {
                let arrival = rng.random_range(self.arrival.0..=self.arrival.1);
                let burst = rng.random_range(self.burst.0..=self.burst.1);
                let priority = rng.random_range(self.priority.0..=self.priority.1);
                ProcessDescriptor::new(format!("P{}", i + 1), arrival, burst)
                    .with_priority(priority)
            })
            .collect()
    }
}
