//! Simulation facade.
//!
//! Selects an engine by [`Algorithm`], validates the request, runs it, and
//! derives metrics in one call. Requests can be built in code or loaded
//! from JSON.
//!
//! # Example
//!
//! ```
//! use u_cpusched::simulator::{Algorithm, SimulationRequest, Simulator};
//!
//! let request = SimulationRequest::from_json(r#"{
//!     "algorithm": { "RoundRobin": { "quantum": 2 } },
//!     "processes": [
//!         { "pid": "P1", "arrival": 0, "burst": 5 },
//!         { "pid": "P2", "arrival": 1, "burst": 3, "priority": 1 }
//!     ]
//! }"#).unwrap();
//!
//! let report = Simulator::run(&request).unwrap();
//! assert_eq!(report.run.algorithm, "RR");
//! assert_eq!(report.metrics.len(), 2);
//! assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin { quantum: 1 });
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::banker::{BankerRequest, ResourceState};
use crate::models::{ProcessDescriptor, ScheduleRun};
use crate::scheduler::{CpuScheduler, Fcfs, MetricsError, Priority, RoundRobin, RunMetrics, Sjf};
use crate::validation::ValidationError;

/// A scheduling policy and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First, run to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Round Robin with the given quantum.
    RoundRobin {
        /// Time slice per dispatch.
        quantum: i64,
    },
    /// Static priority, run to completion.
    PriorityNonPreemptive,
    /// Static priority, re-evaluated every tick.
    PriorityPreemptive,
}

impl Algorithm {
    /// All policies, Round Robin with the given quantum.
    pub fn all(quantum: i64) -> [Algorithm; 6] {
        [
            Self::Fcfs,
            Self::SjfNonPreemptive,
            Self::SjfPreemptive,
            Self::RoundRobin { quantum },
            Self::PriorityNonPreemptive,
            Self::PriorityPreemptive,
        ]
    }

    /// Display name, shared with the engine's [`CpuScheduler::name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfNonPreemptive => "SJF Non-Preemptive",
            Self::SjfPreemptive => "SJF Preemptive",
            Self::RoundRobin { .. } => "RR",
            Self::PriorityNonPreemptive => "Priority Non-Preemptive",
            Self::PriorityPreemptive => "Priority Preemptive",
        }
    }

    /// Builds the engine.
    ///
    /// # Errors
    /// Round Robin with a non-positive quantum.
    pub fn scheduler(&self) -> Result<Box<dyn CpuScheduler>, Vec<ValidationError>> {
        let scheduler: Box<dyn CpuScheduler> = match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::SjfNonPreemptive => Box::new(Sjf::non_preemptive()),
            Self::SjfPreemptive => Box::new(Sjf::preemptive()),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
            Self::PriorityNonPreemptive => Box::new(Priority::non_preemptive()),
            Self::PriorityPreemptive => Box::new(Priority::preemptive()),
        };
        Ok(scheduler)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses a display name. `"RR"` yields quantum 1; `"RR:<q>"` sets it.
impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(q) = s.strip_prefix("RR:") {
            return q
                .trim()
                .parse()
                .map(|quantum| Self::RoundRobin { quantum })
                .map_err(|_| SimulationError::UnknownAlgorithm(s.to_string()));
        }
        match s {
            "RR" => Ok(Self::RoundRobin { quantum: 1 }),
            _ => Self::all(1)
                .into_iter()
                .find(|a| a.name().eq_ignore_ascii_case(s))
                .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Input for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to simulate.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    #[serde(default)]
    pub processes: Vec<ProcessDescriptor>,
}

impl SimulationRequest {
    /// Creates an empty request for the given policy.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process set.
    pub fn with_processes(mut self, processes: Vec<ProcessDescriptor>) -> Self {
        self.processes = processes;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of [`Simulator::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Timeline and completed processes.
    pub run: ScheduleRun,
    /// Derived metrics.
    pub metrics: RunMetrics,
}

/// Simulation failure.
#[derive(Debug)]
pub enum SimulationError {
    /// Input rejected before simulating.
    Invalid(Vec<ValidationError>),
    /// The engine produced an incomplete run.
    Metrics(MetricsError),
    /// Malformed JSON.
    Config(serde_json::Error),
    /// Unrecognized policy name.
    UnknownAlgorithm(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "invalid input ({} problems)", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            Self::Metrics(e) => write!(f, "metrics error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Metrics(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Invalid(_) | Self::UnknownAlgorithm(_) => None,
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

impl From<MetricsError> for SimulationError {
    fn from(e: MetricsError) -> Self {
        Self::Metrics(e)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

/// Runs simulations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Validates, schedules, and computes metrics.
    pub fn run(request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
        let scheduler = request.algorithm.scheduler()?;
        let run = scheduler.run(&request.processes)?;
        let metrics = RunMetrics::calculate(&run)?;
        Ok(SimulationReport { run, metrics })
    }

    /// Runs every policy over the same processes.
    pub fn compare(
        processes: &[ProcessDescriptor],
        quantum: i64,
    ) -> Result<Vec<SimulationReport>, SimulationError> {
        Algorithm::all(quantum)
            .into_iter()
            .map(|algorithm| {
                Self::run(&SimulationRequest::new(algorithm).with_processes(processes.to_vec()))
            })
            .collect()
    }

    /// Parses and validates Banker's input from JSON.
    pub fn resource_state_from_json(json: &str) -> Result<ResourceState, SimulationError> {
        let request: BankerRequest = serde_json::from_str(json)?;
        Ok(request.into_state()?)
    }
}
