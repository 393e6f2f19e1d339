//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Deterministic, single-processor simulation of the classical scheduling
//! policies, the metrics derived from their runs, and the Banker's
//! safe-state check for deadlock avoidance.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `Timeline`,
//!   `TimelineEntry`, `ScheduleRun`, `WorkloadGenerator`
//! - **`dispatching`**: Selection rules (SJF, SRTF, priority, arrival) and
//!   the rule engine that chains them into a total order
//! - **`scheduler`**: `Fcfs`, `Sjf`, `Priority`, `RoundRobin` engines and
//!   `RunMetrics`
//! - **`banker`**: `ResourceState` and the safety algorithm
//! - **`simulator`**: Name-based algorithm selection and JSON requests
//! - **`report`**: CSV metrics export and text Gantt charts
//! - **`validation`**: Input integrity checks
//!
//! # Architecture
//!
//! Every run clones its input into a fresh working set, so engines hold no
//! state and runs over the same input are independent. Logging goes
//! through `tracing`; installing a subscriber is left to the binary.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5, 8
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4, 6.5
//! - Dijkstra (1965), "Cooperating Sequential Processes"

pub mod banker;
pub mod dispatching;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulator;
pub mod validation;
