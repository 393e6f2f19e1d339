//! CPU scheduling domain models.
//!
//! Provides the value types shared by every scheduling engine: the process
//! descriptor, the execution timeline, and the run record that bundles
//! them.
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Burst | Total processor time a process requires |
//! | Turnaround | `completion - arrival` |
//! | Waiting | `turnaround - burst` |
//! | Response | `start - arrival` |

mod process;
mod run;
mod timeline;
mod workload;

pub(crate) use process::working_set;
pub use process::ProcessDescriptor;
pub use run::ScheduleRun;
pub use timeline::{Timeline, TimelineEntry};
pub use workload::WorkloadGenerator;
