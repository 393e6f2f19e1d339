//! Presentation of simulation results.
//!
//! Pure string producers: callers decide where the text goes (stdout, a
//! file, a web response). Nothing here feeds back into the engines.
//!
//! - [`metrics_csv`]: per-process metrics plus an `Average` row
//! - [`gantt_chart`]: one text row per process, one column per tick (scaled past [`MAX_COLUMNS`])
//! - [`safe_sequence_label`]: `P2 -> P4 -> P1`
//! - [`to_json`]: a full [`SimulationReport`] as pretty JSON

mod csv;
mod gantt;

pub use csv::metrics_csv;
pub use gantt::{gantt_chart, MAX_COLUMNS};

use crate::banker::process_label;
use crate::simulator::SimulationReport;

/// Renders Banker's process indices as `P{i+1}` joined by arrows.
pub fn safe_sequence_label(sequence: &[usize]) -> String {
    sequence
        .iter()
        .map(|&i| process_label(i))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &SimulationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
