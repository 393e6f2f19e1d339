//! Row-oriented metrics export.

use std::fmt::Write;

use crate::scheduler::RunMetrics;

const HEADER: &str = "PID,arrival,burst,completion,turnaround,waiting";

/// Renders metrics as CSV.
///
/// One row per process in run order, then a synthetic `Average` row whose
/// arrival, burst, and completion cells are empty. Averages use two
/// decimals.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::report::metrics_csv;
/// use u_cpusched::scheduler::{CpuScheduler, Fcfs, RunMetrics};
///
/// let run = Fcfs.schedule(&[ProcessDescriptor::new("P1", 0, 4)]);
/// let csv = metrics_csv(&RunMetrics::calculate(&run).unwrap());
/// assert_eq!(
///     csv,
///     "PID,arrival,burst,completion,turnaround,waiting\nP1,0,4,4,4,0\nAverage,,,,4.00,0.00\n"
/// );
/// ```
pub fn metrics_csv(metrics: &RunMetrics) -> String {
    let mut out = String::with_capacity(64 * (metrics.len() + 2));
    out.push_str(HEADER);
    out.push('\n');

    for m in &metrics.processes {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            escape(&m.pid),
            m.arrival,
            m.burst,
            m.completion,
            m.turnaround,
            m.waiting
        );
    }

    let _ = writeln!(
        out,
        "Average,,,,{:.2},{:.2}",
        metrics.averages.avg_turnaround, metrics.averages.avg_waiting
    );
    out
}

/// Quotes a field when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
