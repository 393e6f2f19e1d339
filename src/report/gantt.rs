//! Text Gantt chart.

use crate::models::Timeline;

const BUSY: char = '#';
const IDLE: char = '.';
/// Widest bar drawn; longer timelines are scaled down to fit.
pub const MAX_COLUMNS: usize = 100;

/// Renders a timeline as a per-process horizontal chart.
///
/// Layout: the title, one row per pid in order of first execution with
/// one column per tick and the merged intervals listed after the bar, and
/// an axis marking `0` and the makespan under the bar edges.
///
/// Up to [`MAX_COLUMNS`] ticks get one column each. Longer timelines are
/// scaled so a column spans several ticks; every interval still marks at
/// least one column.
///
/// ```text
/// FCFS
/// P1 |#####...........| (0->5)
/// P2 |.....###........| (5->8)
/// P3 |........########| (8->16)
///    0               16
/// ```
pub fn gantt_chart(timeline: &Timeline, title: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    if timeline.is_empty() {
        out.push_str("(no execution)\n");
        return out;
    }

    let merged = timeline.merged();
    let makespan = merged.makespan().max(0);
    let width = usize::try_from(makespan).map_or(MAX_COLUMNS, |w| w.min(MAX_COLUMNS));
    let column = |tick: i64| -> usize {
        if makespan == 0 {
            return 0;
        }
        let scaled = i128::from(tick.clamp(0, makespan)) * width as i128 / i128::from(makespan);
        usize::try_from(scaled).map_or(width, |c| c.min(width))
    };
    let pids = merged.pids();
    let label_width = pids.iter().map(|p| p.chars().count()).max().unwrap_or(0);

    for pid in &pids {
        let mut bar = vec![IDLE; width];
        let mut spans = Vec::new();
        for e in merged.entries_for(pid) {
            let start = column(e.start).min(width.saturating_sub(1));
            let end = column(e.end).max(start + 1).min(width);
            bar[start..end].fill(BUSY);
            spans.push(format!("({}->{})", e.start, e.end));
        }
        let bar: String = bar.into_iter().collect();
        out.push_str(&format!(
            "{pid:<label_width$} |{bar}| {}\n",
            spans.join(" ")
        ));
    }

    let end_label = makespan.to_string();
    out.push_str(&format!(
        "{:label_width$} 0{}{end_label}\n",
        "",
        " ".repeat((width + 1).saturating_sub(end_label.len()))
    ));
    out
}
