//! Plain-text terminal rendering.

use std::fmt::Write;

use crate::charts::{Chart, Trace};
use crate::report::DashboardReport;

const NO_DATA: &str = "No data available for the selected date range.";

pub fn render_text(report: &DashboardReport, bar_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    if let Some(range) = report.range {
        let _ = writeln!(out, "Range: {} to {}", range.start, range.end);
    }
    out.push('\n');

    let label_width = report.kpis.iter().map(|k| k.label.len()).max().unwrap_or(0);
    for kpi in &report.kpis {
        let _ = writeln!(out, "  {:<label_width$}  {}", kpi.label, kpi.display_value());
    }

    let quality = &report.data_quality;
    if !quality.is_clean() {
        let _ = writeln!(
            out,
            "  (excluded: {} malformed dates, {} unknown sentiments, {} unknown topics, {} missing labels)",
            quality.malformed_dates,
            quality.unknown_sentiments,
            quality.unknown_topics,
            quality.missing_labels,
        );
    }

    if report.empty {
        let _ = writeln!(out, "\n{NO_DATA}");
        return out;
    }

    for chart in &report.charts {
        out.push('\n');
        render_chart(&mut out, chart, bar_width);
    }
    out
}

fn render_chart(out: &mut String, chart: &Chart, bar_width: usize) {
    let _ = writeln!(out, "{} [{}]", chart.title, chart.kind.as_str());
    if chart.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }
    match chart.traces.as_slice() {
        [single] => render_bars(out, single, bar_width),
        traces => render_table(out, &chart.x_title, traces),
    }
}

/// One row per point with a bar proportional to the largest value.
fn render_bars(out: &mut String, trace: &Trace, bar_width: usize) {
    let label_width = trace.points.iter().map(|p| p.x.len()).max().unwrap_or(0);
    let max = trace.points.iter().map(|p| p.y).fold(0.0f64, f64::max);
    for point in &trace.points {
        let len = if max > 0.0 {
            ((point.y / max) * bar_width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:<bar_width$}  {}",
            point.x,
            "#".repeat(len),
            format_value(point.y),
        );
    }
}

/// X values down, one column per trace.
fn render_table(out: &mut String, x_title: &str, traces: &[Trace]) {
    let rows = traces.iter().map(|t| t.points.len()).max().unwrap_or(0);
    let x_labels: Vec<&str> = (0..rows)
        .map(|i| {
            traces
                .iter()
                .find_map(|t| t.points.get(i))
                .map(|p| p.x.as_str())
                .unwrap_or("")
        })
        .collect();

    let x_width = x_labels
        .iter()
        .map(|x| x.len())
        .chain(std::iter::once(x_title.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = traces.iter().map(|t| t.name.len().max(6)).collect();

    let _ = write!(out, "  {x_title:<x_width$}");
    for (trace, width) in traces.iter().zip(&widths) {
        let _ = write!(out, "  {:>width$}", trace.name);
    }
    out.push('\n');

    for (i, x) in x_labels.iter().enumerate() {
        let _ = write!(out, "  {x:<x_width$}");
        for (trace, width) in traces.iter().zip(&widths) {
            let value = trace.points.get(i).map(|p| format_value(p.y)).unwrap_or_default();
            let _ = write!(out, "  {value:>width$}");
        }
        out.push('\n');
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
