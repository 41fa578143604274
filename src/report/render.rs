//! Report rendering: human text and JSON.

use std::fmt::Write as _;

use crate::config::ReportFormat;
use crate::report::types::CheckReport;

pub fn render(report: &CheckReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    writeln!(out, "Navigation reachability report ({})", report.run_id)?;
    writeln!(out, "  Known routes:  {}", report.total_routes)?;
    writeln!(out, "  Requests:      {}", report.total_requests)?;
    writeln!(out, "  Resolved:      {}/{}", report.resolved, report.checked)?;
    writeln!(out, "  Unresolved:    {}", report.unresolved)?;
    writeln!(out, "  Skipped:       {} (interpolated destination)", report.skipped)?;

    if !report.failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unresolved requests:")?;
        for failure in &report.failures {
            let request = &failure.request;
            let marker = if request.critical { "!" } else { "-" };
            write!(
                out,
                "  {marker} {} [{}] -> {:?}: {}",
                request.origin, request.action, request.destination, failure.reason
            )?;
            if let Some(line) = request.line {
                write!(out, " (line {line})")?;
            }
            writeln!(out)?;
        }
    }

    if !report.skipped_requests.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skipped (not statically checkable):")?;
        for request in &report.skipped_requests {
            writeln!(out, "  ~ {} [{}] -> {}", request.origin, request.action, request.destination)?;
        }
    }

    if !report.dead_interactions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Interaction points without action:")?;
        for dead in &report.dead_interactions {
            writeln!(
                out,
                "  ? {}:{} <{}> {}",
                dead.origin, dead.line, dead.element, dead.reason
            )?;
        }
    }
    Ok(())
}
