//! Human-readable console summary of a dispatch run.

use std::fmt::Write;

use ems_dispatch::RunSummary;

/// Render the performance summary block.
///
/// Latency figures cover dispatched calls only; a run that dispatched
/// nothing says so instead of printing a meaningless average.
pub fn render_performance_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    // Infallible: writing to a String cannot fail.
    let _ = writeln!(out, "==== Performance Summary ====");
    let _ = writeln!(
        out,
        "Route-finding execution time: {:.4} ms",
        summary.total_solver_ms
    );
    if summary.dispatched > 0 {
        let _ = writeln!(
            out,
            "Average route-finding time: {:.4} ms",
            summary.mean_solver_ms
        );
    } else {
        let _ = writeln!(out, "No calls were dispatched.");
    }
    out
}

/// Print [`render_performance_summary`] to stdout.
pub fn print_performance_summary(summary: &RunSummary) {
    print!("{}", render_performance_summary(summary));
}
