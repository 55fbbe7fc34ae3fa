//! Terminal output formatting with colors.

use colored::Colorize;

use crate::report::RunReport;

/// Format a run report for human-readable terminal output.
pub fn format_report(report: &RunReport) -> String {
    let mut output = String::new();

    let header = if report.succeeded() {
        format!("{} {}", "\u{2713}".green().bold(), "RUN OK".green().bold())
    } else {
        format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            format!("FINAL DECRYPT FAILED (status {})", report.status)
                .red()
                .bold()
        )
    };
    output.push_str(&header);
    output.push('\n');

    output.push_str(&format!(
        "Isolated samples:   {} (one trigger pulse each)\n",
        report.isolated_calls
    ));
    output.push_str(&format!(
        "Continuous samples: {} (single envelope)\n",
        report.continuous_calls
    ));
    output.push_str(&format!(
        "Trigger envelopes:  {}\n",
        report.isolated_calls + 1
    ));

    let elapsed = format!("Elapsed: {:.3}s", report.elapsed.as_secs_f64());
    let floor = format!("floor {:.3}s", report.schedule_floor.as_secs_f64());
    let timing = format!("{elapsed} ({floor})");
    if report.elapsed >= report.schedule_floor {
        output.push_str(&timing);
    } else {
        // A run faster than its own schedule floor means a delay source
        // did not actually block.
        output.push_str(&timing.yellow().to_string());
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report(status: i32) -> RunReport {
        RunReport {
            status,
            samples_per_phase: 20,
            isolated_calls: 20,
            continuous_calls: 20,
            elapsed: Duration::from_millis(14_250),
            schedule_floor: Duration::from_millis(14_000),
        }
    }

    #[test]
    fn success_header() {
        colored::control::set_override(false);
        let text = format_report(&report(0));
        assert!(text.contains("RUN OK"));
        assert!(text.contains("Trigger envelopes:  21"));
    }

    #[test]
    fn failure_header_names_status() {
        colored::control::set_override(false);
        let text = format_report(&report(1));
        assert!(text.contains("FINAL DECRYPT FAILED (status 1)"));
    }
}
