//! JSON serialization of run reports.

use crate::report::RunReport;

/// Serialize a report to a compact JSON string.
pub fn to_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Serialize a report to an indented JSON string.
pub fn to_json_pretty(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report() -> RunReport {
        RunReport {
            status: 0,
            samples_per_phase: 20,
            isolated_calls: 20,
            continuous_calls: 20,
            elapsed: Duration::from_millis(14_250),
            schedule_floor: Duration::from_millis(14_000),
        }
    }

    #[test]
    fn json_carries_all_fields() {
        let json = to_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], 0);
        assert_eq!(value["samples_per_phase"], 20);
        assert_eq!(value["isolated_calls"], 20);
        assert_eq!(value["continuous_calls"], 20);
        assert_eq!(value["elapsed"]["secs"], 14);
    }

    #[test]
    fn pretty_json_is_multiline() {
        assert!(to_json_pretty(&report()).unwrap().contains('\n'));
    }
}
