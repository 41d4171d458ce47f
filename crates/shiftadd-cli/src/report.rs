//! Result-line and JSON report output.

use serde::Serialize;
use shiftadd_core::{ItemHistory, PipelineScheduler};

/// The classic result line: `C = {4, 100}`.
#[must_use]
pub fn result_line(results: &[u64]) -> String {
    let joined = results
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("C = {{{joined}}}")
}

/// Everything a machine consumer needs from one simulation run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Decimal products, submission order.
    pub results: Vec<u64>,
    /// Clock value after the last tick.
    pub elapsed: u64,
    /// Clock step per tick.
    pub tick_duration: u64,
    /// Full per-pair stage histories, submission order.
    pub pairs: Vec<&'a ItemHistory>,
}

impl<'a> Report<'a> {
    /// Snapshot a completed scheduler.
    #[must_use]
    pub fn from_scheduler(scheduler: &'a PipelineScheduler) -> Self {
        Self {
            results: scheduler.collect_results(),
            elapsed: scheduler.elapsed(),
            tick_duration: scheduler.tick_duration(),
            pairs: scheduler.collect_histories(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftadd_core::{BinaryWord, STAGE_COUNT};

    #[test]
    fn result_line_matches_the_original_format() {
        assert_eq!(result_line(&[4, 100]), "C = {4, 100}");
        assert_eq!(result_line(&[15]), "C = {15}");
        assert_eq!(result_line(&[]), "C = {}");
    }

    #[test]
    fn json_report_carries_results_and_histories() {
        let mut scheduler = PipelineScheduler::new(1);
        scheduler.submit(BinaryWord::operand(3), BinaryWord::operand(5));
        scheduler.run_to_completion();

        let report = Report::from_scheduler(&scheduler);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["results"][0], 15);
        assert_eq!(value["tick_duration"], 1);
        assert_eq!(
            value["pairs"][0]["records"].as_array().unwrap().len(),
            STAGE_COUNT + 1
        );
        assert_eq!(
            value["pairs"][0]["records"][16]["sum"],
            "0000-0000-0000-1111"
        );
    }
}
