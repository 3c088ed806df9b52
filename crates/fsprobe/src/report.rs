//! Aggregated scenario results.

use serde::Serialize;

use crate::classify::Verdict;

/// Verdict for one named scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Results of one catalog run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub scenarios: Vec<ScenarioReport>,
}

impl Report {
    pub fn record(&mut self, name: impl Into<String>, verdict: Verdict) {
        self.scenarios.push(ScenarioReport {
            name: name.into(),
            verdict,
        });
    }

    pub fn passed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Pass))
    }

    pub fn failed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Fail { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Skip { .. }))
    }

    /// True when no scenario failed. Skips do not fail a run; they mark
    /// environment-dependent behavior that stays visible in the report.
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// One-line summary in the usual runner format.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }

    fn count(&self, pred: impl Fn(&Verdict) -> bool) -> usize {
        self.scenarios.iter().filter(|s| pred(&s.verdict)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Report {
        let mut report = Report::default();
        report.record("a", Verdict::Pass);
        report.record(
            "b",
            Verdict::Fail {
                expected: "success".into(),
                observed: "failure: not found".into(),
            },
        );
        report.record(
            "c",
            Verdict::Skip {
                reason: "gray zone".into(),
            },
        );
        report
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.success());
    }

    #[test]
    fn test_success_ignores_skips() {
        let mut report = Report::default();
        report.record("a", Verdict::Pass);
        report.record(
            "b",
            Verdict::Skip {
                reason: "gray zone".into(),
            },
        );
        assert!(report.success());
    }

    #[test]
    fn test_summary() {
        assert_eq!(sample().summary(), "1 passed, 1 failed, 1 skipped");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).expect("serialize");
        let scenarios = json["scenarios"].as_array().expect("array");
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0]["verdict"], "pass");
        assert_eq!(scenarios[1]["verdict"], "fail");
        assert_eq!(scenarios[2]["reason"], "gray zone");
    }
}
