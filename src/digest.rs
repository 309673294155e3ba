//! In-memory digest record handed to the rendering and persistence layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alert::{Alert, Severity};
use crate::explain::{parse_explanation, ParsedExplanation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSummary {
    pub date: DateTime<Utc>,
    pub total_alerts: usize,
}

/// One alert with its explanation, raw and structured. The raw text is
/// kept alongside the parsed sections so the persisted document can be
/// re-parsed later without re-generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    pub severity: Severity,
    pub source: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub ai_explanation: String,
    pub ai: ParsedExplanation,
}

impl AlertReport {
    /// Attach an explanation to an alert, running the section extractor
    /// over the raw text. An empty string (the generation call failed)
    /// yields a report with all sections empty.
    pub fn new(alert: Alert, raw_explanation: &str) -> Self {
        let ai = parse_explanation(raw_explanation);
        AlertReport {
            severity: alert.severity,
            source: alert.source,
            description: alert.description,
            timestamp: alert.timestamp,
            ai_explanation: raw_explanation.to_string(),
            ai,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub summary: DigestSummary,
    pub alerts: Vec<AlertReport>,
}

impl Digest {
    /// Assemble the digest for one run. Report order is the caller's
    /// (triaged) alert order.
    pub fn build(date: DateTime<Utc>, alerts: Vec<AlertReport>) -> Self {
        debug!(total = alerts.len(), "building digest");
        Digest {
            summary: DigestSummary {
                date,
                total_alerts: alerts.len(),
            },
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn sample_alert() -> Alert {
        Alert {
            source: "Windows Security Log".to_string(),
            severity: Severity::High,
            description: "Failed login attempt detected".to_string(),
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn report_carries_raw_and_parsed_explanation() {
        let raw = "What happened:\nA login failed.\nWhy it matters:\nPossible brute force.";
        let report = AlertReport::new(sample_alert(), raw);
        assert_eq!(report.ai_explanation, raw);
        assert_eq!(report.ai.what_happened, "A login failed.");
        assert_eq!(report.ai.why_it_matters, "Possible brute force.");
    }

    #[test]
    fn failed_generation_degrades_to_empty_sections() {
        let report = AlertReport::new(sample_alert(), "");
        assert_eq!(report.ai, ParsedExplanation::default());
    }

    #[test]
    fn summary_counts_reports() {
        let date = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let reports = vec![
            AlertReport::new(sample_alert(), ""),
            AlertReport::new(sample_alert(), ""),
        ];
        let digest = Digest::build(date, reports);
        assert_eq!(digest.summary.total_alerts, 2);
        assert_eq!(digest.summary.date, date);
        assert_eq!(digest.alerts.len(), 2);
    }

    #[test]
    fn serialized_shape_matches_persisted_documents() {
        let date = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let raw = "What to do:\nRotate the credentials.";
        let digest = Digest::build(date, vec![AlertReport::new(sample_alert(), raw)]);
        let json = serde_json::to_value(&digest).unwrap();
        assert_eq!(json["summary"]["total_alerts"], 1);
        assert_eq!(json["alerts"][0]["severity"], "high");
        assert_eq!(json["alerts"][0]["ai"]["what_to_do"][0], "Rotate the credentials.");
    }
}
