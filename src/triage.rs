//! Alert dedup and priority ordering ahead of digest assembly.

use itertools::Itertools;
use tracing::debug;

use crate::alert::Alert;

/// Collapse repeated alerts and order what remains by severity.
///
/// Alerts are duplicates when they share (source, description); the first
/// occurrence wins. The sort is stable, so input order is kept within a
/// severity band.
pub fn triage(alerts: Vec<Alert>) -> Vec<Alert> {
    let before = alerts.len();
    let mut unique: Vec<Alert> = alerts
        .into_iter()
        .unique_by(|a| (a.source.clone(), a.description.clone()))
        .collect();
    unique.sort_by_key(|a| a.severity.rank());
    debug!(before, after = unique.len(), "triaged alerts");
    unique
}
