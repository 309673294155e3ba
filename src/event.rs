//! Fixed mapping from security log event ids to triage-ready alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::{Alert, Severity};

/// Source label attached to every alert classified from the security log.
pub const SECURITY_LOG_SOURCE: &str = "Windows Security Log";

/// Minimal shape of one security log event, as handed over by the
/// ingestion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub event_id: u32,
    pub timestamp: DateTime<Utc>,
}

/// Map an event to an alert, or `None` for ids outside the watch list.
/// Event ids carry qualifier flags in the high word; only the low 16 bits
/// identify the event.
pub fn classify(event: &SecurityEvent) -> Option<Alert> {
    let (severity, description) = match event.event_id & 0xFFFF {
        4625 => (Severity::High, "Failed login attempt detected"),
        4624 => (Severity::Low, "Successful login detected"),
        4672 => (Severity::Medium, "Special privileges assigned to new logon"),
        _ => return None,
    };

    Some(Alert {
        source: SECURITY_LOG_SOURCE.to_string(),
        severity,
        description: description.to_string(),
        timestamp: event.timestamp,
    })
}

/// Classify a batch of events, dropping the unrecognized ones.
pub fn classify_events(events: &[SecurityEvent]) -> Vec<Alert> {
    events.iter().filter_map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_id: u32) -> SecurityEvent {
        SecurityEvent {
            event_id,
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn watch_list_mapping() {
        assert_eq!(classify(&event(4625)).unwrap().severity, Severity::High);
        assert_eq!(classify(&event(4624)).unwrap().severity, Severity::Low);
        assert_eq!(classify(&event(4672)).unwrap().severity, Severity::Medium);
    }

    #[test]
    fn high_word_qualifiers_are_masked_off() {
        let masked = classify(&event(0x1000_0000 | 4625)).unwrap();
        assert_eq!(masked.description, "Failed login attempt detected");
    }

    #[test]
    fn unknown_ids_produce_no_alert() {
        assert!(classify(&event(4688)).is_none());
        assert!(classify(&event(0)).is_none());
    }

    #[test]
    fn batch_keeps_event_order_and_timestamps() {
        let events = [event(4624), event(4688), event(4625)];
        let alerts = classify_events(&events);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, Severity::Low);
        assert_eq!(alerts[1].severity, Severity::High);
        assert_eq!(alerts[0].timestamp, events[0].timestamp);
    }
}
