//! In-memory core of the DailySOC digest pipeline.
//!
//! Turns security log events into triaged alerts and splits the
//! free-form AI explanation written for each alert into the report
//! sections a digest renderer displays. Reading the event log, calling
//! the text generator, and writing or rendering reports all live in the
//! surrounding layers; this crate only transforms values it is handed.

pub mod alert;
pub mod digest;
pub mod event;
pub mod explain;
pub mod triage;

pub use alert::{Alert, ParseSeverityError, Severity};
pub use digest::{AlertReport, Digest, DigestSummary};
pub use event::SecurityEvent;
pub use explain::{parse_explanation, ParsedExplanation};
pub use triage::triage;
