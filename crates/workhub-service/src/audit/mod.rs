//! Audit event recording.

pub mod recorder;

pub use recorder::AuditRecorder;
