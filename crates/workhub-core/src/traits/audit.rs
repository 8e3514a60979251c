//! Audit sink capability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::events::DomainEvent;

/// Receives security-relevant domain events.
///
/// Emission is best-effort: implementations must swallow their own failures
/// (logging them) and must never block or fail the operation that emitted
/// the event. Callers treat `record` as fire-and-forget.
#[async_trait]
pub trait AuditSink: Send + Sync + 'static {
    /// Record an event attributed to `actor_id`, optionally scoped to a tenant.
    async fn record(&self, actor_id: Option<Uuid>, tenant_id: Option<Uuid>, event: DomainEvent);
}

/// An audit sink that drops every event. Used in tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct NullAuditSink;

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn record(&self, _actor_id: Option<Uuid>, _tenant_id: Option<Uuid>, _event: DomainEvent) {}
}
