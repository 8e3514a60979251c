//! Fire-and-forget audit recorder.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use workhub_core::events::DomainEvent;
use workhub_core::traits::AuditSink;
use workhub_database::repositories::audit::AuditLogRepository;
use workhub_entity::audit::model::CreateAuditLogEntry;

/// Writes domain events to the audit log without ever blocking or
/// failing the operation that emitted them.
///
/// The write happens on a spawned task; failures are logged and dropped.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    repo: Arc<AuditLogRepository>,
}

impl AuditRecorder {
    /// Creates a new audit recorder.
    pub fn new(repo: Arc<AuditLogRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AuditSink for AuditRecorder {
    async fn record(&self, actor_id: Option<Uuid>, tenant_id: Option<Uuid>, event: DomainEvent) {
        let repo = Arc::clone(&self.repo);
        let action = event.action().to_string();
        let details = match serde_json::to_value(&event) {
            Ok(v) => v,
            Err(e) => {
                warn!(action = %action, error = %e, "Failed to serialize audit event");
                return;
            }
        };

        tokio::spawn(async move {
            let entry = CreateAuditLogEntry {
                actor_id,
                tenant_id,
                action: action.clone(),
                details,
            };
            if let Err(e) = repo.create(&entry).await {
                warn!(action = %action, error = %e, "Failed to write audit entry");
            }
        });
    }
}
