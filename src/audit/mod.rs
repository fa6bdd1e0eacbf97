//! Audit trail collaborator interface.
//!
//! The transport layer records an entry after each successful administrative
//! operation. The sink sits entirely outside the core call graph: services
//! never invoke it, so core behavior and core tests carry no audit
//! dependency, and a sink failure can never block the operation it trails.

use async_trait::async_trait;
use tracing::info;

/// One audit trail entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Admin who performed the operation.
    pub operator_id: i32,
    /// Operation identifier, e.g. `approve_reservation`.
    pub action: String,
    /// Free-form description of what changed.
    pub detail: String,
    /// Client address, when the transport knows one.
    pub ip: Option<String>,
}

/// Destination for audit entries.
///
/// Implementations must swallow their own failures; recording is strictly
/// fire-and-forget.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Records one entry.
    async fn record(&self, entry: AuditEntry);
}

/// Audit sink that emits entries as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, entry: AuditEntry) {
        info!(
            operator_id = entry.operator_id,
            action = %entry.action,
            detail = %entry.detail,
            ip = entry.ip.as_deref().unwrap_or("-"),
            "audit"
        );
    }
}
