use async_trait::async_trait;

use crate::domain::user::events::AuditEvent;
use crate::domain::user::events::AuditKind;
use crate::domain::user::ports::AuditLog;
use crate::user::errors::AuditError;

/// Audit sink that writes structured records to the tracing pipeline.
///
/// Every record carries the event id, event type, and the event's own
/// fields under the `audit` target, so subscribers can route the audit
/// trail separately from application logs. Attempts and successes are
/// recorded at info, failures and rejections at warn.
pub struct TracingAuditLog;

impl TracingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditError> {
        match &event.kind {
            AuditKind::RegistrationAttempted { email, username } => {
                tracing::info!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    email = %email,
                    username = %username,
                    "Registration attempted"
                );
            }
            AuditKind::RegistrationSucceeded {
                user_id,
                email,
                username,
            } => {
                tracing::info!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    user_id = user_id,
                    email = %email,
                    username = %username,
                    "Registration succeeded"
                );
            }
            AuditKind::RegistrationRejected {
                email,
                username,
                reason,
            } => {
                tracing::warn!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    email = %email,
                    username = %username,
                    reason = reason.as_str(),
                    "Registration rejected"
                );
            }
            AuditKind::LoginAttempted { email } => {
                tracing::info!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    email = %email,
                    "Login attempted"
                );
            }
            AuditKind::LoginSucceeded { email } => {
                tracing::info!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    email = %email,
                    "Login succeeded"
                );
            }
            AuditKind::LoginFailed { email, reason } => {
                tracing::warn!(
                    target: "audit",
                    event_id = %event.event_id,
                    event_type = event.event_type(),
                    occurred_at = %event.occurred_at,
                    email = %email,
                    reason = reason.as_str(),
                    "Login failed"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::events::LoginFailure;
    use crate::domain::user::models::EmailAddress;

    #[tokio::test]
    async fn test_record_never_fails() {
        let audit_log = TracingAuditLog::new();
        let email = EmailAddress::new("test@example.com".to_string()).unwrap();

        let attempted = AuditEvent::login_attempted(&email);
        let failed = AuditEvent::login_failed(&email, LoginFailure::WrongPassword);

        assert!(audit_log.record(&attempted).await.is_ok());
        assert!(audit_log.record(&failed).await.is_ok());
    }

    #[tokio::test]
    async fn test_events_get_distinct_ids() {
        let email = EmailAddress::new("test@example.com".to_string()).unwrap();

        let first = AuditEvent::login_attempted(&email);
        let second = AuditEvent::login_attempted(&email);

        assert_ne!(first.event_id, second.event_id);
        assert_eq!(first.event_type(), "login_attempted");
    }
}
