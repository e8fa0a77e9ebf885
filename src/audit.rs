//! Combined audit: strength evaluation and breach check side by side.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachResult, RangeSource};
use crate::corpus::CommonPasswordSet;
use crate::evaluator::evaluate_password_strength;
use crate::report::ScoreReport;

/// Both axes of a password audit. Neither result influences the other.
#[derive(Debug)]
pub struct AuditReport {
    pub strength: ScoreReport,
    pub breach: BreachResult,
}

impl AuditReport {
    /// `Some(true)` when the password was seen in a breach, `None` when the
    /// breach check was inconclusive.
    pub fn is_breached(&self) -> Option<bool> {
        self.breach.as_ref().ok().map(|count| *count > 0)
    }
}

/// Runs the strength evaluation and the breach check concurrently.
pub async fn audit_password<S: RangeSource>(
    password: &SecretString,
    common: &CommonPasswordSet,
    checker: &BreachChecker<S>,
) -> AuditReport {
    let (strength, breach) = tokio::join!(
        async { evaluate_password_strength(password, common) },
        checker.check_breach(password),
    );
    AuditReport { strength, breach }
}

/// Async version that sends the audit result via channel.
///
/// Cancelling `token` abandons the breach check only; the strength report
/// is still delivered.
pub async fn audit_password_tx<S: RangeSource>(
    password: &SecretString,
    common: &CommonPasswordSet,
    checker: &BreachChecker<S>,
    token: CancellationToken,
    tx: mpsc::Sender<AuditReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password audit is about to start...");

    let (strength, breach) = tokio::join!(
        async { evaluate_password_strength(password, common) },
        checker.check_breach_with_cancel(password, &token),
    );

    if let Err(_e) = tx.send(AuditReport { strength, breach }).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password audit result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::{BreachError, HashPrefix, StaticRangeSource};
    use crate::report::StrengthCategory;
    use std::future::Future;
    use std::time::Duration;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn checker() -> BreachChecker<StaticRangeSource> {
        let source = StaticRangeSource::new().with_range(
            HashPrefix::parse("5BAA6").unwrap(),
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3\n",
        );
        BreachChecker::new(source)
    }

    struct HangingSource;

    impl RangeSource for HangingSource {
        fn fetch_range(&self, _prefix: &HashPrefix) -> impl Future<Output = Result<String, BreachError>> + Send {
            std::future::pending()
        }
    }

    #[tokio::test]
    async fn test_audit_breached_common_password() {
        let common: CommonPasswordSet = ["password"].into_iter().collect();
        let report = audit_password(&secret("password"), &common, &checker()).await;

        assert_eq!(report.strength.category, StrengthCategory::VeryWeak);
        assert_eq!(report.breach.as_ref().ok(), Some(&3));
        assert_eq!(report.is_breached(), Some(true));
    }

    #[tokio::test]
    async fn test_audit_clean_password() {
        let report = audit_password(&secret("Password1"), &CommonPasswordSet::empty(), &checker()).await;

        assert_eq!(report.strength.category, StrengthCategory::Medium);
        assert_eq!(report.is_breached(), Some(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_audit_breach_failure_keeps_strength() {
        let checker = BreachChecker::new(HangingSource).with_timeout(Duration::from_millis(50));
        let report = audit_password(&secret("Password1"), &CommonPasswordSet::empty(), &checker).await;

        assert_eq!(report.strength.score, 4);
        assert!(matches!(report.breach, Err(BreachError::Timeout { .. })));
        assert_eq!(report.is_breached(), None);
    }

    #[tokio::test]
    async fn test_audit_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        audit_password_tx(&secret("password"), &CommonPasswordSet::empty(), &checker(), token, tx).await;

        let report = rx.recv().await.expect("Should receive audit report");
        assert_eq!(report.is_breached(), Some(true));
    }

    #[tokio::test]
    async fn test_audit_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let checker = BreachChecker::new(HangingSource);
        audit_password_tx(&secret("Password1"), &CommonPasswordSet::empty(), &checker, token, tx).await;

        let report = rx.recv().await.expect("Should receive audit report");
        assert_eq!(report.strength.category, StrengthCategory::Medium);
        assert!(matches!(report.breach, Err(BreachError::Cancelled)));
    }

    #[tokio::test]
    async fn test_audit_password_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        audit_password_tx(
            &secret("Password1"),
            &CommonPasswordSet::empty(),
            &checker(),
            CancellationToken::new(),
            tx,
        )
        .await;
    }
}
