use async_trait::async_trait;
use chrono::Utc;
use findx_employer::workflows::broadcast::{
    BroadcastMessage, DeliveryStatus, PushSink, PushTransportError, TokenStatus,
};
use findx_employer::workflows::posting::{
    CreatedJob, JobCreationClient, JobCreationError, JobCreationPayload, NotificationChannel,
    NotificationReach, PaymentConfirmation, PaymentGateway, PaymentOutcome, PaymentRequest,
};
use findx_employer::workflows::taxonomy::UnmappedCategoryPolicy;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Approves every charge; stands in for the hosted checkout until it is wired up.
#[derive(Debug, Default)]
pub(crate) struct SimulatedPaymentGateway {
    sequence: AtomicU64,
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn collect(&self, request: PaymentRequest) -> PaymentOutcome {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let reference = format!("sim_{sequence:06}");
        info!(
            %reference,
            amount = %request.amount,
            currency = %request.currency,
            line_items = request.line_items.len(),
            "simulated payment approved"
        );
        PaymentOutcome::Success(PaymentConfirmation {
            reference,
            amount: request.amount,
            currency: request.currency,
            confirmed_at: Utc::now(),
        })
    }
}

/// Keeps published postings in memory and hands out sequential job ids.
#[derive(Debug, Default)]
pub(crate) struct InMemoryJobBoard {
    jobs: Mutex<Vec<JobCreationPayload>>,
}

impl InMemoryJobBoard {
    pub(crate) fn published(&self) -> Vec<JobCreationPayload> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl JobCreationClient for InMemoryJobBoard {
    async fn create_job(
        &self,
        payload: &JobCreationPayload,
    ) -> Result<CreatedJob, JobCreationError> {
        if payload.title.trim().is_empty() {
            return Err(JobCreationError::Rejected("title is required".to_string()));
        }

        let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        jobs.push(payload.clone());
        let job_id = format!("FX-{:05}", jobs.len());
        info!(%job_id, draft_id = %payload.draft_id, "job published");
        Ok(CreatedJob { job_id })
    }
}

/// Logs each batch instead of calling a push provider.
#[derive(Debug, Default)]
pub(crate) struct LoggingPushSink;

#[async_trait]
impl PushSink for LoggingPushSink {
    async fn send(
        &self,
        message: &BroadcastMessage,
        tokens: &[String],
    ) -> Result<Vec<TokenStatus>, PushTransportError> {
        info!(title = %message.title, recipients = tokens.len(), "push batch dispatched");
        Ok(tokens
            .iter()
            .map(|token| TokenStatus::new(token.clone(), DeliveryStatus::Delivered))
            .collect())
    }
}

pub(crate) fn parse_channel(raw: &str) -> Result<NotificationChannel, String> {
    NotificationChannel::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of none, app, email, both"))
}

pub(crate) fn parse_reach(raw: &str) -> Result<NotificationReach, String> {
    let candidates: u32 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a candidate count ({err})"))?;
    NotificationReach::try_from(candidates).map_err(|err| err.to_string())
}

pub(crate) fn parse_policy(raw: &str) -> Result<UnmappedCategoryPolicy, String> {
    UnmappedCategoryPolicy::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of show_all, show_none"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use findx_employer::workflows::posting::Money;

    #[tokio::test]
    async fn simulated_payments_issue_distinct_references() {
        let gateway = SimulatedPaymentGateway::default();
        let request = PaymentRequest {
            amount: Money::from_minor(4900),
            currency: "USD".to_string(),
            line_items: Vec::new(),
        };

        let first = gateway.collect(request.clone()).await;
        let second = gateway.collect(request).await;
        match (first, second) {
            (PaymentOutcome::Success(a), PaymentOutcome::Success(b)) => {
                assert_eq!(a.reference, "sim_000001");
                assert_eq!(b.reference, "sim_000002");
                assert_eq!(a.amount, Money::from_minor(4900));
            }
            other => panic!("expected two approvals, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn logging_sink_reports_every_token_delivered() {
        let message = BroadcastMessage::new("Hello", "World");
        let statuses = LoggingPushSink
            .send(&message, &["a".to_string(), "b".to_string()])
            .await
            .expect("sink never fails");
        assert!(statuses
            .iter()
            .all(|status| status.status == DeliveryStatus::Delivered));
    }

    #[test]
    fn reach_parser_only_accepts_offered_tiers() {
        assert_eq!(parse_reach("750"), Ok(NotificationReach::Reach750));
        assert!(parse_reach("42").is_err());
        assert!(parse_reach("many").is_err());
        assert_eq!(parse_channel(" App "), Ok(NotificationChannel::App));
        assert!(parse_policy("sometimes").is_err());
    }
}
