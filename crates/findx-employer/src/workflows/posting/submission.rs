use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{DraftId, EmployerIdentity};
use super::draft::JobDraft;
use super::payload::{JobCreationPayload, PaymentContext};
use super::pricing::{LineItem, Money, PriceQuote};
use super::validation::ValidationError;

/// Checkout request handed to the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: Money,
    pub currency: String,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub reference: String,
    pub amount: Money,
    pub currency: String,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success(PaymentConfirmation),
    Failure { reason: String },
    Cancelled,
}

/// Checkout collaborator; resolves once the employer finishes or abandons payment.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn collect(&self, request: PaymentRequest) -> PaymentOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedJob {
    pub job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobCreationError {
    #[error("job board temporarily unavailable: {0}")]
    Transient(String),
    #[error("job board rejected the posting: {0}")]
    Rejected(String),
}

impl JobCreationError {
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Backend call that publishes a paid posting.
#[async_trait]
pub trait JobCreationClient: Send + Sync {
    async fn create_job(
        &self,
        payload: &JobCreationPayload,
    ) -> Result<CreatedJob, JobCreationError>;
}

/// Bounded exponential backoff for the job-creation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
            max_backoff: Duration::from_secs(8),
        }
    }

    pub const fn no_delay(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Delay before retrying after the given 1-based attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

/// Frozen copy of a draft taken when submission starts.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub(crate) draft_id: DraftId,
    pub(crate) employer: EmployerIdentity,
    pub(crate) draft: JobDraft,
    pub(crate) quote: PriceQuote,
    pub(crate) currency: String,
    pub(crate) prior_payment: Option<PaymentConfirmation>,
    pub(crate) started_at: DateTime<Utc>,
}

impl PendingSubmission {
    pub fn draft_id(&self) -> DraftId {
        self.draft_id
    }

    pub fn employer(&self) -> &EmployerIdentity {
        &self.employer
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    pub fn prior_payment(&self) -> Option<&PaymentConfirmation> {
        self.prior_payment.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn payment_request(&self) -> PaymentRequest {
        PaymentRequest {
            amount: self.quote.total,
            currency: self.currency.clone(),
            line_items: self.quote.line_items.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Created {
        confirmation: PaymentConfirmation,
        job: CreatedJob,
        attempts: u32,
    },
    CreationFailed {
        confirmation: PaymentConfirmation,
        error: JobCreationError,
        attempts: u32,
    },
    Declined {
        reason: String,
    },
    Cancelled,
}

/// Result of running the pipeline, to be folded back into the wizard.
#[derive(Debug, Clone)]
pub struct SubmissionAttempt {
    pub(crate) pending: PendingSubmission,
    pub(crate) outcome: AttemptOutcome,
}

impl SubmissionAttempt {
    pub fn pending(&self) -> &PendingSubmission {
        &self.pending
    }

    pub fn outcome(&self) -> &AttemptOutcome {
        &self.outcome
    }
}

/// Payment then job creation, run without holding any wizard lock.
pub struct SubmissionPipeline<P, J> {
    payments: Arc<P>,
    jobs: Arc<J>,
    retry: RetryPolicy,
}

impl<P, J> SubmissionPipeline<P, J>
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    pub fn new(payments: Arc<P>, jobs: Arc<J>, retry: RetryPolicy) -> Self {
        Self {
            payments,
            jobs,
            retry,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub async fn run(&self, pending: PendingSubmission) -> SubmissionAttempt {
        let confirmation = match pending.prior_payment.clone() {
            Some(confirmation) => {
                info!(
                    draft_id = %pending.draft_id,
                    payment_reference = %confirmation.reference,
                    "reusing confirmed payment for job creation retry"
                );
                confirmation
            }
            None => match self.payments.collect(pending.payment_request()).await {
                PaymentOutcome::Success(confirmation) => confirmation,
                PaymentOutcome::Failure { reason } => {
                    return SubmissionAttempt {
                        pending,
                        outcome: AttemptOutcome::Declined { reason },
                    }
                }
                PaymentOutcome::Cancelled => {
                    return SubmissionAttempt {
                        pending,
                        outcome: AttemptOutcome::Cancelled,
                    }
                }
            },
        };

        let payload = JobCreationPayload::from_draft(
            &pending.draft,
            PaymentContext {
                draft_id: pending.draft_id,
                employer_id: &pending.employer.employer_id,
                payment_reference: &confirmation.reference,
                amount_paid: confirmation.amount,
            },
        );

        let max_attempts = self.retry.attempts();
        let mut attempt = 0;
        let outcome = loop {
            attempt += 1;
            match self.jobs.create_job(&payload).await {
                Ok(job) => {
                    break AttemptOutcome::Created {
                        confirmation,
                        job,
                        attempts: attempt,
                    }
                }
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    warn!(
                        draft_id = %pending.draft_id,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "job creation failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => {
                    break AttemptOutcome::CreationFailed {
                        confirmation,
                        error,
                        attempts: attempt,
                    }
                }
            }
        };

        SubmissionAttempt { pending, outcome }
    }
}

/// Signal that the posting is live and the client should navigate away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub draft_id: DraftId,
    pub job_id: String,
    pub payment_reference: String,
    pub amount: Money,
    pub attempts: u32,
    pub redirect_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("payment was declined: {reason}")]
    Declined { reason: String },
    #[error("payment was cancelled")]
    Cancelled,
}

/// Money has moved but the posting was not created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("job creation failed after payment {payment_reference} ({amount}) was confirmed: {cause}")]
pub struct SubmissionAfterPaymentError {
    pub draft_id: DraftId,
    pub payment_reference: String,
    pub amount: Money,
    pub attempts: u32,
    pub cause: String,
    pub support_message: String,
    pub occurred_at: DateTime<Utc>,
}

impl SubmissionAfterPaymentError {
    pub const KIND: &'static str = "submission_after_payment";

    pub(crate) fn new(
        draft_id: DraftId,
        confirmation: &PaymentConfirmation,
        attempts: u32,
        cause: &JobCreationError,
    ) -> Self {
        Self {
            draft_id,
            payment_reference: confirmation.reference.clone(),
            amount: confirmation.amount,
            attempts,
            cause: cause.to_string(),
            support_message: format!(
                "Your payment was received but the job could not be published. \
                 Please contact FindX support quoting payment reference {}. \
                 You will not be charged again if you retry.",
                confirmation.reference
            ),
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("an authenticated employer is required to submit a job")]
    Unauthenticated,
    #[error("a submission is already in progress for this draft")]
    AlreadySubmitting,
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    AfterPayment(#[from] SubmissionAfterPaymentError),
    #[error("submission for {attempted} does not belong to the current draft {current}")]
    StaleAttempt { attempted: DraftId, current: DraftId },
}
