use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::workflows::posting::{
    posting_router, CreatedJob, DraftUpdate, EmployerIdentity, JobCreationClient,
    JobCreationError, JobCreationPayload, JobPostingService, JobPostingWizard, Money,
    NotificationChannel, NotificationReach, PayType, PaymentConfirmation, PaymentGateway,
    PaymentOutcome, PaymentRequest, PostingCatalog, RetryPolicy, SubmissionPipeline, WorkType,
    WorkspaceMode,
};
use crate::workflows::taxonomy::UnmappedCategoryPolicy;

pub(super) const LEGAL_ADMISSION: &str = "Are you admitted to practise?";
pub(super) const LEGAL_AREAS: &str = "Which areas of law have you practised?";
pub(super) const START_DATE: &str = "When are you available to start?";
pub(super) const MOTIVATION: &str = "Why are you interested in this role?";

pub(super) fn catalog() -> Arc<PostingCatalog> {
    Arc::new(PostingCatalog::standard(UnmappedCategoryPolicy::ShowAll))
}

pub(super) fn employer() -> EmployerIdentity {
    EmployerIdentity {
        employer_id: "emp-1024".to_string(),
        company_name: Some("Harbour Legal".to_string()),
    }
}

pub(super) fn classification_updates() -> Vec<DraftUpdate> {
    vec![
        DraftUpdate::Title("Conveyancing Clerk".to_string()),
        DraftUpdate::Location("Brisbane QLD".to_string()),
        DraftUpdate::Workspace(Some(WorkspaceMode::Hybrid)),
        DraftUpdate::Category("Legal".to_string()),
        DraftUpdate::Subcategory("Conveyancing".to_string()),
        DraftUpdate::WorkType(Some(WorkType::FullTime)),
        DraftUpdate::PayType(Some(PayType::AnnualSalary)),
        DraftUpdate::Currency("aud".to_string()),
        DraftUpdate::SalaryFrom(Some(65_000)),
        DraftUpdate::SalaryTo(Some(75_000)),
        DraftUpdate::ShowSalary(true),
    ]
}

pub(super) fn classified_wizard() -> JobPostingWizard {
    let mut wizard = JobPostingWizard::new(catalog());
    for update in classification_updates() {
        wizard.update(update).expect("classification update applies");
    }
    wizard
}

/// A wizard whose draft would pass every gate and costs 223.00.
pub(super) fn ready_wizard() -> JobPostingWizard {
    let mut wizard = classified_wizard();
    for update in [
        DraftUpdate::ImmediateStart(true),
        DraftUpdate::NotificationChannel(NotificationChannel::Both),
        DraftUpdate::NotificationReach(NotificationReach::Reach250),
        DraftUpdate::Description("Support settlements from contract to completion.".to_string()),
        DraftUpdate::Summary("Busy property team".to_string()),
        DraftUpdate::ShortDescription("Hybrid, Settlements, Growth".to_string()),
        DraftUpdate::ShowShortDescription(true),
    ] {
        wizard.update(update).expect("content update applies");
    }

    wizard.select_question(LEGAL_ADMISSION).expect("legal question");
    wizard.set_mandatory(LEGAL_ADMISSION, true).expect("mandatory");
    wizard
        .toggle_option(LEGAL_ADMISSION, "Admitted, not practising")
        .expect("option");
    wizard
        .toggle_option(LEGAL_ADMISSION, "Yes, holding a current practising certificate")
        .expect("option");
    wizard.select_question(MOTIVATION).expect("free-form question");
    wizard
}

pub(super) fn confirmation(reference: &str, amount: Money) -> PaymentConfirmation {
    PaymentConfirmation {
        reference: reference.to_string(),
        amount,
        currency: "USD".to_string(),
        confirmed_at: Utc::now(),
    }
}

/// Payment collaborator returning queued outcomes, succeeding once the queue is empty.
#[derive(Default, Clone)]
pub(super) struct ScriptedPayments {
    outcomes: Arc<Mutex<VecDeque<PaymentOutcome>>>,
    requests: Arc<Mutex<Vec<PaymentRequest>>>,
}

impl ScriptedPayments {
    pub(super) fn with_outcomes(outcomes: Vec<PaymentOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            requests: Arc::default(),
        }
    }

    pub(super) fn requests(&self) -> Vec<PaymentRequest> {
        self.requests.lock().expect("payment mutex poisoned").clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedPayments {
    async fn collect(&self, request: PaymentRequest) -> PaymentOutcome {
        let amount = request.amount;
        let sequence = {
            let mut requests = self.requests.lock().expect("payment mutex poisoned");
            requests.push(request);
            requests.len()
        };

        self.outcomes
            .lock()
            .expect("payment mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                PaymentOutcome::Success(confirmation(&format!("pay-{sequence:04}"), amount))
            })
    }
}

/// Job board returning queued results, creating jobs once the queue is empty.
#[derive(Default, Clone)]
pub(super) struct ScriptedJobBoard {
    results: Arc<Mutex<VecDeque<Result<CreatedJob, JobCreationError>>>>,
    payloads: Arc<Mutex<Vec<JobCreationPayload>>>,
}

impl ScriptedJobBoard {
    pub(super) fn with_results(results: Vec<Result<CreatedJob, JobCreationError>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            payloads: Arc::default(),
        }
    }

    pub(super) fn payloads(&self) -> Vec<JobCreationPayload> {
        self.payloads.lock().expect("job board mutex poisoned").clone()
    }
}

#[async_trait]
impl JobCreationClient for ScriptedJobBoard {
    async fn create_job(
        &self,
        payload: &JobCreationPayload,
    ) -> Result<CreatedJob, JobCreationError> {
        let sequence = {
            let mut payloads = self.payloads.lock().expect("job board mutex poisoned");
            payloads.push(payload.clone());
            payloads.len()
        };

        self.results
            .lock()
            .expect("job board mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Ok(CreatedJob {
                    job_id: format!("job-{sequence:04}"),
                })
            })
    }
}

pub(super) fn transient(reason: &str) -> Result<CreatedJob, JobCreationError> {
    Err(JobCreationError::Transient(reason.to_string()))
}

pub(super) fn pipeline(
    payments: &ScriptedPayments,
    jobs: &ScriptedJobBoard,
    max_attempts: u32,
) -> SubmissionPipeline<ScriptedPayments, ScriptedJobBoard> {
    SubmissionPipeline::new(
        Arc::new(payments.clone()),
        Arc::new(jobs.clone()),
        RetryPolicy::no_delay(max_attempts),
    )
}

pub(super) fn build_service(
    payments: &ScriptedPayments,
    jobs: &ScriptedJobBoard,
) -> Arc<JobPostingService<ScriptedPayments, ScriptedJobBoard>> {
    Arc::new(JobPostingService::new(
        catalog(),
        Arc::new(pipeline(payments, jobs, 3)),
        "USD",
    ))
}

pub(super) fn router_with_service(
    service: Arc<JobPostingService<ScriptedPayments, ScriptedJobBoard>>,
) -> axum::Router {
    posting_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
