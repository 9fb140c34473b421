use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::PostingCatalog;
use super::domain::{EmployerIdentity, WizardStage};
use super::draft::{AdTypeSelection, DraftUpdate};
use super::pricing::quote;
use super::service::{JobPostingService, PostingServiceError, SessionId};
use super::submission::{
    JobCreationClient, PaymentError, PaymentGateway, SubmissionAfterPaymentError, SubmissionError,
};
use super::validation::ValidationError;
use super::wizard::QuestionCommand;

pub const EMPLOYER_ID_HEADER: &str = "x-employer-id";
pub const COMPANY_NAME_HEADER: &str = "x-company-name";

/// Router exposing the posting wizard sessions.
pub fn posting_router<P, J>(service: Arc<JobPostingService<P, J>>) -> Router
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    Router::new()
        .route("/api/v1/postings", post(open_handler::<P, J>))
        .route(
            "/api/v1/postings/:session_id",
            get(session_handler::<P, J>).delete(close_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/draft",
            patch(update_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/stage",
            post(stage_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/questions",
            post(question_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/clear",
            post(clear_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/review",
            get(review_handler::<P, J>),
        )
        .route(
            "/api/v1/postings/:session_id/submit",
            post(submit_handler::<P, J>),
        )
        .with_state(service)
}

/// Router exposing read-only reference data and the price calculator.
pub fn catalog_router(catalog: Arc<PostingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/categories", get(categories_handler))
        .route("/api/v1/taxonomy/sections", get(sections_handler))
        .route("/api/v1/pricing", get(price_table_handler))
        .route("/api/v1/pricing/quote", post(quote_handler))
        .with_state(catalog)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StageRequest {
    stage: WizardStage,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SectionsQuery {
    #[serde(default)]
    category: String,
}

pub(crate) async fn open_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    let view = service.open();
    (StatusCode::CREATED, axum::Json(view)).into_response()
}

pub(crate) async fn session_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.get(id))
}

pub(crate) async fn close_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    let Some(id) = parse_session(&session_id) else {
        return unknown_session(&session_id);
    };
    match service.close(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
    axum::Json(update): axum::Json<DraftUpdate>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.update(id, update))
}

pub(crate) async fn stage_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<StageRequest>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.go_to(id, request.stage))
}

pub(crate) async fn question_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
    axum::Json(command): axum::Json<QuestionCommand>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.question(id, command))
}

pub(crate) async fn clear_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.clear(id))
}

pub(crate) async fn review_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    with_session(&session_id, |id| service.review(id))
}

pub(crate) async fn submit_handler<P, J>(
    State(service): State<Arc<JobPostingService<P, J>>>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    let Some(id) = parse_session(&session_id) else {
        return unknown_session(&session_id);
    };

    match service.submit(id, employer_from_headers(&headers)).await {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn categories_handler(State(catalog): State<Arc<PostingCatalog>>) -> Response {
    let payload = json!({
        "categories": catalog.job_categories().categories(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn sections_handler(
    State(catalog): State<Arc<PostingCatalog>>,
    Query(query): Query<SectionsQuery>,
) -> Response {
    let sections = catalog.mapper().sections_for_category(&query.category);
    (StatusCode::OK, axum::Json(sections)).into_response()
}

pub(crate) async fn price_table_handler(State(catalog): State<Arc<PostingCatalog>>) -> Response {
    (StatusCode::OK, axum::Json(catalog.prices().clone())).into_response()
}

pub(crate) async fn quote_handler(
    State(catalog): State<Arc<PostingCatalog>>,
    axum::Json(selection): axum::Json<AdTypeSelection>,
) -> Response {
    let quote = quote(catalog.prices(), &selection);
    (StatusCode::OK, axum::Json(quote)).into_response()
}

/// Authentication happens upstream; the gateway forwards the employer id as a header.
pub fn employer_from_headers(headers: &HeaderMap) -> Option<EmployerIdentity> {
    let employer_id = headers
        .get(EMPLOYER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())?;

    let company_name = headers
        .get(COMPANY_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    Some(EmployerIdentity {
        employer_id: employer_id.to_string(),
        company_name,
    })
}

fn with_session<T, F>(raw: &str, action: F) -> Response
where
    T: serde::Serialize,
    F: FnOnce(SessionId) -> Result<T, PostingServiceError>,
{
    let Some(id) = parse_session(raw) else {
        return unknown_session(raw);
    };
    match action(id) {
        Ok(body) => (StatusCode::OK, axum::Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

fn parse_session(raw: &str) -> Option<SessionId> {
    raw.parse().ok()
}

fn unknown_session(raw: &str) -> Response {
    let payload = json!({
        "error": format!("posting session {raw} was not found"),
        "kind": "unknown_session",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

pub(crate) fn error_response(error: PostingServiceError) -> Response {
    match error {
        PostingServiceError::UnknownSession(id) => unknown_session(&id.to_string()),
        PostingServiceError::SubmissionInFlight => conflict("submission_in_flight", &error),
        PostingServiceError::PipelineAborted(_) => {
            let payload = json!({
                "error": error.to_string(),
                "kind": "pipeline_aborted",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        PostingServiceError::Validation(validation)
        | PostingServiceError::Submission(SubmissionError::Validation(validation)) => {
            validation_response(validation)
        }
        PostingServiceError::Submission(submission) => submission_response(submission),
    }
}

fn validation_response(error: ValidationError) -> Response {
    let mut payload = json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });
    match &error {
        ValidationError::MissingFields(fields) => payload["fields"] = json!(fields),
        ValidationError::QuestionsMissingOptions(questions) => {
            payload["questions"] = json!(questions)
        }
        _ => {}
    }
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

fn submission_response(error: SubmissionError) -> Response {
    match error {
        SubmissionError::Validation(validation) => validation_response(validation),
        SubmissionError::Unauthenticated => {
            let payload = json!({
                "error": error.to_string(),
                "kind": "unauthenticated",
            });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        SubmissionError::AlreadySubmitting => conflict("already_submitting", &error),
        SubmissionError::StaleAttempt { .. } => conflict("stale_attempt", &error),
        SubmissionError::Payment(payment) => {
            let kind = match payment {
                PaymentError::Declined { .. } => "payment_declined",
                PaymentError::Cancelled => "payment_cancelled",
            };
            let payload = json!({
                "error": payment.to_string(),
                "kind": kind,
            });
            (StatusCode::PAYMENT_REQUIRED, axum::Json(payload)).into_response()
        }
        SubmissionError::AfterPayment(failure) => {
            let payload = json!({
                "error": failure.to_string(),
                "kind": SubmissionAfterPaymentError::KIND,
                "support_message": failure.support_message,
                "details": failure,
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

fn conflict(kind: &str, error: &dyn std::error::Error) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "kind": kind,
    });
    (StatusCode::CONFLICT, axum::Json(payload)).into_response()
}
