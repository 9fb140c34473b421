//! Job-posting wizard: draft state, stage gates, pricing and paid submission.

mod catalog;
pub mod domain;
pub mod draft;
pub mod payload;
pub mod pricing;
mod review;
pub mod router;
mod service;
pub mod submission;
pub mod validation;
mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::PostingCatalog;
pub use domain::{
    DraftId, EmployerIdentity, NotificationChannel, NotificationReach, PayType, UnsupportedReach,
    WizardStage, WorkType, WorkspaceMode,
};
pub use draft::{
    AdTypeSelection, Classification, DraftField, DraftUpdate, JobContent, JobDraft, KeywordInput,
    QuestionSelection, MAX_SELLING_POINTS,
};
pub use payload::{ApplicationQuestion, JobCreationPayload, GENERIC_OPTIONS};
pub use pricing::{compute_total, quote, LineItem, Money, NotificationTier, PriceQuote, PriceTable};
pub use review::{ContentWarning, DraftReview};
pub use router::{catalog_router, posting_router};
pub use service::{
    JobPostingService, PostingServiceError, SessionId, SessionView, DEFAULT_SESSION_TTL,
};
pub use submission::{
    AttemptOutcome, CreatedJob, JobCreationClient, JobCreationError, PaymentConfirmation,
    PaymentError, PaymentGateway, PaymentOutcome, PaymentRequest, PendingSubmission, RetryPolicy,
    SubmissionAfterPaymentError, SubmissionAttempt, SubmissionError, SubmissionPipeline,
    SubmissionReceipt,
};
pub use validation::{FieldErrors, ValidationError};
pub use wizard::{JobPostingWizard, QuestionCommand, WizardSnapshot};
