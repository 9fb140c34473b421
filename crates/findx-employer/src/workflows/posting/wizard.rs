use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::catalog::PostingCatalog;
use super::domain::{DraftId, EmployerIdentity, WizardStage};
use super::draft::{DraftUpdate, JobDraft};
use super::pricing::{quote, PriceQuote};
use super::review::DraftReview;
use super::submission::{
    AttemptOutcome, PaymentConfirmation, PaymentError, PendingSubmission,
    SubmissionAfterPaymentError, SubmissionAttempt, SubmissionError, SubmissionReceipt,
};
use super::validation::{
    questions_missing_options, validate_classification, FieldErrors, ValidationError,
};
use crate::workflows::taxonomy::{Question, QuestionSections};

/// Screening-question edits, kept separate from plain field updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QuestionCommand {
    Select { question: String },
    Deselect { question: String },
    SetMandatory { question: String, mandatory: bool },
    ToggleOption { question: String, option: String },
    SetOptions { question: String, options: Vec<String> },
}

/// Serializable view of a wizard for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub draft_id: DraftId,
    pub created_at: DateTime<Utc>,
    pub stage: WizardStage,
    pub draft: JobDraft,
    pub field_errors: FieldErrors,
    pub question_errors: Vec<String>,
    pub submitting: bool,
    pub quote: PriceQuote,
    pub payment: Option<PaymentConfirmation>,
}

/// State machine driving one employer through the posting stages.
#[derive(Debug, Clone)]
pub struct JobPostingWizard {
    catalog: Arc<PostingCatalog>,
    draft_id: DraftId,
    created_at: DateTime<Utc>,
    stage: WizardStage,
    draft: JobDraft,
    field_errors: FieldErrors,
    question_errors: Vec<String>,
    submitting: bool,
    payment: Option<PaymentConfirmation>,
}

impl JobPostingWizard {
    pub fn new(catalog: Arc<PostingCatalog>) -> Self {
        Self {
            catalog,
            draft_id: DraftId::new(),
            created_at: Utc::now(),
            stage: WizardStage::Classify,
            draft: JobDraft::default(),
            field_errors: FieldErrors::default(),
            question_errors: Vec::new(),
            submitting: false,
            payment: None,
        }
    }

    pub fn catalog(&self) -> &PostingCatalog {
        &self.catalog
    }

    pub fn draft_id(&self) -> DraftId {
        self.draft_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn question_errors(&self) -> &[String] {
        &self.question_errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn confirmed_payment(&self) -> Option<&PaymentConfirmation> {
        self.payment.as_ref()
    }

    pub fn update(&mut self, update: DraftUpdate) -> Result<(), ValidationError> {
        let field = update.field();
        if field.is_ad_type() && self.payment.is_some() {
            return Err(ValidationError::AdTypesLocked);
        }

        self.draft.apply(update, self.catalog.job_categories())?;
        self.field_errors.remove(field);
        Ok(())
    }

    /// Move to `target`; forward moves are gated by the stage validations.
    pub fn go_to(&mut self, target: WizardStage) -> Result<WizardStage, ValidationError> {
        let current = self.stage;
        if target > current {
            if current == WizardStage::Classify {
                self.check_classification()?;
            }
            if target == WizardStage::Manage {
                self.check_questions()?;
            }
        }

        debug!(
            draft_id = %self.draft_id,
            from = current.label(),
            to = target.label(),
            "wizard stage changed"
        );
        self.stage = target;
        Ok(target)
    }

    pub fn next(&mut self) -> Result<WizardStage, ValidationError> {
        match self.stage.next() {
            Some(target) => self.go_to(target),
            None => Ok(self.stage),
        }
    }

    pub fn back(&mut self) -> WizardStage {
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
        }
        self.stage
    }

    pub fn apply_question_command(
        &mut self,
        command: QuestionCommand,
    ) -> Result<(), ValidationError> {
        match command {
            QuestionCommand::Select { question } => self.select_question(&question).map(|_| ()),
            QuestionCommand::Deselect { question } => {
                self.deselect_question(&question);
                Ok(())
            }
            QuestionCommand::SetMandatory {
                question,
                mandatory,
            } => self.set_mandatory(&question, mandatory),
            QuestionCommand::ToggleOption { question, option } => {
                self.toggle_option(&question, &option).map(|_| ())
            }
            QuestionCommand::SetOptions { question, options } => {
                self.set_question_options(&question, options)
            }
        }
    }

    /// Add a taxonomy question; returns false when it was already selected.
    pub fn select_question(&mut self, text: &str) -> Result<bool, ValidationError> {
        let catalog = Arc::clone(&self.catalog);
        let question = lookup(&catalog, text)?;
        Ok(self.draft.questions_mut().select(&question.text))
    }

    /// Remove a question together with its mandatory flag and curated options.
    pub fn deselect_question(&mut self, text: &str) -> bool {
        self.question_errors.retain(|entry| entry != text);
        self.draft.questions_mut().deselect(text)
    }

    pub fn set_mandatory(&mut self, text: &str, mandatory: bool) -> Result<(), ValidationError> {
        self.ensure_selected(text)?;
        self.draft.questions_mut().set_mandatory(text, mandatory);
        Ok(())
    }

    /// Flip one curated option; returns whether the option is now chosen.
    pub fn toggle_option(&mut self, text: &str, option: &str) -> Result<bool, ValidationError> {
        let catalog = Arc::clone(&self.catalog);
        let question = self.curatable(&catalog, text)?;
        if !question.offers_option(option) {
            return Err(ValidationError::UnknownOption {
                question: text.to_string(),
                option: option.to_string(),
            });
        }

        let chosen = self.draft.questions_mut().toggle_option(question, option);
        self.refresh_question_error(text);
        Ok(chosen)
    }

    pub fn set_question_options(
        &mut self,
        text: &str,
        options: Vec<String>,
    ) -> Result<(), ValidationError> {
        let catalog = Arc::clone(&self.catalog);
        let question = self.curatable(&catalog, text)?;
        if let Some(unknown) = options.iter().find(|option| !question.offers_option(option)) {
            return Err(ValidationError::UnknownOption {
                question: text.to_string(),
                option: unknown.clone(),
            });
        }

        self.draft.questions_mut().replace_options(question, options);
        self.refresh_question_error(text);
        Ok(())
    }

    pub fn question_sections(&self) -> QuestionSections {
        self.catalog
            .mapper()
            .sections_for_category(&self.draft.classification().category)
    }

    pub fn quote(&self) -> PriceQuote {
        quote(self.catalog.prices(), self.draft.ad_types())
    }

    pub fn review(&self) -> DraftReview {
        DraftReview::build(self)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            draft_id: self.draft_id,
            created_at: self.created_at,
            stage: self.stage,
            draft: self.draft.clone(),
            field_errors: self.field_errors.clone(),
            question_errors: self.question_errors.clone(),
            submitting: self.submitting,
            quote: self.quote(),
            payment: self.payment.clone(),
        }
    }

    /// Start over with an empty draft under a fresh id.
    pub fn clear_draft(&mut self) {
        debug!(draft_id = %self.draft_id, "draft cleared");
        self.draft_id = DraftId::new();
        self.created_at = Utc::now();
        self.stage = WizardStage::Classify;
        self.draft = JobDraft::default();
        self.field_errors.clear();
        self.question_errors.clear();
        self.submitting = false;
        self.payment = None;
    }

    /// Validate and freeze the draft for the payment and job-creation pipeline.
    pub fn begin_submission(
        &mut self,
        employer: Option<&EmployerIdentity>,
        currency: &str,
    ) -> Result<PendingSubmission, SubmissionError> {
        if self.submitting {
            return Err(SubmissionError::AlreadySubmitting);
        }

        let employer = match employer {
            Some(identity) if identity.is_stable() => identity.clone(),
            _ => return Err(SubmissionError::Unauthenticated),
        };

        self.check_classification()?;
        self.check_questions()?;

        self.submitting = true;
        Ok(PendingSubmission {
            draft_id: self.draft_id,
            employer,
            draft: self.draft.clone(),
            quote: self.quote(),
            currency: currency.to_string(),
            prior_payment: self.payment.clone(),
            started_at: Utc::now(),
        })
    }

    /// Fold a pipeline result back into the session.
    pub fn finish_submission(
        &mut self,
        attempt: SubmissionAttempt,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let SubmissionAttempt { pending, outcome } = attempt;
        if pending.draft_id != self.draft_id {
            return Err(SubmissionError::StaleAttempt {
                attempted: pending.draft_id,
                current: self.draft_id,
            });
        }
        self.submitting = false;

        match outcome {
            AttemptOutcome::Created {
                confirmation,
                job,
                attempts,
            } => {
                info!(
                    draft_id = %pending.draft_id,
                    job_id = %job.job_id,
                    payment_reference = %confirmation.reference,
                    amount = %confirmation.amount,
                    attempts,
                    "job posting created"
                );
                let receipt = SubmissionReceipt {
                    draft_id: pending.draft_id,
                    redirect_to: format!("/dashboard/jobs/{}", job.job_id),
                    job_id: job.job_id,
                    payment_reference: confirmation.reference,
                    amount: confirmation.amount,
                    attempts,
                };
                self.clear_draft();
                Ok(receipt)
            }
            AttemptOutcome::CreationFailed {
                confirmation,
                error: cause,
                attempts,
            } => {
                let failure = SubmissionAfterPaymentError::new(
                    pending.draft_id,
                    &confirmation,
                    attempts,
                    &cause,
                );
                tracing::error!(
                    draft_id = %pending.draft_id,
                    payment_reference = %confirmation.reference,
                    amount = %confirmation.amount,
                    currency = %confirmation.currency,
                    paid_at = %confirmation.confirmed_at,
                    occurred_at = %failure.occurred_at,
                    attempts,
                    error = %cause,
                    "job creation failed after payment; manual reconciliation required"
                );
                self.payment = Some(confirmation);
                Err(failure.into())
            }
            AttemptOutcome::Declined { reason } => {
                warn!(
                    draft_id = %pending.draft_id,
                    started_at = %pending.started_at,
                    amount = %pending.quote.total,
                    reason = %reason,
                    "payment declined"
                );
                self.stage = WizardStage::Manage;
                Err(PaymentError::Declined { reason }.into())
            }
            AttemptOutcome::Cancelled => {
                warn!(
                    draft_id = %pending.draft_id,
                    started_at = %pending.started_at,
                    amount = %pending.quote.total,
                    "payment cancelled"
                );
                self.stage = WizardStage::Manage;
                Err(PaymentError::Cancelled.into())
            }
        }
    }

    /// Release the submitting flag when a pipeline result will never arrive.
    pub fn abandon_submission(&mut self) {
        if self.submitting {
            warn!(draft_id = %self.draft_id, "submission abandoned before completion");
            self.submitting = false;
        }
    }

    fn check_classification(&mut self) -> Result<(), ValidationError> {
        let errors = validate_classification(self.draft.classification());
        if errors.is_empty() {
            return Ok(());
        }
        self.field_errors = errors.clone();
        Err(ValidationError::MissingFields(errors))
    }

    fn check_questions(&mut self) -> Result<(), ValidationError> {
        let missing = questions_missing_options(self.draft.questions(), self.catalog.taxonomy());
        self.question_errors = missing.clone();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::QuestionsMissingOptions(missing))
        }
    }

    fn ensure_selected(&self, text: &str) -> Result<(), ValidationError> {
        if self.draft.questions().is_selected(text) {
            Ok(())
        } else {
            Err(ValidationError::QuestionNotSelected(text.to_string()))
        }
    }

    fn curatable<'c>(
        &self,
        catalog: &'c PostingCatalog,
        text: &str,
    ) -> Result<&'c Question, ValidationError> {
        let question = lookup(catalog, text)?;
        self.ensure_selected(text)?;
        if !question.requires_curation() {
            return Err(ValidationError::QuestionHasNoOptions(text.to_string()));
        }
        Ok(question)
    }

    fn refresh_question_error(&mut self, text: &str) {
        if !self.draft.questions().options_for(text).is_empty() {
            self.question_errors.retain(|entry| entry != text);
        }
    }
}

fn lookup<'c>(catalog: &'c PostingCatalog, text: &str) -> Result<&'c Question, ValidationError> {
    catalog
        .taxonomy()
        .find_question(text)
        .ok_or_else(|| ValidationError::UnknownQuestion(text.to_string()))
}
