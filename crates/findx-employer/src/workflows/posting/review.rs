use serde::Serialize;

use super::domain::{DraftId, WizardStage};
use super::draft::{DraftField, JobDraft};
use super::pricing::PriceQuote;
use super::validation::{questions_missing_options, validate_classification, FieldErrors};
use super::wizard::JobPostingWizard;

/// Non-blocking advice surfaced on the review stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentWarning {
    pub field: DraftField,
    pub message: String,
}

impl ContentWarning {
    fn new(field: DraftField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Everything the review stage shows before payment.
#[derive(Debug, Clone, Serialize)]
pub struct DraftReview {
    pub draft_id: DraftId,
    pub stage: WizardStage,
    pub draft: JobDraft,
    pub quote: PriceQuote,
    pub missing_fields: FieldErrors,
    pub questions_missing_options: Vec<String>,
    pub warnings: Vec<ContentWarning>,
    pub already_paid: bool,
    pub ready: bool,
}

impl DraftReview {
    pub(crate) fn build(wizard: &JobPostingWizard) -> Self {
        let draft = wizard.draft();
        let missing_fields = validate_classification(draft.classification());
        let missing_options =
            questions_missing_options(draft.questions(), wizard.catalog().taxonomy());
        let ready = missing_fields.is_empty() && missing_options.is_empty();

        Self {
            draft_id: wizard.draft_id(),
            stage: wizard.stage(),
            draft: draft.clone(),
            quote: wizard.quote(),
            missing_fields,
            questions_missing_options: missing_options,
            warnings: content_warnings(draft),
            already_paid: wizard.confirmed_payment().is_some(),
            ready,
        }
    }
}

fn content_warnings(draft: &JobDraft) -> Vec<ContentWarning> {
    let classification = draft.classification();
    let content = draft.content();
    let mut warnings = Vec::new();

    if content.description.trim().is_empty() {
        warnings.push(ContentWarning::new(
            DraftField::Description,
            "Add a job description so candidates know what the role involves",
        ));
    }
    if content.summary.trim().is_empty() {
        warnings.push(ContentWarning::new(
            DraftField::Summary,
            "A summary is shown in search results",
        ));
    }
    if content.show_short_description && content.short_description.trim().is_empty() {
        warnings.push(ContentWarning::new(
            DraftField::ShortDescription,
            "Short description is set to visible but is empty",
        ));
    }
    if content.selling_points.is_empty() {
        warnings.push(ContentWarning::new(
            DraftField::SellingPoints,
            "Listings with selling points attract more applicants",
        ));
    }
    if content.keywords.is_empty() {
        warnings.push(ContentWarning::new(
            DraftField::Keywords,
            "Keywords help candidates find this job",
        ));
    }
    if let (Some(from), Some(to)) = (classification.salary_from, classification.salary_to) {
        if from > to {
            warnings.push(ContentWarning::new(
                DraftField::SalaryTo,
                format!("Salary range is inverted ({from} to {to})"),
            ));
        }
    }

    warnings
}
