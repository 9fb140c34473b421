use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::draft::{Classification, DraftField, QuestionSelection};
use crate::workflows::taxonomy::TaxonomyStore;

/// Field-level messages shown next to the offending inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: DraftField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<DraftField> {
        self.0.keys().copied().collect()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.keys().map(|field| field.label()).collect();
        write!(f, "{}", labels.join(", "))
    }
}

/// Recoverable problems with user input. These stay local to the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required fields are missing: {0}")]
    MissingFields(FieldErrors),
    #[error("select at least one option for: {}", .0.join("; "))]
    QuestionsMissingOptions(Vec<String>),
    #[error("`{0}` is not an offered job category")]
    UnknownCategory(String),
    #[error("`{subcategory}` is not a subcategory of `{category}`")]
    SubcategoryNotInCategory {
        category: String,
        subcategory: String,
    },
    #[error("`{0}` is not a known screening question")]
    UnknownQuestion(String),
    #[error("`{0}` has not been selected")]
    QuestionNotSelected(String),
    #[error("`{0}` is answered free-form and has no options to choose")]
    QuestionHasNoOptions(String),
    #[error("`{option}` is not an option of `{question}`")]
    UnknownOption { question: String, option: String },
    #[error("at most {max} selling points are allowed (got {given})")]
    TooManySellingPoints { max: usize, given: usize },
    #[error("ad types cannot change once payment has been confirmed")]
    AdTypesLocked,
}

impl ValidationError {
    /// Machine-readable discriminator for API clients.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "missing_fields",
            Self::QuestionsMissingOptions(_) => "questions_missing_options",
            Self::UnknownCategory(_) => "unknown_category",
            Self::SubcategoryNotInCategory { .. } => "subcategory_not_in_category",
            Self::UnknownQuestion(_) => "unknown_question",
            Self::QuestionNotSelected(_) => "question_not_selected",
            Self::QuestionHasNoOptions(_) => "question_has_no_options",
            Self::UnknownOption { .. } => "unknown_option",
            Self::TooManySellingPoints { .. } => "too_many_selling_points",
            Self::AdTypesLocked => "ad_types_locked",
        }
    }
}

/// Every required classify field that is empty, with a message per field.
pub fn validate_classification(classification: &Classification) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in DraftField::classification_required() {
        let missing = match field {
            DraftField::Title => classification.title.trim().is_empty(),
            DraftField::Location => classification.location.trim().is_empty(),
            DraftField::Workspace => classification.workspace.is_none(),
            DraftField::Category => classification.category.trim().is_empty(),
            DraftField::Subcategory => classification.subcategory.trim().is_empty(),
            DraftField::WorkType => classification.work_type.is_none(),
            DraftField::PayType => classification.pay_type.is_none(),
            DraftField::Currency => classification.currency.trim().is_empty(),
            DraftField::SalaryFrom => {
                !matches!(classification.salary_from, Some(value) if value > 0)
            }
            DraftField::SalaryTo => !matches!(classification.salary_to, Some(value) if value > 0),
            _ => false,
        };

        if missing {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    errors
}

/// Selected questions that offer options but have none curated, in selection order.
pub fn questions_missing_options(
    selection: &QuestionSelection,
    store: &TaxonomyStore,
) -> Vec<String> {
    selection
        .selected()
        .iter()
        .filter(|text| {
            store
                .find_question(text)
                .map(|question| question.requires_curation())
                .unwrap_or(false)
                && selection.options_for(text).is_empty()
        })
        .cloned()
        .collect()
}
