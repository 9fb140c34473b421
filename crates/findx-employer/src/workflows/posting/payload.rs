use serde::{Deserialize, Serialize};

use super::domain::{DraftId, NotificationChannel, PayType, WorkType, WorkspaceMode};
use super::draft::JobDraft;
use super::pricing::Money;

/// Answer choices used when a question has neither curated nor default options.
pub const GENERIC_OPTIONS: [&str; 3] = ["Yes", "No", "Maybe"];

const DEFAULT_OPTIONS: &[(&str, &[&str])] = &[
    (
        "What are your salary expectations?",
        &[
            "Below the advertised range",
            "Within the advertised range",
            "Above the advertised range",
        ],
    ),
    (
        "What is the largest deal you have closed?",
        &["Under $10k", "$10k - $50k", "$50k - $250k", "Over $250k"],
    ),
    (
        "Which training styles or classes do you specialise in?",
        &["Strength", "HIIT", "Pilates", "Yoga", "Group classes"],
    ),
];

/// Options sent for a question: curated first, then defaults, then the generic set.
pub fn answer_options(question: &str, curated: &[String]) -> Vec<String> {
    if !curated.is_empty() {
        return curated.to_vec();
    }

    DEFAULT_OPTIONS
        .iter()
        .find(|(text, _)| *text == question)
        .map(|(_, options)| *options)
        .unwrap_or(&GENERIC_OPTIONS[..])
        .iter()
        .map(|option| option.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub required: bool,
}

/// Body of the backend job-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreationPayload {
    pub draft_id: DraftId,
    pub employer_id: String,
    pub payment_reference: String,
    pub amount_paid: Money,
    pub title: String,
    pub location: String,
    pub workspace: Option<WorkspaceMode>,
    pub category: String,
    pub subcategory: String,
    pub work_type: Option<WorkType>,
    pub pay_type: Option<PayType>,
    pub currency: String,
    pub salary_from: u64,
    pub salary_to: u64,
    pub show_salary: bool,
    pub premium_listing: bool,
    pub immediate_start: bool,
    pub notification_option: NotificationChannel,
    pub notification_count: u32,
    pub description: String,
    pub summary: String,
    pub short_description: Option<Vec<String>>,
    pub show_short_description: bool,
    pub selling_points: Vec<String>,
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub video_url: Option<String>,
    pub job_questions: Vec<String>,
    pub application_questions: Vec<ApplicationQuestion>,
}

/// Reconciliation details attached to the payload once payment succeeded.
#[derive(Debug, Clone, Copy)]
pub struct PaymentContext<'a> {
    pub draft_id: DraftId,
    pub employer_id: &'a str,
    pub payment_reference: &'a str,
    pub amount_paid: Money,
}

impl JobCreationPayload {
    pub fn from_draft(draft: &JobDraft, payment: PaymentContext<'_>) -> Self {
        let classification = draft.classification();
        let ad_types = draft.ad_types();
        let content = draft.content();
        let questions = draft.questions();

        let short_description = content.show_short_description.then(|| {
            content
                .short_description
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        });

        let application_questions = questions
            .selected()
            .iter()
            .map(|question| ApplicationQuestion {
                question: question.clone(),
                options: answer_options(question, questions.options_for(question)),
                required: questions.is_mandatory(question),
            })
            .collect();

        Self {
            draft_id: payment.draft_id,
            employer_id: payment.employer_id.to_string(),
            payment_reference: payment.payment_reference.to_string(),
            amount_paid: payment.amount_paid,
            title: classification.title.trim().to_string(),
            location: classification.location.trim().to_string(),
            workspace: classification.workspace,
            category: classification.category.clone(),
            subcategory: classification.subcategory.clone(),
            work_type: classification.work_type,
            pay_type: classification.pay_type,
            currency: classification.currency.clone(),
            salary_from: classification.salary_from.unwrap_or_default(),
            salary_to: classification.salary_to.unwrap_or_default(),
            show_salary: classification.show_salary,
            premium_listing: ad_types.premium,
            immediate_start: ad_types.immediate_start,
            notification_option: ad_types.channel,
            notification_count: ad_types.reach.candidates(),
            description: content.description.clone(),
            summary: content.summary.clone(),
            short_description,
            show_short_description: content.show_short_description,
            selling_points: content.selling_points.clone(),
            keywords: content.keywords.clone(),
            skills: content.skills.clone(),
            logo_url: content.logo_url.clone(),
            banner_url: content.banner_url.clone(),
            video_url: content.video_url.clone(),
            job_questions: questions.selected().to_vec(),
            application_questions,
        }
    }

    pub fn application_question(&self, question: &str) -> Option<&ApplicationQuestion> {
        self.application_questions
            .iter()
            .find(|entry| entry.question == question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_options_win_over_defaults() {
        let curated = vec!["Within the advertised range".to_string()];
        assert_eq!(
            answer_options("What are your salary expectations?", &curated),
            curated
        );
    }

    #[test]
    fn known_free_form_questions_use_their_defaults() {
        let options = answer_options("What are your salary expectations?", &[]);
        assert_eq!(options.len(), 3);
        assert!(options[0].starts_with("Below"));
    }

    #[test]
    fn unknown_questions_fall_back_to_generic_options() {
        assert_eq!(
            answer_options("Why are you interested in this role?", &[]),
            GENERIC_OPTIONS.to_vec()
        );
    }
}
