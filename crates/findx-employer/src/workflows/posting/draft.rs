use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::domain::{NotificationChannel, NotificationReach, PayType, WorkType, WorkspaceMode};
use super::validation::ValidationError;
use crate::workflows::taxonomy::{JobCategoryCatalog, Question};

pub const MAX_SELLING_POINTS: usize = 3;

/// Stage one fields: what the role is and how it pays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub title: String,
    pub location: String,
    pub workspace: Option<WorkspaceMode>,
    pub category: String,
    pub subcategory: String,
    pub work_type: Option<WorkType>,
    pub pay_type: Option<PayType>,
    pub currency: String,
    pub salary_from: Option<u64>,
    pub salary_to: Option<u64>,
    pub show_salary: bool,
}

/// Paid add-ons chosen on the ad-types stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdTypeSelection {
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub immediate_start: bool,
    #[serde(default)]
    pub channel: NotificationChannel,
    #[serde(default)]
    pub reach: NotificationReach,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobContent {
    pub description: String,
    pub summary: String,
    pub short_description: String,
    pub show_short_description: bool,
    pub selling_points: Vec<String>,
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub video_url: Option<String>,
}

/// Screening questions chosen for the posting.
///
/// `mandatory` and `options` only ever hold questions that are also in
/// `selected`; deselecting a question drops it from all three together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionSelection {
    selected: Vec<String>,
    mandatory: BTreeSet<String>,
    options: BTreeMap<String, Vec<String>>,
}

impl QuestionSelection {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, question: &str) -> bool {
        self.selected.iter().any(|entry| entry == question)
    }

    pub fn is_mandatory(&self, question: &str) -> bool {
        self.mandatory.contains(question)
    }

    pub fn mandatory(&self) -> impl Iterator<Item = &str> {
        self.mandatory.iter().map(String::as_str)
    }

    /// Curated options for a question, empty when none were chosen.
    pub fn options_for(&self, question: &str) -> &[String] {
        self.options
            .get(question)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn curated(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.options
            .iter()
            .map(|(question, options)| (question.as_str(), options.as_slice()))
    }

    /// No mandatory flag or curated option outlives its selection.
    pub fn is_consistent(&self) -> bool {
        let selected: HashSet<&str> = self.selected.iter().map(String::as_str).collect();
        self.mandatory
            .iter()
            .all(|question| selected.contains(question.as_str()))
            && self.options.iter().all(|(question, options)| {
                selected.contains(question.as_str()) && !options.is_empty()
            })
    }

    pub(crate) fn select(&mut self, question: &str) -> bool {
        if self.is_selected(question) {
            return false;
        }
        self.selected.push(question.to_string());
        true
    }

    pub(crate) fn deselect(&mut self, question: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|entry| entry != question);
        self.mandatory.remove(question);
        self.options.remove(question);
        before != self.selected.len()
    }

    pub(crate) fn set_mandatory(&mut self, question: &str, mandatory: bool) {
        if mandatory {
            self.mandatory.insert(question.to_string());
        } else {
            self.mandatory.remove(question);
        }
    }

    /// Flip one curated option; returns whether it is now chosen.
    pub(crate) fn toggle_option(&mut self, question: &Question, option: &str) -> bool {
        let entry = self.options.entry(question.text.clone()).or_default();
        let chosen = if let Some(position) = entry.iter().position(|value| value == option) {
            entry.remove(position);
            false
        } else {
            entry.push(option.to_string());
            sort_by_predefined(question, entry);
            true
        };

        if entry.is_empty() {
            self.options.remove(&question.text);
        }
        chosen
    }

    pub(crate) fn replace_options(&mut self, question: &Question, options: Vec<String>) {
        let mut options = dedup_preserving_order(options);
        if options.is_empty() {
            self.options.remove(&question.text);
            return;
        }
        sort_by_predefined(question, &mut options);
        self.options.insert(question.text.clone(), options);
    }
}

fn sort_by_predefined(question: &Question, options: &mut [String]) {
    options.sort_by_key(|option| {
        question
            .options
            .iter()
            .position(|candidate| candidate == option)
            .unwrap_or(usize::MAX)
    });
}

/// The in-progress posting owned by one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    classification: Classification,
    ad_types: AdTypeSelection,
    content: JobContent,
    questions: QuestionSelection,
}

impl JobDraft {
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn ad_types(&self) -> &AdTypeSelection {
        &self.ad_types
    }

    pub fn content(&self) -> &JobContent {
        &self.content
    }

    pub fn questions(&self) -> &QuestionSelection {
        &self.questions
    }

    pub(crate) fn questions_mut(&mut self) -> &mut QuestionSelection {
        &mut self.questions
    }

    /// Apply a single typed field update.
    pub(crate) fn apply(
        &mut self,
        update: DraftUpdate,
        categories: &JobCategoryCatalog,
    ) -> Result<(), ValidationError> {
        let classification = &mut self.classification;
        let content = &mut self.content;

        match update {
            DraftUpdate::Title(value) => classification.title = value,
            DraftUpdate::Location(value) => classification.location = value,
            DraftUpdate::Workspace(value) => classification.workspace = value,
            DraftUpdate::Category(value) => {
                let value = value.trim().to_string();
                if !value.is_empty() && !categories.contains(&value) {
                    return Err(ValidationError::UnknownCategory(value));
                }
                if !categories.is_member(&value, &classification.subcategory) {
                    classification.subcategory.clear();
                }
                classification.category = value;
            }
            DraftUpdate::Subcategory(value) => {
                let value = value.trim().to_string();
                if !value.is_empty() && !categories.is_member(&classification.category, &value) {
                    return Err(ValidationError::SubcategoryNotInCategory {
                        category: classification.category.clone(),
                        subcategory: value,
                    });
                }
                classification.subcategory = value;
            }
            DraftUpdate::WorkType(value) => classification.work_type = value,
            DraftUpdate::PayType(value) => classification.pay_type = value,
            DraftUpdate::Currency(value) => classification.currency = value.trim().to_uppercase(),
            DraftUpdate::SalaryFrom(value) => classification.salary_from = value,
            DraftUpdate::SalaryTo(value) => classification.salary_to = value,
            DraftUpdate::ShowSalary(value) => classification.show_salary = value,
            DraftUpdate::Premium(value) => self.ad_types.premium = value,
            DraftUpdate::ImmediateStart(value) => self.ad_types.immediate_start = value,
            DraftUpdate::NotificationChannel(value) => self.ad_types.channel = value,
            DraftUpdate::NotificationReach(value) => self.ad_types.reach = value,
            DraftUpdate::Description(value) => content.description = value,
            DraftUpdate::Summary(value) => content.summary = value,
            DraftUpdate::ShortDescription(value) => content.short_description = value,
            DraftUpdate::ShowShortDescription(value) => content.show_short_description = value,
            DraftUpdate::SellingPoints(points) => {
                let points: Vec<String> = points
                    .into_iter()
                    .map(|point| point.trim().to_string())
                    .filter(|point| !point.is_empty())
                    .collect();
                if points.len() > MAX_SELLING_POINTS {
                    return Err(ValidationError::TooManySellingPoints {
                        max: MAX_SELLING_POINTS,
                        given: points.len(),
                    });
                }
                content.selling_points = points;
            }
            DraftUpdate::Keywords(input) => content.keywords = input.normalize(),
            DraftUpdate::Skills(input) => content.skills = input.normalize(),
            DraftUpdate::LogoUrl(value) => content.logo_url = non_blank(value),
            DraftUpdate::BannerUrl(value) => content.banner_url = non_blank(value),
            DraftUpdate::VideoUrl(value) => content.video_url = non_blank(value),
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_string())
        .filter(|inner| !inner.is_empty())
}

/// Names of every draft field, used as keys for field-level errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    Location,
    Workspace,
    Category,
    Subcategory,
    WorkType,
    PayType,
    Currency,
    SalaryFrom,
    SalaryTo,
    ShowSalary,
    Premium,
    ImmediateStart,
    NotificationChannel,
    NotificationReach,
    Description,
    Summary,
    ShortDescription,
    ShowShortDescription,
    SellingPoints,
    Keywords,
    Skills,
    LogoUrl,
    BannerUrl,
    VideoUrl,
}

impl DraftField {
    /// Fields that must be filled before leaving the classify stage.
    pub const fn classification_required() -> [Self; 10] {
        [
            Self::Title,
            Self::Location,
            Self::Workspace,
            Self::Category,
            Self::Subcategory,
            Self::WorkType,
            Self::PayType,
            Self::Currency,
            Self::SalaryFrom,
            Self::SalaryTo,
        ]
    }

    pub const fn is_ad_type(self) -> bool {
        matches!(
            self,
            Self::Premium
                | Self::ImmediateStart
                | Self::NotificationChannel
                | Self::NotificationReach
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Job title",
            Self::Location => "Location",
            Self::Workspace => "Workspace",
            Self::Category => "Category",
            Self::Subcategory => "Subcategory",
            Self::WorkType => "Work type",
            Self::PayType => "Pay type",
            Self::Currency => "Currency",
            Self::SalaryFrom => "Salary from",
            Self::SalaryTo => "Salary to",
            Self::ShowSalary => "Show salary",
            Self::Premium => "Premium listing",
            Self::ImmediateStart => "Immediate start",
            Self::NotificationChannel => "Notification channel",
            Self::NotificationReach => "Notification reach",
            Self::Description => "Description",
            Self::Summary => "Summary",
            Self::ShortDescription => "Short description",
            Self::ShowShortDescription => "Show short description",
            Self::SellingPoints => "Selling points",
            Self::Keywords => "Keywords",
            Self::Skills => "Skills",
            Self::LogoUrl => "Logo",
            Self::BannerUrl => "Banner",
            Self::VideoUrl => "Video",
        }
    }
}

/// The only way to change a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftUpdate {
    Title(String),
    Location(String),
    Workspace(Option<WorkspaceMode>),
    Category(String),
    Subcategory(String),
    WorkType(Option<WorkType>),
    PayType(Option<PayType>),
    Currency(String),
    SalaryFrom(Option<u64>),
    SalaryTo(Option<u64>),
    ShowSalary(bool),
    Premium(bool),
    ImmediateStart(bool),
    NotificationChannel(NotificationChannel),
    NotificationReach(NotificationReach),
    Description(String),
    Summary(String),
    ShortDescription(String),
    ShowShortDescription(bool),
    SellingPoints(Vec<String>),
    Keywords(KeywordInput),
    Skills(KeywordInput),
    LogoUrl(Option<String>),
    BannerUrl(Option<String>),
    VideoUrl(Option<String>),
}

impl DraftUpdate {
    pub const fn field(&self) -> DraftField {
        match self {
            Self::Title(_) => DraftField::Title,
            Self::Location(_) => DraftField::Location,
            Self::Workspace(_) => DraftField::Workspace,
            Self::Category(_) => DraftField::Category,
            Self::Subcategory(_) => DraftField::Subcategory,
            Self::WorkType(_) => DraftField::WorkType,
            Self::PayType(_) => DraftField::PayType,
            Self::Currency(_) => DraftField::Currency,
            Self::SalaryFrom(_) => DraftField::SalaryFrom,
            Self::SalaryTo(_) => DraftField::SalaryTo,
            Self::ShowSalary(_) => DraftField::ShowSalary,
            Self::Premium(_) => DraftField::Premium,
            Self::ImmediateStart(_) => DraftField::ImmediateStart,
            Self::NotificationChannel(_) => DraftField::NotificationChannel,
            Self::NotificationReach(_) => DraftField::NotificationReach,
            Self::Description(_) => DraftField::Description,
            Self::Summary(_) => DraftField::Summary,
            Self::ShortDescription(_) => DraftField::ShortDescription,
            Self::ShowShortDescription(_) => DraftField::ShowShortDescription,
            Self::SellingPoints(_) => DraftField::SellingPoints,
            Self::Keywords(_) => DraftField::Keywords,
            Self::Skills(_) => DraftField::Skills,
            Self::LogoUrl(_) => DraftField::LogoUrl,
            Self::BannerUrl(_) => DraftField::BannerUrl,
            Self::VideoUrl(_) => DraftField::VideoUrl,
        }
    }
}

/// Keywords or skills as typed: comma-separated text or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordInput {
    Text(String),
    List(Vec<String>),
}

impl KeywordInput {
    /// Trimmed, non-empty entries with duplicates removed, first occurrence wins.
    pub fn normalize(self) -> Vec<String> {
        let entries = match self {
            Self::Text(text) => text.split(',').map(str::to_string).collect(),
            Self::List(list) => list,
        };
        dedup_preserving_order(
            entries
                .into_iter()
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        )
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> JobCategoryCatalog {
        JobCategoryCatalog::standard()
    }

    #[test]
    fn keyword_text_is_split_trimmed_and_deduplicated() {
        let keywords = KeywordInput::Text(" rust, tokio ,, rust,axum ".to_string()).normalize();
        assert_eq!(keywords, vec!["rust", "tokio", "axum"]);

        let listed = KeywordInput::List(vec![
            "sql".to_string(),
            " ".to_string(),
            "sql".to_string(),
            "etl".to_string(),
        ])
        .normalize();
        assert_eq!(listed, vec!["sql", "etl"]);
    }

    #[test]
    fn keyword_input_deserializes_from_text_or_list() {
        let text: KeywordInput = serde_json::from_str("\"a, b\"").expect("text");
        let list: KeywordInput = serde_json::from_str("[\"a\", \"b\"]").expect("list");
        assert_eq!(text.normalize(), list.normalize());
    }

    #[test]
    fn changing_category_clears_foreign_subcategory() {
        let catalog = categories();
        let mut draft = JobDraft::default();
        draft
            .apply(DraftUpdate::Category("Legal".to_string()), &catalog)
            .expect("category accepted");
        draft
            .apply(DraftUpdate::Subcategory("Family Law".to_string()), &catalog)
            .expect("subcategory accepted");

        draft
            .apply(DraftUpdate::Category("Accounting".to_string()), &catalog)
            .expect("category accepted");
        assert_eq!(draft.classification().category, "Accounting");
        assert!(draft.classification().subcategory.is_empty());
    }

    #[test]
    fn foreign_subcategory_is_rejected() {
        let catalog = categories();
        let mut draft = JobDraft::default();
        draft
            .apply(DraftUpdate::Category("Accounting".to_string()), &catalog)
            .expect("category accepted");

        let error = draft
            .apply(DraftUpdate::Subcategory("Family Law".to_string()), &catalog)
            .expect_err("subcategory outside category");
        assert!(matches!(error, ValidationError::SubcategoryNotInCategory { .. }));
        assert!(draft.classification().subcategory.is_empty());
    }

    #[test]
    fn selling_points_are_capped() {
        let catalog = categories();
        let mut draft = JobDraft::default();
        let points = ["Flexible hours", "Free lunch", "Gym", "Parking"]
            .iter()
            .map(|point| point.to_string())
            .collect();
        let error = draft
            .apply(DraftUpdate::SellingPoints(points), &catalog)
            .expect_err("four points rejected");
        assert_eq!(
            error,
            ValidationError::TooManySellingPoints {
                max: MAX_SELLING_POINTS,
                given: 4
            }
        );
    }

    #[test]
    fn deselecting_removes_every_trace_of_a_question() {
        let question = Question::with_options("Do you hold a forklift licence?", ["Yes", "No"]);
        let mut selection = QuestionSelection::default();
        selection.select(&question.text);
        selection.set_mandatory(&question.text, true);
        selection.toggle_option(&question, "Yes");
        assert!(selection.is_consistent());

        assert!(selection.deselect(&question.text));
        assert!(!selection.is_mandatory(&question.text));
        assert!(selection.options_for(&question.text).is_empty());
        assert!(selection.is_consistent());
    }

    #[test]
    fn curated_options_follow_predefined_order() {
        let question = Question::with_options("Shift preference?", ["Day", "Evening", "Night"]);
        let mut selection = QuestionSelection::default();
        selection.select(&question.text);
        selection.toggle_option(&question, "Night");
        selection.toggle_option(&question, "Day");
        assert_eq!(selection.options_for(&question.text), ["Day", "Night"]);

        assert!(!selection.toggle_option(&question, "Night"));
        selection.toggle_option(&question, "Day");
        assert!(selection.options_for(&question.text).is_empty());
        assert!(selection.is_consistent());
    }

    #[test]
    fn update_serde_uses_field_and_value_tags() {
        let update: DraftUpdate =
            serde_json::from_str(r#"{"field":"notification_reach","value":500}"#)
                .expect("reach update");
        assert_eq!(
            update,
            DraftUpdate::NotificationReach(NotificationReach::Reach500)
        );
        assert_eq!(update.field(), DraftField::NotificationReach);
        assert!(update.field().is_ad_type());
    }
}
