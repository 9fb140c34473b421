use super::common::*;

use crate::workflows::posting::{
    DraftField, DraftUpdate, JobDraft, JobPostingWizard, Money, QuestionCommand, ValidationError,
    WizardStage,
};
use crate::workflows::taxonomy::{Resolution, SectionKey};

#[test]
fn subcategory_alone_blocks_leaving_classify() {
    let mut wizard = JobPostingWizard::new(catalog());
    for update in classification_updates()
        .into_iter()
        .filter(|update| update.field() != DraftField::Subcategory)
    {
        wizard.update(update).expect("update applies");
    }

    let error = wizard
        .go_to(WizardStage::AdTypes)
        .expect_err("missing subcategory blocks the transition");
    match error {
        ValidationError::MissingFields(fields) => {
            assert_eq!(fields.fields(), vec![DraftField::Subcategory]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wizard.stage(), WizardStage::Classify);
    assert_eq!(wizard.field_errors().fields(), vec![DraftField::Subcategory]);
}

#[test]
fn updating_a_field_clears_its_error() {
    let mut wizard = JobPostingWizard::new(catalog());
    wizard.next().expect_err("empty draft cannot advance");
    assert!(wizard.field_errors().contains(DraftField::Title));

    wizard
        .update(DraftUpdate::Title("Paralegal".to_string()))
        .expect("title update");
    assert!(!wizard.field_errors().contains(DraftField::Title));
    assert!(wizard.field_errors().contains(DraftField::Location));
}

#[test]
fn complete_classification_advances_and_back_is_unrestricted() {
    let mut wizard = classified_wizard();
    assert_eq!(wizard.next(), Ok(WizardStage::AdTypes));
    assert_eq!(wizard.next(), Ok(WizardStage::Write));

    wizard
        .update(DraftUpdate::Title(String::new()))
        .expect("title can be cleared");
    assert_eq!(wizard.back(), WizardStage::AdTypes);
    assert_eq!(wizard.go_to(WizardStage::Classify), Ok(WizardStage::Classify));
    assert_eq!(wizard.go_to(WizardStage::Classify), Ok(WizardStage::Classify));
    assert!(wizard.go_to(WizardStage::Write).is_err());
}

#[test]
fn entering_manage_requires_curated_options() {
    let mut wizard = classified_wizard();
    wizard.go_to(WizardStage::Write).expect("write reachable");
    wizard.select_question(LEGAL_ADMISSION).expect("select");
    wizard.select_question(LEGAL_AREAS).expect("select");
    wizard.select_question(MOTIVATION).expect("select");

    let error = wizard
        .go_to(WizardStage::Manage)
        .expect_err("uncurated questions block manage");
    assert_eq!(
        error,
        ValidationError::QuestionsMissingOptions(vec![
            LEGAL_ADMISSION.to_string(),
            LEGAL_AREAS.to_string()
        ])
    );
    assert_eq!(wizard.question_errors().len(), 2);

    wizard.toggle_option(LEGAL_AREAS, "Property").expect("option");
    assert_eq!(wizard.question_errors().to_vec(), vec![LEGAL_ADMISSION.to_string()]);

    wizard.deselect_question(LEGAL_ADMISSION);
    assert_eq!(wizard.go_to(WizardStage::Manage), Ok(WizardStage::Manage));
    assert!(wizard.question_errors().is_empty());
}

#[test]
fn jumping_from_classify_to_manage_runs_both_gates() {
    let mut wizard = classified_wizard();
    wizard.select_question(START_DATE).expect("select");

    let error = wizard
        .go_to(WizardStage::Manage)
        .expect_err("question gate applies on a jump");
    assert!(matches!(error, ValidationError::QuestionsMissingOptions(_)));
    assert_eq!(wizard.stage(), WizardStage::Classify);
}

#[test]
fn deselecting_leaves_no_orphans() {
    let mut wizard = ready_wizard();
    assert!(wizard.draft().questions().is_mandatory(LEGAL_ADMISSION));

    assert!(wizard.deselect_question(LEGAL_ADMISSION));
    let questions = wizard.draft().questions();
    assert!(!questions.is_selected(LEGAL_ADMISSION));
    assert!(!questions.is_mandatory(LEGAL_ADMISSION));
    assert!(questions.options_for(LEGAL_ADMISSION).is_empty());
    assert!(questions.is_consistent());
    assert!(!wizard.deselect_question(LEGAL_ADMISSION));
}

#[test]
fn question_commands_are_validated() {
    let mut wizard = classified_wizard();

    assert_eq!(
        wizard.select_question("Can you juggle?"),
        Err(ValidationError::UnknownQuestion("Can you juggle?".to_string()))
    );
    assert_eq!(
        wizard.set_mandatory(LEGAL_ADMISSION, true),
        Err(ValidationError::QuestionNotSelected(LEGAL_ADMISSION.to_string()))
    );

    wizard.select_question(MOTIVATION).expect("select");
    assert_eq!(
        wizard.toggle_option(MOTIVATION, "Yes"),
        Err(ValidationError::QuestionHasNoOptions(MOTIVATION.to_string()))
    );

    wizard
        .apply_question_command(QuestionCommand::Select {
            question: LEGAL_ADMISSION.to_string(),
        })
        .expect("select via command");
    let error = wizard
        .apply_question_command(QuestionCommand::SetOptions {
            question: LEGAL_ADMISSION.to_string(),
            options: vec!["No".to_string(), "Maybe".to_string()],
        })
        .expect_err("unknown option rejected");
    assert_eq!(
        error,
        ValidationError::UnknownOption {
            question: LEGAL_ADMISSION.to_string(),
            option: "Maybe".to_string(),
        }
    );
    assert!(wizard.draft().questions().options_for(LEGAL_ADMISSION).is_empty());
}

#[test]
fn selecting_twice_keeps_a_single_entry() {
    let mut wizard = classified_wizard();
    assert_eq!(wizard.select_question(START_DATE), Ok(true));
    assert_eq!(wizard.select_question(START_DATE), Ok(false));
    assert_eq!(wizard.draft().questions().selected().len(), 1);
}

#[test]
fn sections_follow_the_selected_category() {
    let wizard = classified_wizard();
    let sections = wizard.question_sections();
    assert_eq!(
        sections.resolution,
        Resolution::Matched {
            key: "legal".to_string()
        }
    );
    assert_eq!(sections.sections.len(), 1);
    assert_eq!(sections.sections[0].key, SectionKey::Professional);
    assert!(!sections.basic.is_empty());

    let empty = JobPostingWizard::new(catalog()).question_sections();
    assert_eq!(empty.resolution, Resolution::Unselected);
    assert!(empty.sections.is_empty());
}

#[test]
fn unknown_categories_are_rejected() {
    let mut wizard = JobPostingWizard::new(catalog());
    assert_eq!(
        wizard.update(DraftUpdate::Category("Astrology".to_string())),
        Err(ValidationError::UnknownCategory("Astrology".to_string()))
    );
    assert!(wizard.draft().classification().category.is_empty());
}

#[test]
fn quote_matches_the_ad_types_scenario() {
    let wizard = ready_wizard();
    let quote = wizard.quote();
    assert_eq!(quote.total, Money::from_major(223));
    assert_eq!(quote.line_items.len(), 3);
}

#[test]
fn review_reports_readiness_and_warnings() {
    let wizard = ready_wizard();
    let review = wizard.review();
    assert!(review.ready);
    assert!(review.missing_fields.is_empty());
    assert!(review
        .warnings
        .iter()
        .any(|warning| warning.field == DraftField::SellingPoints));
    assert!(!review.already_paid);

    let incomplete = JobPostingWizard::new(catalog()).review();
    assert!(!incomplete.ready);
    assert_eq!(incomplete.missing_fields.len(), 10);
}

#[test]
fn clear_draft_starts_over() {
    let mut wizard = ready_wizard();
    wizard.go_to(WizardStage::Write).expect("write reachable");
    let previous_id = wizard.draft_id();

    wizard.clear_draft();
    assert_ne!(wizard.draft_id(), previous_id);
    assert_eq!(wizard.stage(), WizardStage::Classify);
    assert_eq!(wizard.draft(), &JobDraft::default());
    assert!(wizard.field_errors().is_empty());
    assert!(!wizard.is_submitting());
    assert!(wizard.confirmed_payment().is_none());
}

#[test]
fn currency_is_normalised_to_upper_case() {
    let wizard = classified_wizard();
    assert_eq!(wizard.draft().classification().currency, "AUD");
}
