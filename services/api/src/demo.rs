use crate::infra::{
    parse_channel, parse_policy, parse_reach, InMemoryJobBoard, SimulatedPaymentGateway,
};
use clap::Args;
use findx_employer::config::PostingConfig;
use findx_employer::error::AppError;
use findx_employer::workflows::posting::{
    quote, AdTypeSelection, DraftReview, DraftUpdate, EmployerIdentity, JobCreationClient,
    JobPostingService, NotificationChannel, NotificationReach, PayType, PaymentGateway,
    PostingCatalog, PriceQuote, QuestionCommand, SessionId, SubmissionPipeline, WizardStage,
    WorkType, WorkspaceMode,
};
use findx_employer::workflows::taxonomy::{QuestionSections, UnmappedCategoryPolicy};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SectionsArgs {
    /// Top-level job category, e.g. "Healthcare & Medical"
    #[arg(long)]
    pub(crate) category: String,
    /// Taxonomy CSV export to load instead of the built-in taxonomy
    #[arg(long)]
    pub(crate) taxonomy_csv: Option<PathBuf>,
    /// Behaviour for categories without a mapping (show_all or show_none)
    #[arg(long, default_value = "show_all", value_parser = parse_policy)]
    pub(crate) policy: UnmappedCategoryPolicy,
    /// Print the sections as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Upgrade to a premium listing
    #[arg(long)]
    pub(crate) premium: bool,
    /// Add the immediate-start badge
    #[arg(long)]
    pub(crate) immediate_start: bool,
    /// Notification channel: none, app, email or both
    #[arg(long, default_value = "none", value_parser = parse_channel)]
    pub(crate) channel: NotificationChannel,
    /// Candidates reached by the notification package
    #[arg(long, default_value = "100", value_parser = parse_reach)]
    pub(crate) reach: NotificationReach,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Job category for the demo posting
    #[arg(long, default_value = "Legal")]
    pub(crate) category: String,
    /// Employer account the posting is billed to
    #[arg(long, default_value = "emp-demo")]
    pub(crate) employer_id: String,
    /// Taxonomy CSV export to load instead of the built-in taxonomy
    #[arg(long)]
    pub(crate) taxonomy_csv: Option<PathBuf>,
    /// Upgrade the demo posting to premium
    #[arg(long)]
    pub(crate) premium: bool,
}

pub(crate) fn run_sections(args: SectionsArgs) -> Result<(), AppError> {
    let catalog = PostingCatalog::load(args.taxonomy_csv.as_deref(), args.policy)?;
    let sections = catalog.mapper().sections_for_category(&args.category);

    if args.json {
        print_json(&sections);
    } else {
        render_sections(&sections);
    }
    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs) {
    let selection = AdTypeSelection {
        premium: args.premium,
        immediate_start: args.immediate_start,
        channel: args.channel,
        reach: args.reach,
    };
    let catalog = PostingCatalog::standard(UnmappedCategoryPolicy::ShowAll);
    render_quote(&quote(catalog.prices(), &selection));
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = Arc::new(PostingCatalog::load(
        args.taxonomy_csv.as_deref(),
        UnmappedCategoryPolicy::ShowAll,
    )?);
    let board = Arc::new(InMemoryJobBoard::default());
    let posting = PostingConfig::default();
    let pipeline = SubmissionPipeline::new(
        Arc::new(SimulatedPaymentGateway::default()),
        Arc::clone(&board),
        posting.retry_policy(),
    );
    let service = JobPostingService::new(
        Arc::clone(&catalog),
        Arc::new(pipeline),
        posting.currency.clone(),
    );

    println!("FindX employer posting demo");
    let session = service.open().session_id;
    println!("Opened posting session {session}");

    let subcategory = catalog
        .job_categories()
        .get(&args.category)
        .and_then(|category| category.subcategories.first().cloned())
        .unwrap_or_default();

    for update in [
        DraftUpdate::Title(format!("{} Specialist", args.category)),
        DraftUpdate::Location("Melbourne VIC".to_string()),
        DraftUpdate::Workspace(Some(WorkspaceMode::Hybrid)),
        DraftUpdate::Category(args.category.clone()),
        DraftUpdate::Subcategory(subcategory),
        DraftUpdate::WorkType(Some(WorkType::FullTime)),
        DraftUpdate::PayType(Some(PayType::AnnualSalary)),
        DraftUpdate::Currency("AUD".to_string()),
        DraftUpdate::SalaryFrom(Some(80_000)),
        DraftUpdate::SalaryTo(Some(95_000)),
        DraftUpdate::ShowSalary(true),
    ] {
        service.update(session, update)?;
    }
    advance(&service, session, WizardStage::AdTypes)?;

    for update in [
        DraftUpdate::Premium(args.premium),
        DraftUpdate::ImmediateStart(true),
        DraftUpdate::NotificationChannel(NotificationChannel::App),
        DraftUpdate::NotificationReach(NotificationReach::Reach500),
    ] {
        service.update(session, update)?;
    }
    advance(&service, session, WizardStage::Write)?;

    for update in [
        DraftUpdate::Description(
            "Join a growing team serving clients across Victoria.".to_string(),
        ),
        DraftUpdate::Summary("Hybrid role with a clear path to senior work".to_string()),
        DraftUpdate::SellingPoints(vec![
            "Hybrid week".to_string(),
            "Study support".to_string(),
        ]),
    ] {
        service.update(session, update)?;
    }
    advance(&service, session, WizardStage::Manage)?;

    let sections = catalog.mapper().sections_for_category(&args.category);
    for command in screening_commands(&sections) {
        service.question(session, command)?;
    }

    let review = service.review(session)?;
    render_review(&review);

    let employer = EmployerIdentity {
        employer_id: args.employer_id,
        company_name: Some("FindX Demo Co".to_string()),
    };
    let receipt = service.submit(session, Some(employer)).await?;
    println!(
        "\nPublished {} (paid {} via {}, {} attempt(s)); redirect to {}",
        receipt.job_id,
        receipt.amount,
        receipt.payment_reference,
        receipt.attempts,
        receipt.redirect_to
    );

    if let Some(payload) = board.published().last() {
        println!("\nJob creation payload");
        print_json(payload);
    }
    Ok(())
}

fn advance<P, J>(
    service: &JobPostingService<P, J>,
    session: SessionId,
    stage: WizardStage,
) -> Result<(), AppError>
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    let view = service.go_to(session, stage)?;
    println!("  -> {}", view.wizard.stage.label());
    Ok(())
}

/// Picks the first option of the first curated question and of the first basic question.
fn screening_commands(sections: &QuestionSections) -> Vec<QuestionCommand> {
    let curated = sections
        .sections
        .iter()
        .flat_map(|section| section.questions.iter())
        .find(|question| !question.options.is_empty());

    let mut commands = Vec::new();
    for (question, mandatory) in curated
        .map(|question| (question, true))
        .into_iter()
        .chain(sections.basic.first().map(|question| (question, false)))
    {
        commands.push(QuestionCommand::Select {
            question: question.text.clone(),
        });
        if mandatory {
            commands.push(QuestionCommand::SetMandatory {
                question: question.text.clone(),
                mandatory,
            });
        }
        if let Some(option) = question.options.first() {
            commands.push(QuestionCommand::ToggleOption {
                question: question.text.clone(),
                option: option.clone(),
            });
        }
    }
    commands
}

fn render_sections(sections: &QuestionSections) {
    println!(
        "Screening questions for '{}' ({} in total)",
        sections.category,
        sections.question_count()
    );
    println!("Resolution: {:?}", sections.resolution);

    if !sections.basic.is_empty() {
        println!("\nBasic");
        for question in &sections.basic {
            println!("  - {}", question.text);
        }
    }

    for section in &sections.sections {
        println!("\n{} ({})", section.title, section.member_categories.join(", "));
        for question in &section.questions {
            if question.options.is_empty() {
                println!("  - {}", question.text);
            } else {
                println!("  - {} [{}]", question.text, question.options.join(" | "));
            }
        }
    }
}

fn render_quote(quote: &PriceQuote) {
    for item in &quote.line_items {
        println!("  {:<40} {:>9}", item.name, item.price);
    }
    println!("  {:<40} {:>9}", "Total", quote.total);
}

fn render_review(review: &DraftReview) {
    println!("\nReview for draft {}", review.draft_id);
    render_quote(&review.quote);

    if !review.missing_fields.is_empty() {
        println!("Missing fields:");
        for field in review.missing_fields.fields() {
            println!("  - {field:?}");
        }
    }
    for warning in &review.warnings {
        println!("Note: {}", warning.message);
    }
    println!(
        "Ready to submit: {}",
        if review.ready { "yes" } else { "no" }
    );
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("failed to render JSON output: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screening_commands_pick_a_curated_option() {
        let catalog = PostingCatalog::standard(UnmappedCategoryPolicy::ShowAll);
        let sections = catalog.mapper().sections_for_category("Legal");
        let commands = screening_commands(&sections);

        assert!(matches!(
            commands.first(),
            Some(QuestionCommand::Select { .. })
        ));
        assert!(commands
            .iter()
            .any(|command| matches!(command, QuestionCommand::ToggleOption { .. })));
    }

    #[tokio::test]
    async fn demo_publishes_a_posting() {
        let args = DemoArgs {
            category: "Legal".to_string(),
            employer_id: "emp-demo".to_string(),
            taxonomy_csv: None,
            premium: true,
        };
        run_demo(args).await.expect("demo completes");
    }
}
