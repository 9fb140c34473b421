use crate::demo::{run_demo, run_quote, run_sections, DemoArgs, QuoteArgs, SectionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use findx_employer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FindX Employer",
    about = "Run the FindX employer posting service or explore its catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the screening-question taxonomy
    Taxonomy {
        #[command(subcommand)]
        command: TaxonomyCommand,
    },
    /// Price an ad-type selection
    Pricing {
        #[command(subcommand)]
        command: PricingCommand,
    },
    /// Walk a posting from classification to a published job with simulated payment
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TaxonomyCommand {
    /// Show the grouped questions offered for a job category
    Sections(SectionsArgs),
}

#[derive(Subcommand, Debug)]
enum PricingCommand {
    /// Print the line items and total for a selection
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Taxonomy {
            command: TaxonomyCommand::Sections(args),
        } => run_sections(args),
        Command::Pricing {
            command: PricingCommand::Quote(args),
        } => {
            run_quote(args);
            Ok(())
        }
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findx_employer::workflows::posting::{NotificationChannel, NotificationReach};

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["findx"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn quote_flags_parse_into_domain_values() {
        let cli = Cli::try_parse_from([
            "findx",
            "pricing",
            "quote",
            "--premium",
            "--channel",
            "both",
            "--reach",
            "500",
        ])
        .expect("parses");

        let Some(Command::Pricing {
            command: PricingCommand::Quote(args),
        }) = cli.command
        else {
            panic!("expected pricing quote");
        };
        assert!(args.premium);
        assert!(!args.immediate_start);
        assert_eq!(args.channel, NotificationChannel::Both);
        assert_eq!(args.reach, NotificationReach::Reach500);
    }

    #[test]
    fn unsupported_reach_is_rejected() {
        let result = Cli::try_parse_from(["findx", "pricing", "quote", "--reach", "300"]);
        assert!(result.is_err());
    }
}
