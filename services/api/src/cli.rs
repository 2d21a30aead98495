use crate::demo::{run_compare, run_demo, CompareArgs, DemoArgs};
use crate::desktop;
use crate::server;
use clap::{Args, Parser, Subcommand};
use scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Scorecard",
    about = "Compare products against rated criteria and export PDF reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service and web form (default command)
    Serve(ServeArgs),
    /// Open the terminal comparison form
    Desktop,
    /// Score a comparison from a JSON request or CSV rating matrix
    Compare(CompareArgs),
    /// Score the built-in sample comparison and write its PDF report
    Demo(DemoArgs),
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
        Command::Desktop => desktop::run(),
        Command::Compare(args) => run_compare(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["scorecard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn compare_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["scorecard", "compare"]).is_err());
        assert!(Cli::try_parse_from([
            "scorecard",
            "compare",
            "--input",
            "a.json",
            "--csv",
            "b.csv"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["scorecard", "compare", "--csv", "matrix.csv", "--json"])
            .expect("parses");
        match cli.command {
            Some(Command::Compare(args)) => {
                assert!(args.json);
                assert!(args.input.is_none());
            }
            other => panic!("expected compare command, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
