use crate::demo::{run_compute, run_demo, ComputeArgs, DemoArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Score learner questionnaires and recommend career paths",
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
    /// Score a submission payload from disk and print the result as JSON
    Compute(ComputeArgs),
    /// Score a built-in sample learner and print a readable summary
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
        Command::Compute(args) => run_compute(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["career-compass-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["career-compass-api", "serve", "--port", "9090"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9090));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn compute_requires_payload() {
        assert!(Cli::try_parse_from(["career-compass-api", "compute"]).is_err());

        let cli = Cli::try_parse_from([
            "career-compass-api",
            "compute",
            "--payload",
            "answers.json",
            "--pretty",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Compute(args)) => {
                assert_eq!(args.payload.to_str(), Some("answers.json"));
                assert!(args.pretty);
                assert!(args.catalog.is_none());
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }
}
