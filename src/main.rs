use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pep440_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use pep440_bump::config::Config;
use pep440_bump::{config, ui, BumpError, ReleaseField};

/// Environment variable holding a tracing filter, e.g. `PEP440_BUMP_LOG=debug`.
const LOG_ENV: &str = "PEP440_BUMP_LOG";

#[derive(clap::Parser)]
#[command(
    name = "pep440-bump",
    version,
    about = "Compute the next release or pre-release of a PEP 440 version"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version (or tag) to start from, e.g. 1.10.2 or 1.10.3a1"
    )]
    input: String,

    #[arg(help = "What to bump: major, minor, micro, alpha, beta or rc. Omit to only validate")]
    target: Option<String>,

    #[arg(
        short,
        long,
        help = "Release field bumped when starting a pre-release cycle: major, minor or micro"
    )]
    field: Option<String>,

    #[arg(short, long, help = "Print the result through the configured tag pattern")]
    tag: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

/// Exit code for a version, target or field that cannot be bumped
const EXIT_INPUT: i32 = 1;
/// Exit code for an unreadable or malformed configuration
const EXIT_ENVIRONMENT: i32 = 2;

/// Boundary warnings are logged at `warn`, so `show_warnings = false`
/// raises the default level to `error`.
fn init_logging(verbose: u8, show_warnings: bool) {
    let default_level = match verbose {
        0 if show_warnings => "warn",
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args, config: Config) -> Result<()> {
    let field = args
        .field
        .as_deref()
        .map(str::parse::<ReleaseField>)
        .transpose()?;

    let workflow_args = BumpWorkflowArgs {
        input: args.input,
        target: args.target,
        field,
        as_tag: args.tag,
    };

    let result = run_bump_workflow(&workflow_args, &config)?;

    if let Some(next) = &result.next {
        if args.verbose > 0 {
            ui::display_bump(&result.current, next);
        }
    }

    ui::display_result(&result.rendered);
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BumpError>() {
        Some(bump_err) if !bump_err.is_input_error() => EXIT_ENVIRONMENT,
        _ => EXIT_INPUT,
    }
}

fn main() {
    let args = Args::parse();

    let result = config::load_config(args.config.as_deref())
        .context("Error loading config")
        .and_then(|config| {
            init_logging(args.verbose, config.behavior.show_warnings);
            run(args, config)
        });

    if let Err(e) = result {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(exit_code(&e));
    }
}
