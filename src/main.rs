use anyhow::Result;
use clap::{Parser, Subcommand};

use ci_semver::cli::{self, CheckPackageArgs, DeriveArgs};
use ci_semver::config::{self, Config};
use ci_semver::feed::LocalFeed;
use ci_semver::publish::CommandPublisher;
use ci_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "ci-semver",
    version,
    about = "Derive semantic versions for CI builds from the build version and branch"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Print a summary of the derivation on stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the semantic version for this build
    Derive {
        #[arg(long, help = "Raw build version MAJOR.MINOR.PATCH.BUILD (defaults to the CI environment)")]
        raw_version: Option<String>,

        #[arg(short, long, help = "Branch name (defaults to the CI environment, then the git checkout)")]
        branch: Option<String>,

        #[arg(long, help = "Omit the +build.N metadata")]
        no_build_metadata: bool,

        #[arg(long, help = "Record the version as the build's display version")]
        publish: bool,
    },

    /// Check whether this build's package version already exists in a feed
    CheckPackage {
        #[arg(long, help = "NuGet package id")]
        package_id: String,

        #[arg(long, help = "Path to a local NuGet folder feed")]
        feed: String,

        #[arg(long, help = "Raw build version MAJOR.MINOR.PATCH.BUILD (defaults to the CI environment)")]
        raw_version: Option<String>,

        #[arg(short, long, help = "Branch name (defaults to the CI environment, then the git checkout)")]
        branch: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Command::Derive {
            raw_version,
            branch,
            no_build_metadata,
            publish,
        } => {
            let derive_args = DeriveArgs {
                raw_version,
                branch,
                include_build_metadata: no_build_metadata.then_some(false),
                publish,
            };
            derive(&derive_args, &config, args.verbose)
        }
        Command::CheckPackage {
            package_id,
            feed,
            raw_version,
            branch,
        } => {
            let check_args = CheckPackageArgs {
                package_id,
                raw_version,
                branch,
            };
            check_package(&check_args, &feed, &config, args.verbose)
        }
    };

    if let Err(e) = outcome {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn derive(args: &DeriveArgs, config: &Config, verbose: bool) -> Result<()> {
    let publisher = CommandPublisher::from_config(&config.publish);
    let outcome = cli::run_derive(args, config, &publisher)?;

    if verbose {
        ui::display_derivation(&outcome.derived);
    }

    match outcome.published {
        Some(true) => ui::display_success(&format!("Published build version {}", outcome.version)),
        Some(false) => ui::display_warning(&format!(
            "Could not publish build version {} (continuing)",
            outcome.version
        )),
        None => {}
    }

    ui::display_result(&outcome.version);
    Ok(())
}

fn check_package(args: &CheckPackageArgs, feed_path: &str, config: &Config, verbose: bool) -> Result<()> {
    let feed = LocalFeed::open(feed_path)?;
    if verbose {
        ui::display_status(&format!("Searching feed {}", feed.root().display()));
    }

    let check = cli::run_check_package(args, config, &feed)?;

    if verbose {
        ui::display_package_check(&check.package_id, &check.version, check.exists);
    }

    ui::display_result(&check.exists.to_string());
    Ok(())
}
