use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use git_bump::cli::{plan_release, run_release, ReleaseArgs};
use git_bump::config::{self, Config};
use git_bump::domain::Tag;
use git_bump::git::{discover_workdir, SystemRunner};
use git_bump::store::FsStore;
use git_bump::{history, ui, LogQuery};

#[derive(Parser)]
#[command(
    name = "git-bump",
    version,
    about = "Bump package versions, commit and create annotated release tags"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log executed git commands")]
    verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the next version and write it into the manifests
    Bump {
        #[arg(help = "major, premajor, minor, preminor, patch, prepatch or prerelease")]
        release_type: String,

        #[arg(long, help = "Pre-release identifier (e.g. alpha, beta, rc)")]
        preid: Option<String>,
    },
    /// Stage the manifests, commit and create an annotated tag
    Tag {
        #[arg(value_name = "VERSION")]
        tag_version: String,

        #[arg(short, long, help = "Message template, %s is replaced by the version")]
        message: Option<String>,
    },
    /// List commit subjects for a changelog
    Log {
        #[arg(long, help = "Exclusive lower bound (hash, semver tag or HEAD)")]
        from: Option<String>,

        #[arg(long, help = "Inclusive upper bound (hash, semver tag or HEAD)")]
        to: Option<String>,

        #[arg(long, help = "git log format string")]
        format: Option<String>,
    },
    /// Bump, commit and tag in one go
    Release {
        release_type: String,

        #[arg(long)]
        preid: Option<String>,

        #[arg(short, long)]
        message: Option<String>,

        #[arg(short, long, help = "Skip confirmation prompt")]
        yes: bool,

        #[arg(long, help = "Preview the next version without making changes")]
        dry_run: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GIT_BUMP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("git_bump={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let root = discover_workdir(&cwd)?.unwrap_or(cwd);
    let store = FsStore::new(&root);
    let runner = SystemRunner::new(&root).with_program(config.git.program.clone());

    match args.command {
        Command::Bump {
            release_type,
            preid,
        } => {
            let report = git_bump::bump(
                &store,
                &config.files,
                Some(release_type.as_str()),
                preid.as_deref(),
            )?;
            for warning in &report.warnings {
                ui::display_boundary_warning(warning);
            }
            if args.json {
                println!("{}", serde_json::to_string(&report.result)?);
            } else {
                ui::display_version_change(&report.result, false);
            }
        }
        Command::Tag {
            tag_version,
            message,
        } => {
            let tag = Tag::for_version(&tag_version)?;
            let message = message.unwrap_or_else(|| config.tag.message.clone());
            git_bump::compose_with(
                &runner,
                &config.files,
                Some(tag.version.as_str()),
                Some(message.as_str()),
            )?;
            ui::display_success(&format!("Created tag {}", tag.name));
        }
        Command::Log { from, to, format } => {
            let query = LogQuery {
                from,
                to,
                format: Some(format.unwrap_or_else(|| config.log.format.clone())),
            };
            let subjects = history::list(&runner, &query)?;
            if args.json {
                println!("{}", serde_json::to_string(&subjects)?);
            } else {
                ui::display_history(&subjects);
            }
        }
        Command::Release {
            release_type,
            preid,
            message,
            yes,
            dry_run,
        } => release(
            ReleaseArgs {
                release_type: Some(release_type),
                preid,
                message,
                dry_run,
            },
            yes,
            args.json,
            &config,
            &store,
            &runner,
        )?,
    }

    Ok(())
}

fn release(
    release_args: ReleaseArgs,
    yes: bool,
    json: bool,
    config: &Config,
    store: &FsStore,
    runner: &SystemRunner,
) -> Result<()> {
    let planned = plan_release(&release_args, config, store)?;

    if !release_args.dry_run {
        if !json {
            ui::display_version_change(&planned, true);
        }
        if !yes && !ui::confirm_action(&format!("Commit and tag v{}?", planned.next))? {
            println!("Release cancelled by user.");
            return Ok(());
        }
    }

    let outcome = run_release(&release_args, config, store, runner)?;
    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    if json {
        println!("{}", serde_json::to_string(&outcome.versions)?);
    } else if let Some(tag) = &outcome.tag {
        ui::display_success(&format!("Released {}", tag));
    } else {
        ui::display_version_change(&outcome.versions, true);
    }

    Ok(())
}
