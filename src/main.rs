use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use is_terminal::IsTerminal;
use osaconfig::artifacts::clone_id::CloneId;
use osaconfig::commands::porcelain::checkout::Orchestrator;
use osaconfig::config::{CheckoutConfig, DEFAULT_BRANCH, DEFAULT_REMOTE_URL};
use osaconfig::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "osaconfig",
    version = "0.1.0",
    about = "Check out openstack-ansible at a given commit",
    long_about = "Clones openstack-ansible into a fresh directory named by a random id, \
    creates a local branch tracking the remote branch at the given commit and checks it out. \
    Prints the id of the clone directory on success.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, value_name = "COMMIT_SHA", help = "Full SHA of the commit to check out")]
    commit_sha: String,
    #[arg(long, value_name = "PATH", help = "Clone into this path instead of <base-dir>/<id>")]
    repo: Option<PathBuf>,
    #[arg(
        long = "osaurl",
        value_name = "URL",
        default_value = DEFAULT_REMOTE_URL,
        help = "Repository to clone"
    )]
    osa_url: String,
    #[arg(long, default_value = DEFAULT_BRANCH, help = "Remote branch to track")]
    branch: String,
    #[arg(long, value_name = "DIR", help = "Base directory for generated clone paths")]
    base_dir: Option<PathBuf>,
    #[arg(long, help = "Remove the clone directory when the checkout fails")]
    cleanup_on_failure: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

impl Cli {
    fn to_config(&self) -> CheckoutConfig {
        let config = CheckoutConfig::default()
            .with_remote_url(self.osa_url.clone())
            .with_repo_path(self.repo.clone())
            .with_cleanup_on_failure(self.cleanup_on_failure);

        match &self.base_dir {
            Some(base_dir) => config.with_base_dir(base_dir.clone()),
            None => config,
        }
    }
}

fn run(cli: &Cli) -> Result<CloneId> {
    let orchestrator = Orchestrator::new(cli.to_config());
    let clone_id = orchestrator.checkout(&cli.commit_sha, &cli.branch)?;

    Ok(clone_id)
}

fn main() {
    let cli = Cli::parse();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(err) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{} {:#}", "warning:".yellow().bold(), err);
    }

    match run(&cli) {
        Ok(clone_id) => println!("{clone_id}"),
        Err(err) => {
            eprintln!("{} {:#}", "fatal:".red().bold(), err);
            std::process::exit(1);
        }
    }
}
