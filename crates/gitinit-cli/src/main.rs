//! gitinit - create a GitHub repository and clone it into the current directory.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gitinit_core::{
    CloneRepo, Context, CreateRemoteRepo, CredentialStore, FetchToken, PatFile,
    RepositoryOptions, Sequencer, Step,
};
use gitinit_git::GitCli;
use gitinit_github::GitHubClient;

mod reporter;

use reporter::ConsoleReporter;

/// Create a GitHub repository and clone it into the current directory
#[derive(Parser)]
#[command(name = "gitinit")]
#[command(about = "Create a GitHub repository and clone it locally", long_about = None)]
struct Cli {
    /// Name of the repository to create
    name: String,

    /// Path to the personal access token file
    /// (defaults to ~/.config/gitinit/pat)
    #[arg(long, value_name = "PATH")]
    pat_file: Option<PathBuf>,

    /// Server-side .gitignore template applied to the initial commit
    #[arg(long, default_value = "Node", value_name = "TEMPLATE")]
    gitignore_template: String,

    /// Skip the initial commit, leaving the remote repository empty
    #[arg(long)]
    no_auto_init: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics only; step progress goes through the reporter.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = Context::new(cli.name)?;

    // Working directory captured once; the clone lands under it.
    let root_dir = std::env::current_dir()?;

    let store: Arc<dyn CredentialStore> = Arc::new(match cli.pat_file {
        Some(path) => PatFile::new(path),
        None => PatFile::default_location()?,
    });
    let provider = Arc::new(GitHubClient::new());
    let vcs = Arc::new(GitCli::new(root_dir));
    let options = RepositoryOptions {
        gitignore_template: cli.gitignore_template,
        auto_init: !cli.no_auto_init,
    };

    let steps: Vec<Box<dyn Step>> = vec![
        Box::new(FetchToken::new(store)),
        Box::new(CreateRemoteRepo::new(provider, options)),
        Box::new(CloneRepo::new(vcs)),
    ];

    let mut sequencer = Sequencer::new(steps);
    let ctx = sequencer.run(ctx, &ConsoleReporter).await?;

    let path = ctx.local_path()?;
    println!(
        "{} Project initiated at {}",
        "SUCCESS::".green(),
        path.display().to_string().blue()
    );
    Ok(())
}
