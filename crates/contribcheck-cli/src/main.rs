use anyhow::{Context, Result};
use clap::Parser;
use contribcheck_checker::ContributionChecker;
use contribcheck_github::GithubApiClient;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "contribcheck")]
#[command(about = "Check whether a GitHub commit counts as a contribution for you")]
#[command(version = VERSION)]
struct Cli {
    /// Full URL of the commit, e.g. https://github.com/owner/repo/commit/sha
    commit_url: String,

    /// GitHub API token of the user the commit should count for
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client =
        GithubApiClient::new(cli.token).context("Failed to create GitHub API client")?;
    let checker = ContributionChecker::new(client);

    let result = checker
        .check(&cli.commit_url)
        .await
        .context("Contribution check failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.contribution {
        eprintln!("The commit is counted as a contribution.");
    } else {
        eprintln!("The commit is not counted as a contribution.");
    }

    Ok(())
}
