//! Check whether a GitHub commit is counted as a contribution for the
//! authenticated user.
//!
//! GitHub's contribution rules combine branch reachability, recency, fork
//! ownership and repository-access heuristics. This crate re-exports the
//! workspace members that reproduce those rules:
//!
//! - [`contribcheck_core`]: domain types and the criteria policy
//! - [`contribcheck_github`]: the hosting-platform client boundary
//! - [`contribcheck_checker`]: the evaluator that produces a verdict
//!
//! ```no_run
//! use contribcheck::{ContributionChecker, GithubApiClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GithubApiClient::new("<token>".to_string())?;
//! let checker = ContributionChecker::new(client);
//! let result = checker
//!     .check("https://github.com/octocat/Spoon-Knife/commit/d0dd1f6")
//!     .await?;
//! println!("counts as a contribution: {}", result.contribution);
//! # Ok(())
//! # }
//! ```

pub use contribcheck_checker::ContributionChecker;
pub use contribcheck_core::{
    AndCriteria, Commit, ComparisonStatus, CriteriaResult, ForkCandidate, OrCriteria, OwnerKind,
    RepoOwner, Repository, User,
};
pub use contribcheck_github::{
    FixtureClient, GithubApiClient, GithubError, GithubResult, HostingClient, parse_commit_url,
};
