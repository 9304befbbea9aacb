use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as fetched from the hosting platform, reduced to the fields the
/// contribution rules look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit SHA
    pub sha: String,
    /// Email address the commit was authored with
    pub author_email: String,
    /// Author timestamp (not the committer timestamp)
    pub authored_at: DateTime<Utc>,
}

/// Account type of a repository owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerKind {
    User,
    Organization,
}

/// Owner of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub kind: OwnerKind,
}

/// Repository snapshot taken at evaluation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
    /// Repository name without the owner segment
    pub name: String,
    /// Name of the default branch, e.g. `main`
    pub default_branch: String,
    /// Whether this repository is itself a fork
    pub fork: bool,
    /// Number of forks of this repository
    pub forks_count: u64,
    pub owner: RepoOwner,
    /// Whether the authenticated viewer has push access
    pub viewer_can_push: bool,
    /// Full name of the parent repository, present when `fork` is true
    pub parent_full_name: Option<String>,
}

/// The authenticated user an evaluation runs on behalf of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// A repository entry inspected during the fork-ownership search. Listing
/// endpoints do not include the parent reference, so it stays optional and a
/// detail fetch fills it in when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkCandidate {
    pub full_name: String,
    pub owner_login: String,
    pub fork: bool,
    pub parent_full_name: Option<String>,
}

/// Status of an ahead/behind comparison between two refs.
///
/// An absent comparison (the refs share no common history) is represented as
/// `Option::<ComparisonStatus>::None` by the client boundary, never as an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    Identical,
    Ahead,
    Behind,
    Diverged,
}

impl ComparisonStatus {
    /// Whether the head ref is contained in the base ref's history. `ahead`
    /// and `diverged` mean the head commit is not yet merged into the base.
    pub fn head_in_base(self) -> bool {
        matches!(self, ComparisonStatus::Identical | ComparisonStatus::Behind)
    }
}
