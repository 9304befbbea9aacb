use async_trait::async_trait;
use contribcheck_core::{Commit, ComparisonStatus, ForkCandidate, Repository, User};

use crate::error::GithubResult;

/// Capability interface over the hosting platform, as seen by the
/// contribution checker.
///
/// All calls are read-only. Absence of an entity is a domain answer
/// (`None` / `false`), not an error; only infrastructure failures and
/// credential rejection come back as `Err`. The production implementation is
/// [`crate::api::GithubApiClient`]; [`crate::fixture::FixtureClient`] serves
/// deterministic tests.
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// Fetch a commit by repository full name and sha. `None` means the
    /// commit does not exist or is not visible with the current credential.
    async fn get_commit(&self, full_name: &str, sha: &str) -> GithubResult<Option<Commit>>;

    /// Fetch a repository snapshot. `None` means not found.
    async fn get_repository(&self, full_name: &str) -> GithubResult<Option<Repository>>;

    /// The user the credential authenticates as.
    async fn authenticated_user(&self) -> GithubResult<User>;

    /// Verified email addresses of the authenticated user. Fetched fresh per
    /// evaluation; the set is viewer-specific.
    async fn verified_emails(&self) -> GithubResult<Vec<String>>;

    /// Ahead/behind comparison of `base...head_sha`. `None` means the two
    /// refs share no common history (the platform answers 404).
    async fn compare_refs(
        &self,
        full_name: &str,
        base: &str,
        head_sha: &str,
    ) -> GithubResult<Option<ComparisonStatus>>;

    /// Whether the authenticated user has starred the repository.
    async fn is_starred(&self, full_name: &str) -> GithubResult<bool>;

    /// Whether `login` is a member of the organization `org`.
    async fn is_org_member(&self, org: &str, login: &str) -> GithubResult<bool>;

    /// One page of forks of the repository, at most `per_page` entries.
    async fn list_forks(
        &self,
        full_name: &str,
        per_page: u8,
    ) -> GithubResult<Vec<ForkCandidate>>;

    /// Every repository of the user, across all pages. Listing entries carry
    /// no parent reference; callers fetch details where they need one.
    async fn list_user_repositories(&self, login: &str) -> GithubResult<Vec<ForkCandidate>>;
}
