use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use contribcheck_core::{Commit, ComparisonStatus, ForkCandidate, Repository, User};

use crate::client::HostingClient;
use crate::error::{GithubError, GithubResult};

/// In-memory [`HostingClient`] for deterministic tests.
///
/// Fixtures are loaded through the builder methods; every trait call is
/// recorded so tests can assert which endpoints an evaluation touched (the
/// fork search and branch comparison rules short-circuit, and the tests
/// check that they really do). Missing fixtures read as the platform's
/// not-found answer, never as an error. Infrastructure failures are injected
/// per endpoint with [`FixtureClient::with_failure`].
#[derive(Debug, Default)]
pub struct FixtureClient {
    commit: Option<Commit>,
    repositories: HashMap<String, Repository>,
    user: Option<User>,
    emails: Vec<String>,
    comparisons: HashMap<String, ComparisonStatus>,
    starred: HashSet<String>,
    org_members: HashSet<(String, String)>,
    forks: Vec<ForkCandidate>,
    user_repositories: Vec<ForkCandidate>,
    failures: HashSet<String>,
    reject_credential: bool,
    calls: Mutex<Vec<String>>,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commit = Some(commit);
        self
    }

    /// Register a repository, retrievable by its full name. The target
    /// repository and any probe-able fork candidates all go through here.
    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repositories
            .insert(repository.full_name.clone(), repository);
        self
    }

    pub fn with_user(mut self, login: &str) -> Self {
        self.user = Some(User {
            login: login.to_string(),
        });
        self
    }

    pub fn with_emails(mut self, emails: &[&str]) -> Self {
        self.emails = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Record the comparison status for `base...<any head>`. A base with no
    /// registered status answers as unrelated histories (`None`).
    pub fn with_comparison(mut self, base: &str, status: ComparisonStatus) -> Self {
        self.comparisons.insert(base.to_string(), status);
        self
    }

    pub fn with_starred(mut self, full_name: &str) -> Self {
        self.starred.insert(full_name.to_string());
        self
    }

    pub fn with_org_member(mut self, org: &str, login: &str) -> Self {
        self.org_members
            .insert((org.to_string(), login.to_string()));
        self
    }

    pub fn with_forks(mut self, forks: Vec<ForkCandidate>) -> Self {
        self.forks = forks;
        self
    }

    pub fn with_user_repositories(mut self, repositories: Vec<ForkCandidate>) -> Self {
        self.user_repositories = repositories;
        self
    }

    /// Make the named endpoint (e.g. `is_starred`) fail with an
    /// infrastructure error. The call is still recorded.
    pub fn with_failure(mut self, endpoint: &str) -> Self {
        self.failures.insert(endpoint.to_string());
        self
    }

    /// Reject the credential on the commit fetch, the way the platform
    /// answers a bad token.
    pub fn with_rejected_credential(mut self) -> Self {
        self.reject_credential = true;
        self
    }

    /// Every trait call made so far, in order, as `name:detail` entries
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("fixture call log poisoned").clone()
    }

    /// Whether any recorded call starts with `prefix`
    pub fn called(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("fixture call log poisoned").push(call);
    }

    fn fail_if_configured(&self, endpoint: &str) -> GithubResult<()> {
        if self.failures.contains(endpoint) {
            return Err(GithubError::ApiError(format!(
                "injected failure in {}",
                endpoint
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl HostingClient for FixtureClient {
    async fn get_commit(&self, full_name: &str, sha: &str) -> GithubResult<Option<Commit>> {
        self.record(format!("get_commit:{}@{}", full_name, sha));
        self.fail_if_configured("get_commit")?;
        if self.reject_credential {
            return Err(GithubError::InvalidAccessToken);
        }
        Ok(self.commit.clone())
    }

    async fn get_repository(&self, full_name: &str) -> GithubResult<Option<Repository>> {
        self.record(format!("get_repository:{}", full_name));
        self.fail_if_configured("get_repository")?;
        Ok(self.repositories.get(full_name).cloned())
    }

    async fn authenticated_user(&self) -> GithubResult<User> {
        self.record("authenticated_user".to_string());
        self.fail_if_configured("authenticated_user")?;
        Ok(self.user.clone().unwrap_or(User {
            login: "octocat".to_string(),
        }))
    }

    async fn verified_emails(&self) -> GithubResult<Vec<String>> {
        self.record("verified_emails".to_string());
        self.fail_if_configured("verified_emails")?;
        Ok(self.emails.clone())
    }

    async fn compare_refs(
        &self,
        full_name: &str,
        base: &str,
        head_sha: &str,
    ) -> GithubResult<Option<ComparisonStatus>> {
        self.record(format!("compare_refs:{}:{}...{}", full_name, base, head_sha));
        self.fail_if_configured("compare_refs")?;
        Ok(self.comparisons.get(base).copied())
    }

    async fn is_starred(&self, full_name: &str) -> GithubResult<bool> {
        self.record(format!("is_starred:{}", full_name));
        self.fail_if_configured("is_starred")?;
        Ok(self.starred.contains(full_name))
    }

    async fn is_org_member(&self, org: &str, login: &str) -> GithubResult<bool> {
        self.record(format!("is_org_member:{}/{}", org, login));
        self.fail_if_configured("is_org_member")?;
        Ok(self
            .org_members
            .contains(&(org.to_string(), login.to_string())))
    }

    async fn list_forks(
        &self,
        full_name: &str,
        per_page: u8,
    ) -> GithubResult<Vec<ForkCandidate>> {
        self.record(format!("list_forks:{}", full_name));
        self.fail_if_configured("list_forks")?;
        Ok(self.forks.iter().take(per_page as usize).cloned().collect())
    }

    async fn list_user_repositories(&self, login: &str) -> GithubResult<Vec<ForkCandidate>> {
        self.record(format!("list_user_repositories:{}", login));
        self.fail_if_configured("list_user_repositories")?;
        Ok(self.user_repositories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let fixture = FixtureClient::new().with_starred("octocat/Spoon-Knife");

        assert!(fixture.is_starred("octocat/Spoon-Knife").await.unwrap());
        assert!(!fixture.is_starred("octocat/Hello-World").await.unwrap());

        let calls = fixture.calls();
        assert_eq!(
            calls,
            vec![
                "is_starred:octocat/Spoon-Knife".to_string(),
                "is_starred:octocat/Hello-World".to_string(),
            ]
        );
        assert!(fixture.called("is_starred"));
        assert!(!fixture.called("list_forks"));
    }

    #[tokio::test]
    async fn test_missing_comparison_reads_as_unrelated_histories() {
        let fixture = FixtureClient::new().with_comparison("main", ComparisonStatus::Behind);

        let status = fixture
            .compare_refs("octocat/Spoon-Knife", "main", "abc123")
            .await
            .unwrap();
        assert_eq!(status, Some(ComparisonStatus::Behind));

        let status = fixture
            .compare_refs("octocat/Spoon-Knife", "gh-pages", "abc123")
            .await
            .unwrap();
        assert_eq!(status, None);
    }

    #[tokio::test]
    async fn test_injected_failure_surfaces_as_api_error() {
        let fixture = FixtureClient::new()
            .with_starred("octocat/Spoon-Knife")
            .with_failure("is_starred");

        let err = fixture.is_starred("octocat/Spoon-Knife").await.unwrap_err();

        assert!(matches!(err, GithubError::ApiError(_)));
        // The failed call still shows up in the log
        assert!(fixture.called("is_starred"));
    }

    #[tokio::test]
    async fn test_rejected_credential_on_commit_fetch() {
        let fixture = FixtureClient::new().with_rejected_credential();

        let err = fixture
            .get_commit("octocat/Spoon-Knife", "abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, GithubError::InvalidAccessToken));
    }

    #[tokio::test]
    async fn test_list_forks_respects_page_size() {
        let forks: Vec<ForkCandidate> = (0..5)
            .map(|i| ForkCandidate {
                full_name: format!("user{}/Spoon-Knife", i),
                owner_login: format!("user{}", i),
                fork: true,
                parent_full_name: None,
            })
            .collect();
        let fixture = FixtureClient::new().with_forks(forks);

        let page = fixture.list_forks("octocat/Spoon-Knife", 3).await.unwrap();
        assert_eq!(page.len(), 3);
    }
}
