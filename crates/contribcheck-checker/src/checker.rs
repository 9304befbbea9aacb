use chrono::Utc;
use contribcheck_core::{
    AndCriteria, Commit, CriteriaResult, OrCriteria, Repository, User, authored_in_last_year,
};
use contribcheck_github::{GithubError, GithubResult, HostingClient, parse_commit_url};
use tracing::debug;

use crate::{access, branch, forks};

/// Evaluates whether a commit counts as a contribution for the
/// authenticated user.
///
/// One evaluation is a single stateless pass: parse the commit reference,
/// take snapshots of the commit, repository and user, run the criteria
/// resolvers, and fold everything into a [`CriteriaResult`]. The resolvers
/// that touch the network are independent of each other and run
/// concurrently; the first infrastructure failure cancels the rest and fails
/// the evaluation, so a partial result is never reported.
pub struct ContributionChecker<C> {
    client: C,
}

impl<C: HostingClient> ContributionChecker<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying hosting client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Check the commit behind a `https://github.com/owner/repo/commit/sha`
    /// URL.
    ///
    /// Fails with [`GithubError::InvalidCommitUrl`] before any API call when
    /// the URL does not parse, and with the same error when the commit or
    /// repository behind it does not exist.
    pub async fn check(&self, commit_url: &str) -> GithubResult<CriteriaResult> {
        let reference = parse_commit_url(commit_url)?;
        let full_name = reference.full_name();
        debug!(repo = %full_name, sha = %reference.sha, "checking commit");

        let commit = self
            .client
            .get_commit(&full_name, &reference.sha)
            .await?
            .ok_or(GithubError::InvalidCommitUrl)?;
        let repo = self
            .client
            .get_repository(&full_name)
            .await?
            .ok_or(GithubError::InvalidCommitUrl)?;
        let user = self.client.authenticated_user().await?;

        self.evaluate(&commit, &repo, &user).await
    }

    /// Evaluate already-fetched snapshots against the contribution criteria.
    pub async fn evaluate(
        &self,
        commit: &Commit,
        repo: &Repository,
        user: &User,
    ) -> GithubResult<CriteriaResult> {
        let (
            commit_in_valid_branch,
            verified_emails,
            user_has_starred_repo,
            user_is_repo_org_member,
            user_has_fork_of_repo,
        ) = tokio::try_join!(
            branch::commit_in_valid_branch(&self.client, repo, &commit.sha),
            self.client.verified_emails(),
            self.client.is_starred(&repo.full_name),
            access::user_is_repo_org_member(&self.client, repo, user),
            forks::user_has_fork_of_repo(&self.client, repo, user),
        )?;

        let and_criteria = AndCriteria {
            commit_in_valid_branch,
            commit_in_last_year: authored_in_last_year(commit.authored_at, Utc::now()),
            repo_not_a_fork: !repo.fork,
            commit_email_linked_to_user: verified_emails.contains(&commit.author_email),
        };
        let or_criteria = OrCriteria {
            user_has_starred_repo,
            user_can_push_to_repo: repo.viewer_can_push,
            user_is_repo_org_member,
            user_has_fork_of_repo,
        };

        let result = CriteriaResult::new(and_criteria, or_criteria);
        debug!(
            repo = %repo.full_name,
            sha = %commit.sha,
            contribution = result.contribution,
            "evaluation finished"
        );
        Ok(result)
    }
}
