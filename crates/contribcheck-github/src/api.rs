use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contribcheck_core::{Commit, ComparisonStatus, ForkCandidate, OwnerKind, RepoOwner, Repository, User};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::HostingClient;
use crate::error::{GithubError, GithubResult};

/// Page size used for listing endpoints
const PAGE_SIZE: u8 = 100;

/// Production GitHub client built on octocrab.
///
/// Endpoints that answer with a status code only (starred, org membership)
/// go through the raw request path so a 404 can be read as "no" instead of
/// an error; everything else deserializes into the payload structs below.
pub struct GithubApiClient {
    client: Octocrab,
}

impl GithubApiClient {
    /// Create a new GitHub API client with an authentication token
    pub fn new(token: String) -> GithubResult<Self> {
        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| {
                GithubError::ApiError(format!("Failed to create octocrab client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Create a client from an existing octocrab instance
    pub fn from_octocrab(client: Octocrab) -> Self {
        Self { client }
    }

    /// GET a status-only endpoint: 204 is "yes", 404 is "no", anything else
    /// that octocrab reports as an error propagates.
    async fn boolean_endpoint(&self, route: String) -> GithubResult<bool> {
        match self.client._get(route).await {
            Ok(response) => Ok(response.status().as_u16() == 204),
            Err(err) if is_not_found(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// Whether an octocrab error is the platform's 404 answer.
/// The API responds with 404 both for missing entities and for refs with
/// unrelated histories.
fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. }
        if source.message.contains("404") || source.message.contains("Not Found"))
}

/// Whether an octocrab error is a rejected credential.
fn is_unauthorized(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. }
        if source.message.contains("401") || source.message.contains("Bad credentials")
            || source.message.contains("Requires authentication"))
}

#[derive(Debug, Deserialize)]
struct CommitPayload {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    author: CommitAuthor,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    email: String,
    date: DateTime<Utc>,
}

impl From<CommitPayload> for Commit {
    fn from(payload: CommitPayload) -> Self {
        Commit {
            sha: payload.sha,
            author_email: payload.commit.author.email,
            authored_at: payload.commit.author.date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct PermissionsPayload {
    push: bool,
}

#[derive(Debug, Deserialize)]
struct ParentPayload {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    full_name: String,
    default_branch: String,
    fork: bool,
    #[serde(default)]
    forks_count: u64,
    owner: OwnerPayload,
    permissions: Option<PermissionsPayload>,
    parent: Option<ParentPayload>,
}

impl From<RepositoryPayload> for Repository {
    fn from(payload: RepositoryPayload) -> Self {
        let kind = match payload.owner.kind.as_str() {
            "Organization" => OwnerKind::Organization,
            _ => OwnerKind::User,
        };
        Repository {
            name: payload.name,
            full_name: payload.full_name,
            default_branch: payload.default_branch,
            fork: payload.fork,
            forks_count: payload.forks_count,
            owner: RepoOwner {
                login: payload.owner.login,
                kind,
            },
            viewer_can_push: payload.permissions.map(|p| p.push).unwrap_or(false),
            parent_full_name: payload.parent.map(|p| p.full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ComparisonPayload {
    status: ComparisonStatus,
}

#[derive(Debug, Deserialize)]
struct EmailPayload {
    email: String,
    verified: bool,
}

#[derive(Debug, Deserialize)]
struct RepoSummaryPayload {
    full_name: String,
    fork: bool,
    owner: OwnerPayload,
    parent: Option<ParentPayload>,
}

impl From<RepoSummaryPayload> for ForkCandidate {
    fn from(payload: RepoSummaryPayload) -> Self {
        ForkCandidate {
            full_name: payload.full_name,
            owner_login: payload.owner.login,
            fork: payload.fork,
            parent_full_name: payload.parent.map(|p| p.full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Serialize)]
struct PageQuery {
    per_page: u8,
    page: u32,
}

#[async_trait]
impl HostingClient for GithubApiClient {
    async fn get_commit(&self, full_name: &str, sha: &str) -> GithubResult<Option<Commit>> {
        let route = format!("/repos/{}/commits/{}", full_name, sha);
        let result: Result<CommitPayload, octocrab::Error> =
            self.client.get(&route, None::<&()>).await;

        match result {
            Ok(payload) => Ok(Some(payload.into())),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) if is_unauthorized(&err) => Err(GithubError::InvalidAccessToken),
            Err(err) => Err(err.into()),
        }
    }

    async fn get_repository(&self, full_name: &str) -> GithubResult<Option<Repository>> {
        let route = format!("/repos/{}", full_name);
        let result: Result<RepositoryPayload, octocrab::Error> =
            self.client.get(&route, None::<&()>).await;

        match result {
            Ok(payload) => Ok(Some(payload.into())),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn authenticated_user(&self) -> GithubResult<User> {
        let result: Result<UserPayload, octocrab::Error> =
            self.client.get("/user", None::<&()>).await;

        match result {
            Ok(payload) => Ok(User {
                login: payload.login,
            }),
            Err(err) if is_unauthorized(&err) => Err(GithubError::InvalidAccessToken),
            Err(err) => Err(err.into()),
        }
    }

    async fn verified_emails(&self) -> GithubResult<Vec<String>> {
        let emails: Vec<EmailPayload> = self
            .client
            .get(
                "/user/emails",
                Some(&PageQuery {
                    per_page: PAGE_SIZE,
                    page: 1,
                }),
            )
            .await?;

        Ok(emails
            .into_iter()
            .filter(|e| e.verified)
            .map(|e| e.email)
            .collect())
    }

    async fn compare_refs(
        &self,
        full_name: &str,
        base: &str,
        head_sha: &str,
    ) -> GithubResult<Option<ComparisonStatus>> {
        let route = format!("/repos/{}/compare/{}...{}", full_name, base, head_sha);
        let result: Result<ComparisonPayload, octocrab::Error> =
            self.client.get(&route, None::<&()>).await;

        match result {
            Ok(payload) => Ok(Some(payload.status)),
            // Unrelated histories or a missing branch answer with a 404
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn is_starred(&self, full_name: &str) -> GithubResult<bool> {
        self.boolean_endpoint(format!("/user/starred/{}", full_name))
            .await
    }

    async fn is_org_member(&self, org: &str, login: &str) -> GithubResult<bool> {
        self.boolean_endpoint(format!("/orgs/{}/members/{}", org, login))
            .await
    }

    async fn list_forks(
        &self,
        full_name: &str,
        per_page: u8,
    ) -> GithubResult<Vec<ForkCandidate>> {
        let route = format!("/repos/{}/forks", full_name);
        let forks: Vec<RepoSummaryPayload> = self
            .client
            .get(&route, Some(&PageQuery { per_page, page: 1 }))
            .await?;

        Ok(forks.into_iter().map(Into::into).collect())
    }

    async fn list_user_repositories(&self, login: &str) -> GithubResult<Vec<ForkCandidate>> {
        // The authenticated-user route also returns private repositories,
        // which /users/{login}/repos would miss.
        debug!(login, "listing repositories of the authenticated user");

        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let repos: Vec<RepoSummaryPayload> = self
                .client
                .get(
                    "/user/repos",
                    Some(&PageQuery {
                        per_page: PAGE_SIZE,
                        page,
                    }),
                )
                .await?;

            let last_page = repos.len() < PAGE_SIZE as usize;
            all.extend(repos.into_iter().map(Into::into));
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}
