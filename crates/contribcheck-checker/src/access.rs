use contribcheck_core::{OwnerKind, Repository, User};
use contribcheck_github::{GithubResult, HostingClient};

/// Whether the repository belongs to an organization the user is a member
/// of. Repositories owned by a user account answer false without a
/// membership query; a negative membership answer is false, never an error.
pub async fn user_is_repo_org_member<C: HostingClient>(
    client: &C,
    repo: &Repository,
    user: &User,
) -> GithubResult<bool> {
    if repo.owner.kind != OwnerKind::Organization {
        return Ok(false);
    }
    client.is_org_member(&repo.owner.login, &user.login).await
}
