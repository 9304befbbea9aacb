use contribcheck_core::{Repository, User};
use contribcheck_github::{GithubResult, HostingClient};
use tracing::debug;

/// Largest fork count for which one page of the fork list is conclusive
const DIRECT_LIST_LIMIT: u64 = 100;

/// Whether the user owns a fork of `repo`.
///
/// The platform has no direct "does X have a fork of Y" query, so the search
/// is tiered from cheapest to most expensive and short-circuits on the first
/// hit:
///
/// 1. a repository with no forks has no fork owned by the user;
/// 2. with at most 100 forks, one page of the fork list is exhaustive, so
///    match on the fork owner's login;
/// 3. probe the repository literally named `{login}/{repo-name}` and accept
///    it when its parent is the target (not-found here is a miss, not an
///    error);
/// 4. scan the user's full repository list, fetching each fork's detail for
///    its parent reference.
pub async fn user_has_fork_of_repo<C: HostingClient>(
    client: &C,
    repo: &Repository,
    user: &User,
) -> GithubResult<bool> {
    if repo.forks_count == 0 {
        return Ok(false);
    }

    if repo.forks_count <= DIRECT_LIST_LIMIT {
        let forks = client
            .list_forks(&repo.full_name, DIRECT_LIST_LIMIT as u8)
            .await?;
        if forks.iter().any(|f| f.owner_login == user.login) {
            return Ok(true);
        }
    }

    let guessed = format!("{}/{}", user.login, repo.name);
    if let Some(candidate) = client.get_repository(&guessed).await? {
        if candidate.parent_full_name.as_deref() == Some(repo.full_name.as_str()) {
            return Ok(true);
        }
    }

    // Expensive fallback: walk everything the user owns
    debug!(repo = %repo.full_name, user = %user.login, "falling back to full fork scan");
    let user_repos = client.list_user_repositories(&user.login).await?;
    for entry in user_repos.into_iter().filter(|r| r.fork) {
        // Listing entries omit the parent reference; fetch the detail
        if let Some(detail) = client.get_repository(&entry.full_name).await? {
            if detail.parent_full_name.as_deref() == Some(repo.full_name.as_str()) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
