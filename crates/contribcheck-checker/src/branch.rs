use contribcheck_core::Repository;
use contribcheck_github::{GithubResult, HostingClient};

/// Secondary branch that also earns contribution credit
pub const PAGES_BRANCH: &str = "gh-pages";

/// Whether the commit is reachable from the default branch or the pages
/// branch.
///
/// A comparison of `branch...sha` with status `identical` or `behind` means
/// the commit is an ancestor of (or equal to) the branch tip; `ahead` and
/// `diverged` mean it has not been merged into that branch. When the default
/// branch qualifies the commit, the pages branch is never queried. An absent
/// comparison (unrelated histories) reads as "not in that branch".
pub async fn commit_in_valid_branch<C: HostingClient>(
    client: &C,
    repo: &Repository,
    sha: &str,
) -> GithubResult<bool> {
    let default_compare = client
        .compare_refs(&repo.full_name, &repo.default_branch, sha)
        .await?;

    if let Some(status) = default_compare {
        if status.head_in_base() {
            return Ok(true);
        }
    }

    let pages_compare = client
        .compare_refs(&repo.full_name, PAGES_BRANCH, sha)
        .await?;

    Ok(pages_compare.is_some_and(|status| status.head_in_base()))
}
