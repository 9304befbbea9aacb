use crate::error::{GithubError, GithubResult};

/// A commit URL resolved into its owner/repo/sha parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub owner: String,
    pub repo: String,
    pub sha: String,
}

impl CommitRef {
    /// `owner/name` form used by the repository endpoints
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Parse a commit URL of the conventional shape
/// `https://github.com/<owner>/<repo>/commit/<sha>`.
///
/// Path segments 1 and 2 are the owner and repository, segment 4 the sha;
/// segment 3 must literally be `commit`. Anything else is rejected before a
/// single API call is made.
pub fn parse_commit_url(url: &str) -> GithubResult<CommitRef> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or(GithubError::InvalidCommitUrl)?;

    let mut segments = rest.split('/');
    let host = segments.next().unwrap_or_default();
    if host.is_empty() {
        return Err(GithubError::InvalidCommitUrl);
    }

    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();
    let keyword = segments.next().unwrap_or_default();
    let sha = segments.next().unwrap_or_default();

    if owner.is_empty() || repo.is_empty() || keyword != "commit" || sha.is_empty() {
        return Err(GithubError::InvalidCommitUrl);
    }

    Ok(CommitRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
        sha: sha.to_string(),
    })
}
