use serde::{Deserialize, Serialize};

/// Criteria that must all hold for a commit to count as a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndCriteria {
    /// Commit is reachable from the default branch or the pages branch
    pub commit_in_valid_branch: bool,
    /// Commit was authored within the rolling contribution window
    pub commit_in_last_year: bool,
    /// The repository the commit lives in is not itself a fork
    pub repo_not_a_fork: bool,
    /// The commit author email belongs to the authenticated user
    pub commit_email_linked_to_user: bool,
}

impl AndCriteria {
    pub fn all_met(&self) -> bool {
        self.commit_in_valid_branch
            && self.commit_in_last_year
            && self.repo_not_a_fork
            && self.commit_email_linked_to_user
    }
}

/// Criteria of which at least one must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrCriteria {
    /// The user has starred the repository
    pub user_has_starred_repo: bool,
    /// The user has push access to the repository
    pub user_can_push_to_repo: bool,
    /// The repository is owned by an organization the user is a member of
    pub user_is_repo_org_member: bool,
    /// The user owns a fork of the repository
    pub user_has_fork_of_repo: bool,
}

impl OrCriteria {
    pub fn any_met(&self) -> bool {
        self.user_has_starred_repo
            || self.user_can_push_to_repo
            || self.user_is_repo_org_member
            || self.user_has_fork_of_repo
    }
}

/// Outcome of one contribution check.
///
/// `contribution` always equals `and_criteria.all_met() &&
/// or_criteria.any_met()`; it is computed once in [`CriteriaResult::new`] and
/// the individual fields are kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaResult {
    pub contribution: bool,
    pub and_criteria: AndCriteria,
    pub or_criteria: OrCriteria,
}

impl CriteriaResult {
    pub fn new(and_criteria: AndCriteria, or_criteria: OrCriteria) -> Self {
        Self {
            contribution: and_criteria.all_met() && or_criteria.any_met(),
            and_criteria,
            or_criteria,
        }
    }
}
