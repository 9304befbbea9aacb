pub mod criteria;
pub mod types;
pub mod window;

// Re-export commonly used types
pub use criteria::{AndCriteria, CriteriaResult, OrCriteria};
pub use types::{Commit, ComparisonStatus, ForkCandidate, OwnerKind, RepoOwner, Repository, User};
pub use window::{CONTRIBUTION_WINDOW_SECONDS, authored_in_last_year};
