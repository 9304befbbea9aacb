//! Branch reachability resolution against fixture comparisons

use contribcheck_checker::branch::commit_in_valid_branch;
use contribcheck_core::{ComparisonStatus, OwnerKind, RepoOwner, Repository};
use contribcheck_github::FixtureClient;

const SHA: &str = "a30c19e3f13765a3b48829788bc1cb8b4e95cee4";

fn repo() -> Repository {
    Repository {
        full_name: "octocat/Spoon-Knife".to_string(),
        name: "Spoon-Knife".to_string(),
        default_branch: "main".to_string(),
        fork: false,
        forks_count: 0,
        owner: RepoOwner {
            login: "octocat".to_string(),
            kind: OwnerKind::User,
        },
        viewer_can_push: false,
        parent_full_name: None,
    }
}

#[tokio::test]
async fn test_commit_behind_default_branch_is_reachable() {
    let fixture = FixtureClient::new().with_comparison("main", ComparisonStatus::Behind);

    assert!(commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
}

#[tokio::test]
async fn test_default_branch_hit_never_queries_gh_pages() {
    let fixture = FixtureClient::new().with_comparison("main", ComparisonStatus::Identical);

    assert!(commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
    assert!(fixture.called("compare_refs:octocat/Spoon-Knife:main"));
    assert!(!fixture.called("compare_refs:octocat/Spoon-Knife:gh-pages"));
}

#[tokio::test]
async fn test_absent_default_comparison_consults_gh_pages() {
    let fixture = FixtureClient::new().with_comparison("gh-pages", ComparisonStatus::Behind);

    assert!(commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
    assert!(fixture.called("compare_refs:octocat/Spoon-Knife:main"));
    assert!(fixture.called("compare_refs:octocat/Spoon-Knife:gh-pages"));
}

#[tokio::test]
async fn test_both_comparisons_absent_is_not_reachable() {
    let fixture = FixtureClient::new();

    assert!(!commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
    assert!(fixture.called("compare_refs:octocat/Spoon-Knife:gh-pages"));
}

#[tokio::test]
async fn test_commit_ahead_of_both_branches_is_not_reachable() {
    // "ahead" means the commit is not yet merged into the branch
    let fixture = FixtureClient::new()
        .with_comparison("main", ComparisonStatus::Ahead)
        .with_comparison("gh-pages", ComparisonStatus::Diverged);

    assert!(!commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
}

#[tokio::test]
async fn test_diverged_default_but_merged_into_gh_pages_is_reachable() {
    let fixture = FixtureClient::new()
        .with_comparison("main", ComparisonStatus::Diverged)
        .with_comparison("gh-pages", ComparisonStatus::Identical);

    assert!(commit_in_valid_branch(&fixture, &repo(), SHA).await.unwrap());
}
