//! End-to-end tests of the cleanup pass

use sweep::github::MergeStatus;
use sweep::policy::engine::{run_cleanup, Outcome};
use sweep::policy::rules::DeleteReason;

use super::helpers::{days_ago, fixed_now, test_policy, MockRepo};

#[test]
fn test_protected_branches_are_never_deleted() {
    let mut repo = MockRepo::new();
    // Protected even though merged, ancient, and pattern-matching
    repo.add_branch("main", "sha-main", days_ago(400), MergeStatus::Behind);
    repo.add_branch("release", "sha-rel", days_ago(400), MergeStatus::Behind);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert!(repo.deleted_branches().is_empty());
    assert!(report
        .outcomes
        .iter()
        .all(|entry| matches!(entry.outcome, Outcome::Protected)));
}

#[test]
fn test_merged_branch_deleted_with_merged_reason() {
    let mut repo = MockRepo::new();
    // Also inactive and pattern-matching, but merged is checked first
    repo.add_branch("feat/done", "sha-1", days_ago(90), MergeStatus::Behind);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert_eq!(repo.deleted_branches(), vec!["feat/done"]);
    assert!(matches!(
        report.outcomes[0].outcome,
        Outcome::Deleted(DeleteReason::Merged)
    ));
}

#[test]
fn test_inactive_branch_deleted_with_inactive_reason() {
    let mut repo = MockRepo::new();
    repo.add_branch("old-fix", "sha-1", days_ago(40), MergeStatus::Ahead);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert_eq!(repo.deleted_branches(), vec!["old-fix"]);
    assert!(matches!(
        report.outcomes[0].outcome,
        Outcome::Deleted(DeleteReason::Inactive)
    ));
}

#[test]
fn test_pattern_branch_deleted_with_pattern_reason() {
    let mut repo = MockRepo::new();
    repo.add_branch("feat/x", "sha-1", days_ago(5), MergeStatus::Ahead);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert_eq!(repo.deleted_branches(), vec!["feat/x"]);
    assert!(matches!(
        report.outcomes[0].outcome,
        Outcome::Deleted(DeleteReason::PatternMatch)
    ));
}

#[test]
fn test_unmatched_branch_is_retained() {
    let mut repo = MockRepo::new();
    repo.add_branch("wip-experiment", "sha-1", days_ago(5), MergeStatus::Diverged);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert!(repo.deleted_branches().is_empty());
    assert!(matches!(report.outcomes[0].outcome, Outcome::Retained));
}

#[test]
fn test_threshold_boundary_is_not_inactive() {
    let mut repo = MockRepo::new();
    // Exactly 30 days old with a 30-day threshold: still active
    repo.add_branch("boundary", "sha-1", days_ago(30), MergeStatus::Ahead);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert!(repo.deleted_branches().is_empty());
    assert!(matches!(report.outcomes[0].outcome, Outcome::Retained));
}

#[test]
fn test_each_branch_deleted_at_most_once() {
    let mut repo = MockRepo::new();
    repo.add_branch("feat/old-merged", "sha-1", days_ago(90), MergeStatus::Behind);
    repo.add_branch("feat/old-open", "sha-2", days_ago(90), MergeStatus::Diverged);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert_eq!(
        repo.deleted_branches(),
        vec!["feat/old-merged", "feat/old-open"]
    );
    assert_eq!(report.deleted().count(), 2);
}

#[test]
fn test_full_pass_over_mixed_branches() {
    let mut repo = MockRepo::new();
    repo.add_branch("main", "sha-main", days_ago(1), MergeStatus::Identical);
    repo.add_branch("feat/x", "sha-fx", days_ago(5), MergeStatus::Ahead);
    repo.add_branch("old-fix", "sha-of", days_ago(40), MergeStatus::Ahead);
    repo.add_branch("done", "sha-dn", days_ago(10), MergeStatus::Behind);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert!(matches!(report.outcomes[0].outcome, Outcome::Protected));
    assert!(matches!(
        report.outcomes[1].outcome,
        Outcome::Deleted(DeleteReason::PatternMatch)
    ));
    assert!(matches!(
        report.outcomes[2].outcome,
        Outcome::Deleted(DeleteReason::Inactive)
    ));
    assert!(matches!(
        report.outcomes[3].outcome,
        Outcome::Deleted(DeleteReason::Merged)
    ));
    assert_eq!(repo.deleted_branches(), vec!["feat/x", "old-fix", "done"]);
}

#[test]
fn test_failure_on_one_branch_does_not_stop_the_pass() {
    let mut repo = MockRepo::new();
    repo.add_branch("done-1", "sha-1", days_ago(10), MergeStatus::Behind);
    repo.add_branch("broken", "sha-2", days_ago(10), MergeStatus::Behind);
    repo.add_branch("done-2", "sha-3", days_ago(10), MergeStatus::Behind);
    repo.fail_branch("broken");

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    // The failing branch is reported, the other two are still deleted
    assert_eq!(repo.deleted_branches(), vec!["done-1", "done-2"]);
    assert!(matches!(report.outcomes[1].outcome, Outcome::Failed(_)));
    assert!(report.has_failures());
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_dry_run_deletes_nothing() {
    let mut repo = MockRepo::new();
    repo.add_branch("feat/x", "sha-fx", days_ago(5), MergeStatus::Ahead);
    repo.add_branch("done", "sha-dn", days_ago(10), MergeStatus::Behind);

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), true).unwrap();

    // Same decisions as a real pass, zero delete calls
    assert!(repo.deleted_branches().is_empty());
    assert_eq!(report.deleted().count(), 2);
}

#[test]
fn test_protected_branch_needs_no_metadata() {
    let mut repo = MockRepo::new();
    repo.add_branch("main", "sha-main", days_ago(1), MergeStatus::Identical);
    // Even when detail fetches would fail, protection short-circuits first
    repo.fail_branch("main");

    let report = run_cleanup(&repo, &test_policy(), fixed_now(), false).unwrap();

    assert!(matches!(report.outcomes[0].outcome, Outcome::Protected));
    assert!(!report.has_failures());
}
