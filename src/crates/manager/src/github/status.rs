//! Task status resolution
//!
//! Pure derivation of a task lifecycle label from already-fetched issue,
//! pull-request, and comment data. No I/O happens here; callers fetch one
//! page of pull requests (most recently updated first) and persist the
//! resulting label themselves.

use crate::github::types::{AgentActivity, PullRequest};
use crate::TaskStatus;

/// Reference strings that link a pull request to an issue
///
/// The match is a literal, unanchored, case-insensitive substring test, so
/// `#11` also matches inside `#111`.
fn issue_references(issue_number: i64) -> [String; 3] {
    [
        format!("#{}", issue_number),
        format!("fixes #{}", issue_number),
        format!("closes #{}", issue_number),
    ]
}

/// Find the pull request linked to an issue, if any
///
/// Scans `pulls` in the order received (the API's update-descending order)
/// and returns the first whose title or body contains one of the issue
/// reference strings. Only the page that was fetched is considered; results
/// spanning multiple pages are not reconciled.
pub fn find_linked_pull_request(issue_number: i64, pulls: &[PullRequest]) -> Option<&PullRequest> {
    let refs = issue_references(issue_number);
    pulls.iter().find(|pr| {
        let title = pr.title.to_lowercase();
        let body = pr.body.as_deref().unwrap_or("").to_lowercase();
        refs.iter().any(|r| title.contains(r) || body.contains(r))
    })
}

/// Derive the lifecycle status of a delegated task
///
/// * No agent comments → `Assigned`, regardless of any linked PR.
/// * Linked PR closed and merged → `Completed`; closed unmerged → `Failed`.
/// * Linked PR open: draft → `InProgress`, otherwise `ReadyForReview`.
/// * Agent commented but no PR linked yet → `InProgress`.
pub fn resolve_status(
    linked_pr: Option<&PullRequest>,
    agent_activity: &[AgentActivity],
) -> TaskStatus {
    if agent_activity.is_empty() {
        return TaskStatus::Assigned;
    }

    if let Some(pr) = linked_pr {
        if pr.is_closed() {
            if pr.is_merged() {
                return TaskStatus::Completed;
            }
            return TaskStatus::Failed;
        }
        if pr.draft {
            return TaskStatus::InProgress;
        }
        return TaskStatus::ReadyForReview;
    }

    TaskStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(number: i64, title: &str, body: Option<&str>) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            body: body.map(str::to_string),
            state: "open".to_string(),
            draft: false,
            merged: false,
            merged_at: None,
            html_url: None,
        }
    }

    fn activity() -> Vec<AgentActivity> {
        vec![AgentActivity {
            created_at: "2024-05-01T00:00:00Z".to_string(),
            body: Some("On it.".to_string()),
        }]
    }

    #[test]
    fn test_link_by_title_reference() {
        let pulls = vec![pr(3, "Fix crash in parser #42", None)];
        let linked = find_linked_pull_request(42, &pulls);
        assert_eq!(linked.map(|p| p.number), Some(3));
    }

    #[test]
    fn test_link_by_body_reference() {
        let pulls = vec![pr(4, "Parser fixes", Some("Closes #42 and tidies tests"))];
        let linked = find_linked_pull_request(42, &pulls);
        assert_eq!(linked.map(|p| p.number), Some(4));
    }

    #[test]
    fn test_link_is_case_insensitive() {
        let pulls = vec![pr(5, "FIXES #42", None)];
        assert!(find_linked_pull_request(42, &pulls).is_some());
    }

    #[test]
    fn test_link_substring_matches_longer_numbers() {
        // "#11" is an unanchored substring of "#111": the match is literal.
        let pulls = vec![pr(6, "Address #111", None)];
        assert!(find_linked_pull_request(11, &pulls).is_some());
    }

    #[test]
    fn test_first_match_wins() {
        let pulls = vec![
            pr(9, "Most recent touching #42", None),
            pr(2, "Older one, also fixes #42", None),
        ];
        assert_eq!(find_linked_pull_request(42, &pulls).map(|p| p.number), Some(9));
    }

    #[test]
    fn test_no_link_when_nothing_references_issue() {
        let pulls = vec![pr(9, "Unrelated work", Some("touches #43"))];
        assert!(find_linked_pull_request(42, &pulls).is_none());
    }

    #[test]
    fn test_no_activity_is_assigned_regardless_of_pr() {
        let mut merged = pr(1, "#1", None);
        merged.state = "closed".to_string();
        merged.merged = true;
        assert_eq!(resolve_status(Some(&merged), &[]), TaskStatus::Assigned);
        assert_eq!(resolve_status(None, &[]), TaskStatus::Assigned);
    }

    #[test]
    fn test_merged_pr_is_completed() {
        let mut p = pr(1, "#1", None);
        p.state = "closed".to_string();
        p.merged = true;
        assert_eq!(resolve_status(Some(&p), &activity()), TaskStatus::Completed);
    }

    #[test]
    fn test_merged_via_merged_at_is_completed() {
        let mut p = pr(1, "#1", None);
        p.state = "closed".to_string();
        p.merged_at = Some("2024-05-01T00:00:00Z".to_string());
        assert_eq!(resolve_status(Some(&p), &activity()), TaskStatus::Completed);
    }

    #[test]
    fn test_closed_unmerged_pr_is_failed() {
        let mut p = pr(1, "#1", None);
        p.state = "closed".to_string();
        assert_eq!(resolve_status(Some(&p), &activity()), TaskStatus::Failed);
    }

    #[test]
    fn test_open_draft_pr_is_in_progress() {
        let mut p = pr(1, "#1", None);
        p.draft = true;
        assert_eq!(resolve_status(Some(&p), &activity()), TaskStatus::InProgress);
    }

    #[test]
    fn test_open_non_draft_pr_is_ready_for_review() {
        let p = pr(1, "#1", None);
        assert_eq!(
            resolve_status(Some(&p), &activity()),
            TaskStatus::ReadyForReview
        );
    }

    #[test]
    fn test_activity_without_pr_is_in_progress() {
        assert_eq!(resolve_status(None, &activity()), TaskStatus::InProgress);
    }
}
