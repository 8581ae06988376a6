//! End-to-end sessions against the recording gateway.

use std::io::Cursor;

use rstest::rstest;

use super::support::{Call, RecordingGateway, comment, context, pull_request};
use crate::github::locator::PullRequestNumber;
use crate::workflow::console::Console;
use crate::workflow::context::SessionContext;
use crate::workflow::error::{Checkpoint, SessionError};
use crate::workflow::session::{SessionOutcome, run_session};

fn targeting_42() -> SessionContext {
    SessionContext {
        target: Some(PullRequestNumber::new(42).expect("42 is valid")),
        ..context()
    }
}

fn spam_comments() -> Vec<crate::github::models::IssueComment> {
    vec![
        comment(1, Some("bob")),
        comment(2, Some("spammer1")),
        comment(3, Some("spammer1")),
    ]
}

async fn run(
    gateway: &RecordingGateway,
    context: &SessionContext,
    answers: &str,
) -> (Result<SessionOutcome, SessionError>, String) {
    let mut console = Console::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
    let result = run_session(gateway, context, &mut console).await;
    let (_, output) = console.into_parts();
    (
        result,
        String::from_utf8(output).expect("output should be valid UTF-8"),
    )
}

#[tokio::test]
async fn owner_deletes_spam_after_two_confirmations() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(spam_comments());

    let (result, output) = run(&gateway, &targeting_42(), "y\ny\n").await;

    assert_eq!(result, Ok(SessionOutcome::Deleted { count: 2 }));
    assert_eq!(
        gateway.calls(),
        vec![
            Call::PullRequest(42),
            Call::ListComments(42),
            Call::DeleteComment(2),
            Call::DeleteComment(3),
            Call::RateLimit,
        ]
    );
    assert!(output.contains("2 comments to delete"), "{output}");
    assert!(output.contains("GitHub rate limit: 4990/5000"), "{output}");
}

#[tokio::test]
async fn foreign_pull_request_stops_after_guard() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "carol")])
        .with_comments(spam_comments());

    let (result, output) = run(&gateway, &targeting_42(), "y\ny\n").await;

    assert_eq!(
        result,
        Err(SessionError::NotPullRequestAuthor {
            actor: "alice".to_owned(),
            author: "carol".to_owned(),
        })
    );
    assert_eq!(
        gateway.calls(),
        vec![Call::PullRequest(42), Call::RateLimit],
        "no comment listing or deletion may follow a failed guard"
    );
    assert!(!output.contains("ok? [y/n]"), "gate shown: {output}");
}

#[tokio::test]
async fn empty_candidate_set_succeeds_without_second_gate() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(vec![comment(1, Some("bob"))]);

    let (result, output) = run(&gateway, &targeting_42(), "y\n").await;

    assert_eq!(result, Ok(SessionOutcome::NothingToDelete));
    assert!(output.contains("nothing to delete here"), "{output}");
    assert_eq!(
        output.matches("ok? [y/n]").count(),
        1,
        "only the pull request gate should be shown: {output}"
    );
    assert!(gateway.deleted().is_empty(), "nothing should be deleted");
}

#[tokio::test]
async fn refusing_deletion_issues_no_delete() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(vec![
            comment(5, Some("spammer1")),
            comment(6, Some("spammer1")),
        ]);

    let (result, _) = run(&gateway, &targeting_42(), "y\nn\n").await;

    assert_eq!(
        result,
        Err(SessionError::Refused {
            checkpoint: Checkpoint::Deletion
        })
    );
    assert!(gateway.deleted().is_empty(), "no delete call may be issued");
}

#[rstest]
#[case::no("n\n")]
#[case::upper("Y\n")]
#[case::word("yes\n")]
#[case::empty("\n")]
#[case::end_of_input("")]
#[tokio::test]
async fn refusing_pull_request_stops_before_listing_comments(#[case] answers: &str) {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(spam_comments());

    let (result, _) = run(&gateway, &targeting_42(), answers).await;

    assert_eq!(
        result,
        Err(SessionError::Refused {
            checkpoint: Checkpoint::PullRequest
        })
    );
    assert_eq!(gateway.calls(), vec![Call::PullRequest(42), Call::RateLimit]);
}

#[tokio::test]
async fn deletion_failure_leaves_later_comments() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(vec![
            comment(1, Some("spammer1")),
            comment(2, Some("spammer1")),
            comment(3, Some("spammer1")),
        ])
        .failing_delete(2);

    let (result, output) = run(&gateway, &targeting_42(), "y\ny\n").await;

    assert!(
        matches!(
            result,
            Err(SessionError::DeletionFailed {
                comment_id: 2,
                deleted: 1,
                ..
            })
        ),
        "unexpected result: {result:?}"
    );
    assert_eq!(gateway.deleted(), vec![1, 2], "comment 3 must not be attempted");
    assert!(output.contains("about to delete comment [2] ... fail"), "{output}");
}

#[tokio::test]
async fn interactive_choice_resolves_own_pull_request() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![
            pull_request(40, "bob"),
            pull_request(41, "alice"),
            pull_request(42, "alice"),
        ])
        .with_comments(spam_comments());

    let (result, output) = run(&gateway, &context(), "1\ny\ny\n").await;

    assert_eq!(result, Ok(SessionOutcome::Deleted { count: 2 }));
    assert!(output.contains("0] (#41) PR 41"), "{output}");
    assert!(output.contains("1] (#42) PR 42"), "{output}");
    assert_eq!(
        gateway.calls().first(),
        Some(&Call::ListPullRequests),
        "interactive resolution lists pull requests first"
    );
    assert!(gateway.calls().contains(&Call::PullRequest(42)));
}

#[tokio::test]
async fn explicit_target_never_lists_pull_requests() {
    let gateway = RecordingGateway::default()
        .with_pulls(vec![pull_request(42, "alice")])
        .with_comments(vec![]);

    let (result, _) = run(&gateway, &targeting_42(), "y\n").await;

    assert_eq!(result, Ok(SessionOutcome::NothingToDelete));
    assert!(
        !gateway.calls().contains(&Call::ListPullRequests),
        "listing must not happen with an explicit target"
    );
}

#[tokio::test]
async fn invalid_choice_aborts_before_any_lookup() {
    let gateway = RecordingGateway::default().with_pulls(vec![pull_request(41, "alice")]);

    let (result, _) = run(&gateway, &context(), "one\n").await;

    assert_eq!(
        result,
        Err(SessionError::InvalidSelection {
            input: "one".to_owned()
        })
    );
    assert_eq!(gateway.calls(), vec![Call::ListPullRequests, Call::RateLimit]);
}
