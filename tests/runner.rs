//! End-to-end tests for the async command runner and the integrity
//! classification contract, using real shell invocations.

use vmdash::integrity::{classify, CheckOutcome};
use vmdash::runner;

#[tokio::test]
async fn echo_returns_stdout_and_exit_zero() {
    let res = runner::run("echo hello").await;
    assert_eq!(res.exit_code, Some(0));
    assert!(res.stdout.contains("hello"));
    assert!(res.stderr.is_empty());
    assert!(!res.is_launch_failure());
}

#[tokio::test]
async fn shell_interpretation_applies() {
    // pipes and redirection are passed through, not escaped
    let res = runner::run("printf 'a\\nb\\nc\\n' | wc -l").await;
    assert_eq!(res.exit_code, Some(0));
    assert_eq!(res.stdout.trim(), "3");
}

#[tokio::test]
async fn missing_command_is_distinguishable_from_plain_failure() {
    // Under `sh -c`, a missing command exits 127 with a shell diagnostic on
    // stderr; `false` exits 1 silently. The two must render differently.
    let missing = runner::run("nonexistent-command-xyz").await;
    assert!(!missing.is_launch_failure(), "sh itself should spawn fine");
    assert_eq!(missing.exit_code, Some(127));
    assert!(!missing.stderr.is_empty());

    let plain = runner::run("false").await;
    assert_eq!(plain.exit_code, Some(1));
    assert!(plain.stderr.is_empty());

    assert_ne!(missing.exit_code, plain.exit_code);
}

#[tokio::test]
async fn stderr_is_captured_separately() {
    let res = runner::run("echo oops >&2").await;
    assert_eq!(res.exit_code, Some(0));
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("oops"));
}

#[tokio::test]
async fn exit_codes_drive_the_tri_state_classification() {
    let clean = runner::run("exit 0").await;
    assert_eq!(classify(clean.exit_code), CheckOutcome::Clean);

    let changed = runner::run("exit 5").await;
    assert_eq!(classify(changed.exit_code), CheckOutcome::ChangesDetected);

    let failed = runner::run("exit 7").await;
    assert_eq!(classify(failed.exit_code), CheckOutcome::Failed(Some(7)));
}

#[tokio::test]
async fn concurrent_runs_complete_independently() {
    let (a, b) = tokio::join!(runner::run("echo first"), runner::run("echo second"));
    assert!(a.stdout.contains("first"));
    assert!(b.stdout.contains("second"));
    assert_eq!(a.exit_code, Some(0));
    assert_eq!(b.exit_code, Some(0));
}
