//! Executor behavior against real child processes: output capture, failure
//! classification and the wall-clock bound.

#![cfg(unix)]

use std::time::Duration;

use portsage_common::error::PipelineError;
use portsage_core::command::ScanCommand;
use portsage_core::executor;

fn shell(script: &str) -> ScanCommand {
    ScanCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

#[tokio::test]
async fn captures_stdout_on_success() {
    let cmd = shell("printf 'PORT STATE SERVICE\\n22/tcp open ssh\\n'");
    let output = executor::run(&cmd, Duration::from_secs(5)).await.unwrap();

    assert!(output.contains("22/tcp open ssh"));
}

#[tokio::test]
async fn nonzero_exit_carries_stderr_diagnostic() {
    let cmd = shell("echo 'address lookup failed' >&2; exit 2");
    let result = executor::run(&cmd, Duration::from_secs(5)).await;

    match result {
        Err(PipelineError::ScanProcessFailure { stderr }) => {
            assert!(stderr.contains("address lookup failed"));
        }
        other => panic!("expected process failure, got {other:?}"),
    }
}

#[tokio::test]
async fn overrunning_process_is_classified_as_timeout() {
    let cmd = shell("sleep 5");
    let result = executor::run(&cmd, Duration::from_millis(200)).await;

    // Timeout is its own classification, not a process failure
    assert!(matches!(result, Err(PipelineError::ScanTimeout(_))));
}

#[tokio::test]
async fn missing_program_is_a_process_failure() {
    let cmd = ScanCommand {
        program: "/nonexistent/portsage-no-such-scanner".to_string(),
        args: vec![],
    };
    let result = executor::run(&cmd, Duration::from_secs(5)).await;

    assert!(matches!(
        result,
        Err(PipelineError::ScanProcessFailure { .. })
    ));
}
