//! Full pipeline runs against stub scanner scripts, covering the happy
//! path and every classified failure.

#![cfg(unix)]

use std::time::Duration;

use portsage_common::config::Config;
use portsage_common::error::PipelineError;
use portsage_common::intent::ScanMode;
use portsage_core::pipeline;

use crate::util::{FailingSummarizer, StubSummarizer, stub_scanner};

fn config_for(scanner: &std::path::Path) -> Config {
    Config::new(Some(scanner.display().to_string()), true, 0)
}

#[tokio::test]
async fn web_task_flows_through_to_the_summary() {
    let scanner = stub_scanner(
        "happy",
        "echo 'PORT    STATE SERVICE VERSION'\n\
         echo '443/tcp open https nginx 1.18'",
    );
    let cfg = config_for(&scanner);

    let report = pipeline::run(
        "scan 192.168.1.10 for web vulnerabilities",
        &cfg,
        &StubSummarizer,
        None,
    )
    .await
    .unwrap();

    assert_eq!(report.target, "192.168.1.10");
    assert_eq!(report.mode, ScanMode::Web);
    assert!(report.command_line.ends_with("-p 80,443,8080 -sV 192.168.1.10"));
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].port_protocol, "443/tcp");
    assert_eq!(report.findings[0].service, "https");
    assert_eq!(report.findings[0].extra, "nginx 1.18");
    assert_eq!(
        report.summary,
        "stub summary for 192.168.1.10 in web mode with 1 findings"
    );
}

#[tokio::test]
async fn scan_without_open_ports_yields_an_empty_findings_list() {
    let scanner = stub_scanner("quiet-host", "echo 'Host is up (0.0001s latency).'");
    let cfg = config_for(&scanner);

    let report = pipeline::run("scan 10.0.0.5", &cfg, &StubSummarizer, None)
        .await
        .unwrap();

    assert_eq!(report.mode, ScanMode::Quick);
    assert!(report.findings.is_empty());
    assert!(report.summary.contains("0 findings"));
}

#[tokio::test]
async fn task_without_target_never_reaches_the_scanner() {
    // Deliberately bogus scanner path: extraction fails first
    let cfg = Config::new(Some("/nonexistent/scanner".to_string()), true, 0);

    let result = pipeline::run("scan the printer please", &cfg, &StubSummarizer, None).await;

    assert!(matches!(result, Err(PipelineError::UnrecognizedIntent)));
}

#[tokio::test]
async fn timed_out_scan_produces_no_report() {
    let scanner = stub_scanner("slowpoke", "sleep 5");
    let mut cfg = config_for(&scanner);
    cfg.scan_timeout = Duration::from_millis(200);

    let result = pipeline::run("scan 10.0.0.5", &cfg, &StubSummarizer, None).await;

    assert!(matches!(result, Err(PipelineError::ScanTimeout(_))));
}

#[tokio::test]
async fn failed_scan_surfaces_the_diagnostic() {
    let scanner = stub_scanner("broken", "echo 'interface down' >&2; exit 1");
    let cfg = config_for(&scanner);

    let result = pipeline::run("scan 10.0.0.5", &cfg, &StubSummarizer, None).await;

    match result {
        Err(PipelineError::ScanProcessFailure { stderr }) => {
            assert!(stderr.contains("interface down"));
        }
        other => panic!("expected process failure, got {other:?}"),
    }
}

#[tokio::test]
async fn summary_failure_fails_the_request() {
    let scanner = stub_scanner("summary-fail", "echo '80/tcp open http'");
    let cfg = config_for(&scanner);

    let result = pipeline::run("scan 10.0.0.5", &cfg, &FailingSummarizer, None).await;

    assert!(matches!(
        result,
        Err(PipelineError::SummaryRequestFailure(_))
    ));
}
