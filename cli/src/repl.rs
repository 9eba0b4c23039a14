//! The interactive surface: one prompt, one pipeline run, print, repeat.
//!
//! Stdin is read on a dedicated blocking thread feeding a channel, so the
//! async session stays responsive to Ctrl-C while waiting for input. Every
//! pipeline error is rendered and the loop keeps going; only `exit`, EOF
//! or an interrupt end the session.

use std::io::{self, BufRead, Write};

use colored::*;
use tokio::sync::mpsc;

use portsage_common::config::Config;
use portsage_common::error::PipelineError;
use portsage_common::summarize::Summarizer;
use portsage_common::{error, success, warn};
use portsage_core::pipeline::{self, ScanReport};

use crate::terminal::{format, print, spinner};

/// Lines of raw scanner output shown in the excerpt view.
const RAW_EXCERPT_LINES: usize = 20;

enum UserInput {
    Line(String),
    Eof,
}

/// Reads stdin lines on a blocking thread and forwards them through a
/// channel.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<UserInput> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        loop {
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let _ = tx.send(UserInput::Eof);
                    break;
                }
                Ok(_) => {
                    if tx.send(UserInput::Line(line)).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Runs the read-loop until `exit`, EOF or channel close.
pub async fn run(cfg: &Config, summarizer: &dyn Summarizer) -> anyhow::Result<()> {
    let mut stdin_rx = spawn_stdin_reader();

    loop {
        print!("{} ", "portsage>".cyan().bold());
        io::stdout().flush()?;

        let input = match stdin_rx.recv().await {
            Some(UserInput::Line(line)) => line,
            Some(UserInput::Eof) | None => {
                println!();
                break;
            }
        };

        let task = input.trim();
        if task.is_empty() {
            warn!("Please enter a task, e.g. 'scan 192.168.1.10 for web services'.");
            continue;
        }
        if task.eq_ignore_ascii_case("exit") {
            break;
        }

        run_task(task, cfg, summarizer).await;
    }

    success!("Session closed.");
    Ok(())
}

/// Runs one task through the pipeline and renders the outcome. Returns
/// whether the request succeeded, for the one-shot exit code.
pub async fn run_task(task: &str, cfg: &Config, summarizer: &dyn Summarizer) -> bool {
    let spin = spinner::start(format!("working on: {task}"));
    let progress = |msg: &str| spin.update(msg.to_string());

    let result = pipeline::run(task, cfg, summarizer, Some(&progress)).await;
    spin.finish();

    match result {
        Ok(report) => {
            print_report(&report, cfg);
            true
        }
        Err(e) => {
            render_error(e);
            false
        }
    }
}

fn render_error(e: PipelineError) {
    match e {
        PipelineError::UnrecognizedIntent => {
            warn!("Could not extract a valid IPv4 target from that task. Please try again.");
        }
        PipelineError::InvalidCommand => {
            warn!("That task produced no usable scan target. Please try again.");
        }
        PipelineError::ScanTimeout(_) => {
            error!("{e}");
        }
        PipelineError::ScanProcessFailure { .. } => {
            error!("{e}");
        }
        PipelineError::SummaryRequestFailure(_) => {
            error!("{e}");
        }
    }
}

fn print_report(report: &ScanReport, cfg: &Config) {
    success!("Scan finished: {}", report.command_line.bold());

    if cfg.quiet == 0 && !report.raw_output.trim().is_empty() {
        print::header("scanner output", cfg.quiet);
        for line in report.raw_output.lines().take(RAW_EXCERPT_LINES) {
            print::print_status(line);
        }
    }

    if report.findings.is_empty() {
        print::header("no open ports detected", cfg.quiet);
    } else {
        print::header("open ports", cfg.quiet);
        for (idx, finding) in report.findings.iter().enumerate() {
            print::tree_head(idx, &finding.port_protocol);
            print::as_tree_one_level(format::finding_details(finding));
        }
    }

    print::header("summary", cfg.quiet);
    for line in report.summary.lines() {
        print::print(line);
    }
    print::end_of_program();
}
