//! Process-wide configuration, built once at startup in the cli and passed
//! explicitly into the pipeline and the summarizer. Nothing below the cli
//! reads ambient environment state.

use std::env;
use std::time::Duration;

use anyhow::Context;

/// Upper bound on one scan's wall-clock duration. A single fixed bound is
/// applied regardless of mode.
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(120);

const SCANNER_PATH_VAR: &str = "PORTSAGE_NMAP";
const API_KEY_VAR: &str = "GROQ_API_KEY";
const API_URL_VAR: &str = "PORTSAGE_API_URL";
const MODEL_VAR: &str = "PORTSAGE_MODEL";

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Windows installs carry nmap outside PATH, everywhere else the bare
/// command name resolves through PATH.
const WINDOWS_SCANNER_PATH: &str = r"C:\Program Files (x86)\Nmap\nmap.exe";

pub struct Config {
    /// Program name or absolute path of the external scanner.
    pub scanner_path: String,

    /// Wall-clock bound for one scanner invocation.
    pub scan_timeout: Duration,

    /// Suppresses the startup banner.
    pub no_banner: bool,

    /// Output verbosity reduction, 0 = everything.
    ///
    /// At 1 the raw scanner output excerpt is dropped, at 2 only findings
    /// and the summary remain.
    pub quiet: u8,
}

impl Config {
    pub fn new(scanner_override: Option<String>, no_banner: bool, quiet: u8) -> Self {
        Self {
            scanner_path: scanner_override.unwrap_or_else(default_scanner_path),
            scan_timeout: SCAN_TIMEOUT,
            no_banner,
            quiet,
        }
    }
}

/// Resolves the scanner executable for this host. The `PORTSAGE_NMAP`
/// variable wins over the per-OS default.
fn default_scanner_path() -> String {
    if let Ok(path) = env::var(SCANNER_PATH_VAR) {
        return path;
    }
    if cfg!(windows) {
        WINDOWS_SCANNER_PATH.to_string()
    } else {
        "nmap".to_string()
    }
}

/// Credentials and endpoint for the text-generation boundary. Loaded once
/// at process start; missing credentials fail startup, not the pipeline.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl LlmConfig {
    pub fn from_env(model_override: Option<String>) -> anyhow::Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} is not set, summaries need an API key"))?;
        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = model_override
            .or_else(|| env::var(MODEL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }
}
