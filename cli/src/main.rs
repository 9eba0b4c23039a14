mod repl;
mod terminal;

use clap::Parser;

use portsage_ai::client::AiSummarizer;
use portsage_common::config::{Config, LlmConfig};
use portsage_common::success;
use terminal::{logging, print};

#[derive(Parser)]
#[command(name = "portsage")]
#[command(about = "A natural-language network recon assistant.")]
struct CommandLine {
    /// Run a single task non-interactively and exit
    task: Option<String>,

    /// Do not print the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Reduce output, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,

    /// Path or name of the scanner executable
    #[arg(long, value_name = "PATH")]
    nmap: Option<String>,

    /// Text-generation model override
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    dotenvy::dotenv().ok();
    logging::init();

    let cfg = Config::new(commands.nmap, commands.no_banner, commands.quiet);
    let llm = LlmConfig::from_env(commands.model)?;
    let summarizer = AiSummarizer::new(&llm);

    print::banner(&cfg);

    let session = async {
        match commands.task.as_deref() {
            Some(task) => {
                if !repl::run_task(task, &cfg, &summarizer).await {
                    std::process::exit(1);
                }
                Ok(())
            }
            None => repl::run(&cfg, &summarizer).await,
        }
    };

    // The scan and the summary request are the two blocking points; Ctrl-C
    // must end either promptly. Dropping the session future reaps any
    // still-running scan process.
    tokio::select! {
        result = session => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            success!("Interrupted, session closed.");
            Ok(())
        }
    }
}
