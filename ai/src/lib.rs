//! The remote text-generation boundary.
//!
//! [`client::AiSummarizer`] is the production [`Summarizer`] implementation:
//! it renders the findings into a fixed prompt and sends one low-temperature
//! chat-completions request. The no-findings case never leaves the process.
//!
//! [`Summarizer`]: portsage_common::summarize::Summarizer

pub mod client;
pub mod prompt;
