//! Shared domain model and cross-cutting concerns for portsage.
//!
//! Everything the other crates agree on lives here: the intent model,
//! finding records, typed pipeline errors, process configuration and the
//! summarizer seam. Nothing in this crate performs IO beyond reading
//! environment variables at startup.

pub mod config;
pub mod error;
pub mod finding;
pub mod intent;
pub mod print;
pub mod summarize;
