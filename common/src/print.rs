//! User-facing status lines with level symbols.
//!
//! These are conversation output, not diagnostics; diagnostics go through
//! `tracing` and the cli's formatter instead.

use colored::*;

pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

pub fn emit(level: Level, msg: String) {
    let symbol: ColoredString = match level {
        Level::Info => "[+]".green().bold(),
        Level::Success => "[✓]".green().bold(),
        Level::Warn => "[*]".yellow().bold(),
        Level::Error => "[-]".red().bold(),
    };
    println!("{symbol} {msg}");
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::Level::Info, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::Level::Success, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::Level::Warn, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::print::emit($crate::print::Level::Error, format!($($arg)*))
    };
}
