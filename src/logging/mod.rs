//! Structured logging helpers.
//!
//! Log lines are a message plus a bracketed `key=value` context list:
//! `Max retries (3) exceeded for player_game_log [error=..., attempt=3]`.
//!
//! The retry layer takes its logger as a capability ([`Log`]) rather than
//! reaching for a global, so tests can capture output. [`StderrLog`] is the
//! default: warnings and errors go to stderr with a level prefix, info goes
//! to stdout. Write failures are swallowed; logging never affects the
//! operation being logged.

use std::io::Write;


/// Flat key=value context attached to a log line.
pub type Context<'a> = [(&'a str, String)];

/// Logging capability handed to the retry wrapper.
pub trait Log {
    fn info(&self, message: &str, context: &Context);
    fn warn(&self, message: &str, context: &Context);
    fn error(&self, message: &str, context: &Context);
}

/// Default logger: `Warning:`/`Error:` prefixed lines on stderr, plain
/// info lines on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLog;

impl Log for StderrLog {
    fn info(&self, message: &str, context: &Context) {
        let _ = writeln!(std::io::stdout(), "{}", format_message(message, context));
    }

    fn warn(&self, message: &str, context: &Context) {
        let _ = writeln!(
            std::io::stderr(),
            "Warning: {}",
            format_message(message, context)
        );
    }

    fn error(&self, message: &str, context: &Context) {
        let _ = writeln!(
            std::io::stderr(),
            "Error: {}",
            format_message(message, context)
        );
    }
}

/// Render `message [k=v, k2=v2]`; no brackets when the context is empty.
pub fn format_message(message: &str, context: &Context) -> String {
    if context.is_empty() {
        return message.to_string();
    }
    let pairs: Vec<String> = context.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{} [{}]", message, pairs.join(", "))
}

/// Log an info message with optional context to stdout.
pub fn log_info(message: &str, context: &Context) {
    StderrLog.info(message, context);
}

/// Log a warning with optional context to stderr.
pub fn log_warning(message: &str, context: &Context) {
    StderrLog.warn(message, context);
}

/// Log an error with optional context to stderr.
pub fn log_error(message: &str, context: &Context) {
    StderrLog.error(message, context);
}
