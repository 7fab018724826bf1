/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("exec", "Running {}", line);
/// log_status!("env", "Expanded {} placeholders", count);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod cmdline;
pub mod envutil;
pub mod error;
pub mod sysutil;
pub mod timeutil;

// Re-export the common types so callers can write `utilkit::LineParser`
// instead of `utilkit::cmdline::LineParser`
pub use cmdline::{LineBuilder, LineParser};
pub use error::{Error, Result};
