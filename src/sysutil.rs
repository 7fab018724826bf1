//! System and process helpers.
//!
//! OS/user/path detection plus thin process-execution wrappers around
//! `std::process::Command`. Execution failures (program missing, permission
//! denied) are reported as [`Error::Process`] with the OS error as source;
//! a non-zero exit status is not an error, it is captured in [`CmdOutput`].

use std::path::PathBuf;
use std::process::{Command, Output};

use serde::Serialize;

use crate::cmdline::LineParser;
use crate::envutil;
use crate::error::{Error, Result};

pub fn is_windows() -> bool {
    cfg!(windows)
}

pub fn is_mac() -> bool {
    cfg!(target_os = "macos")
}

pub fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// Current user name from the environment.
pub fn current_user() -> Option<String> {
    envutil::get("USER")
        .or_else(|| envutil::get("LOGNAME"))
        .or_else(|| envutil::get("USERNAME"))
}

pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expand a leading tilde to the user's home directory.
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Host name from `$HOSTNAME`, falling back to the `hostname` command.
pub fn hostname() -> Option<String> {
    envutil::get("HOSTNAME").or_else(|| {
        let output = Command::new("hostname").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    })
}

/// Locate an executable by searching `$PATH`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;

    for dir in std::env::split_paths(&path) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if is_windows() {
            let exe = dir.join(format!("{}.exe", name));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }

    None
}

/// Captured output from a completed process.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

impl From<Output> for CmdOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

impl CmdOutput {
    /// Error text for reporting: stderr, falling back to stdout.
    pub fn error_text(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// Run a program with arguments and capture its output.
pub fn run(program: &str, args: &[&str]) -> Result<CmdOutput> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Error::Process {
            command: program.to_string(),
            source: e,
        })?;

    Ok(CmdOutput::from(output))
}

/// Run a program in a specific working directory and capture its output.
pub fn run_in(dir: &str, program: &str, args: &[&str]) -> Result<CmdOutput> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::Process {
            command: program.to_string(),
            source: e,
        })?;

    Ok(CmdOutput::from(output))
}

/// Parse a raw command line, then run it.
pub fn run_line(line: &str) -> Result<CmdOutput> {
    crate::log_status!("exec", "Running {}", line);

    let mut parser = LineParser::new(line);
    let output = parser.to_command().output().map_err(|e| Error::Process {
        command: line.to_string(),
        source: e,
    })?;

    Ok(CmdOutput::from(output))
}

/// Check that a program runs and exits successfully.
pub fn succeeded(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_os_flag_on_desktop_targets() {
        let flags = [is_windows(), is_mac(), is_linux()];
        assert!(flags.iter().filter(|f| **f).count() <= 1);
    }

    #[test]
    fn expand_path_resolves_tilde() {
        let expanded = expand_path("~/projects");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/projects"));
    }

    #[test]
    fn expand_path_leaves_absolute_paths_alone() {
        assert_eq!(expand_path("/var/www"), "/var/www");
    }

    #[test]
    fn run_captures_stdout() {
        let out = run("echo", &["hello"]).unwrap();
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn run_reports_launch_failure_as_process_error() {
        let err = run("utilkit-no-such-binary", &[]).unwrap_err();
        assert_eq!(err.code(), "PROCESS_LAUNCH_ERROR");
    }

    #[test]
    fn run_in_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let out = run_in(dir.path().to_str().unwrap(), "ls", &[]).unwrap();
        assert!(out.success);
        assert!(out.stdout.contains("marker.txt"));
    }

    #[test]
    fn run_line_parses_quoted_arguments() {
        let out = run_line("echo \"hello world\"").unwrap();
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "hello world");
    }

    #[test]
    fn nonzero_exit_is_captured_not_an_error() {
        let out = run("false", &[]).unwrap();
        assert!(!out.success);
        assert_ne!(out.exit_code, 0);
    }

    #[test]
    fn succeeded_reflects_exit_status() {
        assert!(succeeded("true", &[]));
        assert!(!succeeded("false", &[]));
        assert!(!succeeded("utilkit-no-such-binary", &[]));
    }

    #[test]
    fn error_text_prefers_stderr() {
        let out = CmdOutput {
            stdout: "out".to_string(),
            stderr: "err".to_string(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(out.error_text(), "err");

        let out = CmdOutput {
            stdout: "out".to_string(),
            stderr: String::new(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(out.error_text(), "out");
    }

    #[cfg(unix)]
    #[test]
    fn find_executable_locates_sh() {
        assert!(find_executable("sh").is_some());
    }

    #[test]
    fn find_executable_misses_unknown_binary() {
        assert!(find_executable("utilkit-no-such-binary").is_none());
    }

    #[test]
    fn cmd_output_serializes_to_json() {
        let out = CmdOutput {
            stdout: "done".to_string(),
            stderr: String::new(),
            success: true,
            exit_code: 0,
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"exit_code\":0"));
        assert!(json.contains("\"success\":true"));
    }
}
