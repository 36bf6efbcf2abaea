//! Event input/output configuration for the CLI.

use std::path::PathBuf;

/// Where the event JSON comes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EventSource {
    /// Read from standard input.
    #[default]
    Stdin,
    /// Read from a file.
    File(PathBuf),
}

impl EventSource {
    /// Interpret an event path argument; `-` means stdin.
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" || path.as_os_str().is_empty() {
            EventSource::Stdin
        } else {
            EventSource::File(path)
        }
    }

    /// Label for log messages.
    pub fn describe(&self) -> String {
        match self {
            EventSource::Stdin => "<stdin>".to_string(),
            EventSource::File(path) => path.display().to_string(),
        }
    }
}

/// Input/output configuration, filled in from the command line.
#[derive(Clone, Debug, Default)]
pub struct InputConfig {
    /// Event source (positional argument or EVENT_FILE).
    pub source: EventSource,
    /// Pretty-print the returned request (--pretty or PRETTY_OUTPUT).
    pub pretty: bool,
}
