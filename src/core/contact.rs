//! # Contact Hand-off
//!
//! Email and phone actions are handed to the platform's URI opener
//! (`mailto:` / `tel:`). Nothing is delivered by the app itself.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    pub fn uri(&self, value: &str) -> String {
        match self {
            ContactKind::Email => format!("mailto:{value}"),
            ContactKind::Phone => format!("tel:{value}"),
        }
    }

    /// What the user sees when the hand-off fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ContactKind::Email => "Unable to open email client",
            ContactKind::Phone => "Unable to open phone",
        }
    }
}

#[derive(Debug)]
pub enum ContactError {
    /// The opener couldn't be started.
    Spawn(io::Error),
    /// The opener ran but reported failure.
    Exited(Option<i32>),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Spawn(e) => write!(f, "failed to start opener: {e}"),
            ContactError::Exited(Some(code)) => write!(f, "opener exited with status {code}"),
            ContactError::Exited(None) => write!(f, "opener terminated by signal"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Opens a contact URI somewhere outside the app.
pub trait ContactLauncher: Send + Sync {
    fn open(&self, uri: &str) -> Result<(), ContactError>;
}

/// Launches the OS URI handler (`xdg-open`, `open`, or `start`).
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher {
    /// Program to run instead of the platform default.
    pub opener: Option<String>,
}

impl SystemLauncher {
    pub fn new(opener: Option<String>) -> Self {
        Self { opener }
    }

    fn command(&self, uri: &str) -> Command {
        if let Some(ref program) = self.opener {
            let mut cmd = Command::new(program);
            cmd.arg(uri);
            return cmd;
        }
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl ContactLauncher for SystemLauncher {
    fn open(&self, uri: &str) -> Result<(), ContactError> {
        info!("Handing off {}", uri);
        // Keep the opener from scribbling over the alternate screen
        let status = self
            .command(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(ContactError::Spawn)?;
        if status.success() {
            Ok(())
        } else {
            warn!("Opener for {} exited with {:?}", uri, status.code());
            Err(ContactError::Exited(status.code()))
        }
    }
}
