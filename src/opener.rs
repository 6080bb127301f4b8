//! Delegation of URIs to the platform's external protocol handler.

use std::cell::RefCell;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// One-way capability for opening a URI in whatever program is registered
/// for its scheme.
///
/// Implementations never report failure to the caller; there is no way to
/// learn whether a mail client actually opened.
pub trait ExternalOpener {
    fn open(&self, uri: &str);
}

/// Opens URIs with the operating system's launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    #[cfg(target_os = "macos")]
    fn command(uri: &str) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn command(uri: &str) -> Command {
        // Bypasses cmd.exe, which would split the URI at `&`.
        let mut cmd = Command::new("rundll32");
        cmd.arg("url.dll,FileProtocolHandler").arg(uri);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn command(uri: &str) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        cmd
    }

    fn spawn(uri: &str) -> io::Result<()> {
        launch(Self::command(uri)).map(drop)
    }
}

/// Starts `cmd` and waits on it from a background thread, so a finished
/// launcher is reaped instead of lingering as a zombie.
///
/// Output is discarded so the launcher cannot scribble over the TUI.
fn launch(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    thread::Builder::new()
        .name("launcher-reaper".into())
        .spawn(move || child.wait())
}

impl ExternalOpener for SystemOpener {
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn open(&self, uri: &str) {
        match Self::spawn(uri) {
            Ok(()) => tracing::debug!(scheme = scheme(uri), "handed URI to system launcher"),
            Err(e) => tracing::warn!(error = %e, "could not launch external handler"),
        }
    }
}

/// Records every URI it is asked to open instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs received so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, uri: &str) {
        self.opened.borrow_mut().push(uri.to_string());
    }
}

impl<T: ExternalOpener + ?Sized> ExternalOpener for std::rc::Rc<T> {
    fn open(&self, uri: &str) {
        (**self).open(uri);
    }
}

// The part before the first `:`, for logging without leaking form contents.
fn scheme(uri: &str) -> &str {
    uri.split_once(':').map_or("", |(scheme, _)| scheme)
}
