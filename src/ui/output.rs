//! Output abstraction layer
//!
//! Commands report progress through [`OutputWriter`] so the same code can
//! print to the terminal or feed the browser's status bar.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use pixr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("p1  Ada Lovelace");
/// output.success("Saved p1.jpg");
/// output.error("Photo not found");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only result lines and errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// One status bar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

/// Buffered writer for the browser's status bar
///
/// Messages expire after a TTL. Clones share the same buffer, so background
/// tasks can report into the bar the UI thread renders.
#[derive(Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<StatusMessage>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a status bar writer with the default TTL (6 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(6))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatusMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Most recent message that has not expired
    #[must_use]
    pub fn latest(&self) -> Option<StatusMessage> {
        let now = Instant::now();
        self.lock()
            .iter()
            .rev()
            .find(|msg| now.duration_since(msg.created_at) < self.ttl)
            .cloned()
    }

    /// Number of messages that have not expired
    #[must_use]
    pub fn active_count(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|msg| now.duration_since(msg.created_at) < self.ttl)
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, level: MessageLevel, text: &str) {
        let mut messages = self.lock();
        messages.push(StatusMessage {
            level,
            text: text.to_string(),
            created_at: Instant::now(),
        });

        if messages.len() > 50 {
            messages.drain(0..25);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
