//! Side effects on the desktop: clipboard and default opener

/// Result of a desktop action, ready for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(String),
    Failed(String),
}

/// Copy `url` to the system clipboard
#[must_use]
pub fn copy_url(url: &str) -> ActionOutcome {
    if url.is_empty() {
        return ActionOutcome::Failed("No URL to copy".to_string());
    }

    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(url) {
            Ok(()) => ActionOutcome::Success("Copied URL to clipboard".to_string()),
            Err(e) => ActionOutcome::Failed(format!("Clipboard error: {e}")),
        },
        Err(e) => ActionOutcome::Failed(format!("Clipboard unavailable: {e}")),
    }
}

/// Open `url` with the system's default handler
#[must_use]
pub fn open_url(url: &str) -> ActionOutcome {
    if url.is_empty() {
        return ActionOutcome::Failed("No URL to open".to_string());
    }

    match open::that(url) {
        Ok(()) => ActionOutcome::Success(format!("Opened {url}")),
        Err(e) => ActionOutcome::Failed(format!("Failed to open {url}: {e}")),
    }
}
