use arboard::Clipboard;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Copies `text` on a blocking worker. Failure is reported on stderr and
/// never reaches the caller.
pub fn copy_in_background(text: String) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let chars = text.chars().count();
        match copy_text(text) {
            Ok(()) => debug!(chars, "copied to clipboard"),
            Err(err) => {
                warn!(error = %err, "clipboard unavailable");
                eprintln!("! could not copy to the clipboard: {err}");
            }
        }
    })
}

// X11 and Wayland selections are served by the owning process. `desk` exits
// right after copying, so the worker holds the selection until another
// application (usually a clipboard manager) takes it over.
#[cfg(target_os = "linux")]
fn copy_text(text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    let mut clipboard = Clipboard::new()?;
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn copy_text(text: String) -> Result<(), arboard::Error> {
    Clipboard::new()?.set_text(text)
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
