//! Opens download links in the user's browser through the platform opener.

use std::io;
use std::process::{Command, Stdio};

/// Program and arguments that open `url` on this platform.
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        windows_command(url)
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// `cmd /C start` invocation. The empty string is `start`'s window title;
/// the URL is caret-escaped because cmd parses the line before `start` sees it.
fn windows_command(url: &str) -> (&'static str, Vec<String>) {
    (
        "cmd",
        vec!["/C".into(), "start".into(), String::new(), cmd_escape(url)],
    )
}

fn cmd_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

/// Blocks until the opener exits. Must not run on the event loop thread.
pub fn open_url(url: &str) -> io::Result<()> {
    let (program, args) = opener_command(url);
    let status = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}
