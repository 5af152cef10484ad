//! # Clipboard
//!
//! Copies code samples out of the presenter. The platform clipboard tool
//! (pbcopy, clip, wl-copy, xclip, xsel) is tried first; when none is found
//! or it fails, the text is sent to the terminal as an OSC 52 sequence,
//! which most modern terminals (and SSH sessions) honour.
//!
//! External tools block on a child process, so `write_external` is meant
//! for tokio's blocking pool. `write_osc52` writes to the terminal and must
//! run on the event loop thread between draws.

use std::env;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;

/// Common terminal limit on the base64 payload of one OSC 52 write.
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "no clipboard tool available"),
            ClipboardError::Write(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Platform clipboard programs, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    MacOS,
    Windows,
    Wayland,
    X11,
}

impl ExternalTool {
    fn is_available(self) -> bool {
        match self {
            ExternalTool::MacOS => cfg!(target_os = "macos") && command_exists("pbcopy"),
            ExternalTool::Windows => cfg!(target_os = "windows") && command_exists("clip"),
            ExternalTool::Wayland => {
                env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy")
            }
            ExternalTool::X11 => {
                env::var_os("DISPLAY").is_some()
                    && (command_exists("xclip") || command_exists("xsel"))
            }
        }
    }
}

pub fn detect_external() -> Option<ExternalTool> {
    [
        ExternalTool::MacOS,
        ExternalTool::Windows,
        ExternalTool::Wayland,
        ExternalTool::X11,
    ]
    .into_iter()
    .find(|tool| tool.is_available())
}

/// Copy through the first available platform tool. Blocks until the tool exits.
pub fn write_external(text: &str) -> Result<ExternalTool, ClipboardError> {
    let tool = detect_external().ok_or(ClipboardError::NotAvailable)?;
    debug!("Copying {} bytes via {:?}", text.len(), tool);
    match tool {
        ExternalTool::MacOS => run_command_with_input("pbcopy", &[], text)?,
        ExternalTool::Windows => run_command_with_input("clip", &[], text)?,
        ExternalTool::Wayland => run_command_with_input("wl-copy", &[], text)?,
        ExternalTool::X11 => {
            if run_command_with_input("xclip", &["-selection", "clipboard"], text).is_err() {
                run_command_with_input("xsel", &["--clipboard", "--input"], text)?;
            }
        }
    }
    Ok(tool)
}

/// The OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> Result<String, ClipboardError> {
    let payload = STANDARD.encode(text.as_bytes());
    if payload.len() > MAX_OSC52_PAYLOAD {
        return Err(ClipboardError::Write(format!(
            "payload of {} bytes exceeds the OSC 52 limit",
            payload.len()
        )));
    }
    Ok(format!("\x1b]52;c;{payload}\x07"))
}

/// Write `text` to the terminal clipboard via OSC 52. Inside tmux the
/// sequence is wrapped in DCS passthrough.
pub fn write_osc52(text: &str, writer: &mut impl Write) -> Result<(), ClipboardError> {
    let seq = osc52_sequence(text)?;
    let out = if env::var_os("TMUX").is_some() {
        tmux_passthrough(&seq)
    } else {
        seq
    };
    writer
        .write_all(out.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

/// `ESC P tmux; <seq with ESC doubled> ESC \`
fn tmux_passthrough(seq: &str) -> String {
    format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b"))
}

fn command_exists(command: &str) -> bool {
    if command.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(command).is_file();
    }
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
    })
}

fn run_command_with_input(cmd: &str, args: &[&str], content: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Write(format!("{cmd} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_format() {
        let seq = osc52_sequence("hello").unwrap();
        assert_eq!(seq, "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_osc52_encodes_multiline_code() {
        let code = "Row(\n  children: [],\n)";
        let seq = osc52_sequence(code).unwrap();
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), code);
    }

    #[test]
    fn test_osc52_rejects_oversized_payload() {
        let big = "x".repeat(MAX_OSC52_PAYLOAD);
        assert!(matches!(osc52_sequence(&big), Err(ClipboardError::Write(_))));
    }

    #[test]
    fn test_write_osc52_to_buffer() {
        let mut out = Vec::new();
        write_osc52("hi", &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b]52;c;aGk=\x07"));
    }

    #[test]
    fn test_tmux_passthrough_doubles_escapes() {
        let wrapped = tmux_passthrough("\x1b]52;c;aGk=\x07");
        assert_eq!(wrapped, "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\");
    }

    #[test]
    fn test_missing_command_is_not_found() {
        assert!(!command_exists("deckhand-no-such-clipboard-tool"));
    }
}
