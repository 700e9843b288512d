//! Raw-mode acquisition and the blocking keystroke read.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use twistkey_core::KEY_TIMEOUT_SENTINEL;

/// Scoped raw-mode acquisition; restores the terminal on drop so every
/// exit path (normal quit, fatal error, panic unwind) cleans up.
pub struct RawModeGuard(());

impl RawModeGuard {
	/// Puts the terminal into raw mode.
	pub fn acquire() -> io::Result<Self> {
		enable_raw_mode()?;
		Ok(Self(()))
	}
}

impl Drop for RawModeGuard {
	fn drop(&mut self) {
		if let Err(error) = disable_raw_mode() {
			tracing::warn!(%error, "failed to restore terminal mode");
		}
	}
}

/// Waits up to `timeout` for one keystroke.
///
/// Returns the pressed character, with ctrl chords folded to their
/// control byte (ctrl-c reads as `'\x03'`). A timeout or a non-character
/// key press yields the stop sentinel; non-key events (resize, focus)
/// yield `None` so the caller skips the cycle. A read error is fatal to
/// the caller.
pub fn read_key(timeout: Duration) -> io::Result<Option<char>> {
	if !event::poll(timeout)? {
		return Ok(Some(KEY_TIMEOUT_SENTINEL));
	}

	match event::read()? {
		Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(translate(key.code, key.modifiers))),
		Event::Key(_) => Ok(None),
		_ => Ok(None),
	}
}

fn translate(code: KeyCode, modifiers: KeyModifiers) -> char {
	match code {
		KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
			// Fold ctrl-a..ctrl-z to 0x01..0x1a, like a raw tty read.
			if c.is_ascii_alphabetic() {
				((c.to_ascii_lowercase() as u8) & 0x1f) as char
			} else {
				KEY_TIMEOUT_SENTINEL
			}
		}
		KeyCode::Char(c) => c,
		_ => KEY_TIMEOUT_SENTINEL,
	}
}
