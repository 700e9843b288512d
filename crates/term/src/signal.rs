//! Out-of-band SIGINT teardown.
//!
//! The main loop handles ctrl-c in-band (raw mode delivers it as a
//! keystroke), but an external interrupt signal must still restore the
//! terminal even while the loop is blocked in a read. The pre-raw termios
//! is saved once; the handler restores it and exits with the
//! operator-interrupt status.

use std::io;
use std::sync::OnceLock;

static SAVED_TERMIOS: OnceLock<libc::termios> = OnceLock::new();

/// Saves the current termios and installs the SIGINT handler.
///
/// Call before raw mode is acquired so the saved state is the cooked one.
pub fn install() -> io::Result<()> {
	// SAFETY: termios is plain data; tcgetattr fully initializes it on
	// success.
	let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
	if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut termios) } != 0 {
		return Err(io::Error::last_os_error());
	}
	let _ = SAVED_TERMIOS.set(termios);

	let handler = restore_and_exit as extern "C" fn(libc::c_int);
	// SAFETY: the handler only calls async-signal-safe functions
	// (tcsetattr, _exit) and reads a write-once cell.
	let previous = unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };
	if previous == libc::SIG_ERR {
		return Err(io::Error::last_os_error());
	}
	Ok(())
}

extern "C" fn restore_and_exit(_sig: libc::c_int) {
	if let Some(termios) = SAVED_TERMIOS.get() {
		// SAFETY: tcsetattr is async-signal-safe.
		unsafe {
			libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, termios);
		}
	}
	// Operator-initiated interrupt exits cleanly.
	// SAFETY: _exit is async-signal-safe.
	unsafe { libc::_exit(0) }
}
