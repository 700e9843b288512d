//! Terminal frontend: reads raw keystrokes and drives the binding engine.

mod cli;
mod help;
#[cfg(unix)]
mod signal;
mod terminal;
mod transport;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use twistkey_core::{SpeedState, Step, Teleop, config};

use crate::cli::Cli;
use crate::transport::NdjsonTransport;

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();

	let sink: Box<dyn Write> = match &cli.socket {
		#[cfg(unix)]
		Some(path) => Box::new(
			std::os::unix::net::UnixStream::connect(path)
				.with_context(|| format!("connecting to {}", path.display()))?,
		),
		#[cfg(not(unix))]
		Some(_) => anyhow::bail!("--socket is only supported on unix"),
		None => Box::new(io::stdout()),
	};
	let mut transport = NdjsonTransport::new(sink);

	// Configuration problems are the only fatal path before the loop;
	// report and exit nonzero.
	let registry = config::load(&cli.config, &mut transport)
		.with_context(|| format!("loading bindings from {}", cli.config.display()))?;

	let speed = SpeedState::new(cli.speed, cli.turn, cli.speed_limit, cli.turn_limit);
	let mut teleop = Teleop::new(registry, speed, transport)?;

	print!("{}", help::render(teleop.registry()));
	io::stdout().flush()?;

	// Restore the terminal even if an external SIGINT lands while the
	// loop is blocked in a read; the in-band ctrl-c path and the drop
	// guard cover the other exits.
	#[cfg(unix)]
	signal::install().context("installing SIGINT handler")?;

	let timeout = Duration::from_secs_f64(cli.key_timeout);
	let _guard = terminal::RawModeGuard::acquire().context("entering raw mode")?;

	loop {
		let Some(key) = terminal::read_key(timeout).context("reading keystroke")? else {
			continue;
		};

		match teleop.handle_key(key)? {
			Step::Continue => {}
			Step::SpeedChanged { speed, turn } => {
				// Raw mode: no output post-processing, so CRLF by hand.
				print!("Speed set to: {speed}, Turn set to: {turn}\r\n");
				io::stdout().flush()?;
			}
			Step::Quit => break,
		}
	}

	Ok(())
}
