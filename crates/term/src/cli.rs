use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "twistkey")]
#[command(about = "Configurable keyboard teleoperation")]
#[command(version)]
pub struct Cli {
	/// Initial linear speed scale
	#[arg(long, default_value_t = 0.5)]
	pub speed: f64,

	/// Initial angular speed scale
	#[arg(long, default_value_t = 1.0)]
	pub turn: f64,

	/// Upper limit for the linear speed scale
	#[arg(long, default_value_t = 1000.0)]
	pub speed_limit: f64,

	/// Upper limit for the angular speed scale
	#[arg(long, default_value_t = 1000.0)]
	pub turn_limit: f64,

	/// Seconds to wait for a keystroke before sending a stop
	#[arg(long, default_value_t = 0.5)]
	pub key_timeout: f64,

	/// Path to the bindings configuration
	#[arg(long, default_value = "config/bindings.yaml")]
	pub config: PathBuf,

	/// Unix socket to publish NDJSON messages to (default: stdout)
	#[arg(long)]
	pub socket: Option<PathBuf>,
}
