//! Per-keystroke dispatch with fixed namespace precedence.

use crate::frame::CommandFrame;
use crate::registry::Registry;
use crate::speed::SpeedState;
use crate::transport::{ChannelHandle, Payload, PayloadKind, Transport, TransportError};

/// Character synthesized by the caller when the keystroke read times out.
/// Flows through the stop rule like any other unrecognized key.
pub const KEY_TIMEOUT_SENTINEL: char = '\0';

/// The in-band interrupt character (ctrl-c). Terminates the loop when no
/// binding claims it.
pub const INTERRUPT_CHAR: char = '\x03';

/// Topic the motion channel is advertised under.
pub const MOTION_TOPIC: &str = "cmd_vel";

/// Outcome of dispatching one keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
	/// Keep reading keystrokes.
	Continue,
	/// A speed binding fired; report the new scales to the operator.
	SpeedChanged {
		/// New linear speed scale.
		speed: f64,
		/// New angular speed scale.
		turn: f64,
	},
	/// The interrupt character arrived unbound; leave the loop.
	Quit,
}

/// The dispatch engine: owns the registry, the speed state, the last
/// emitted frame, and the transport.
///
/// One keystroke in, at most one publish out. Precedence across the
/// namespaces is fixed: motion, then holonomic, then speed, then custom,
/// then the stop rule. A key bound in several namespaces always resolves
/// to the earliest one.
pub struct Teleop<T: Transport> {
	registry: Registry,
	speed: SpeedState,
	last_frame: CommandFrame,
	motion_channel: ChannelHandle,
	transport: T,
}

impl<T: Transport> Teleop<T> {
	/// Builds the engine, advertising the motion channel on `transport`.
	///
	/// Custom binding channels were already advertised by the
	/// configuration loader on the same transport.
	pub fn new(
		registry: Registry,
		speed: SpeedState,
		mut transport: T,
	) -> Result<Self, TransportError> {
		let motion_channel = transport.advertise(MOTION_TOPIC, PayloadKind::Twist)?;
		Ok(Self {
			registry,
			speed,
			last_frame: CommandFrame::default(),
			motion_channel,
			transport,
		})
	}

	/// The active binding registry.
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// The current speed state.
	pub fn speed(&self) -> &SpeedState {
		&self.speed
	}

	/// The last frame published on the motion channel.
	pub fn last_frame(&self) -> &CommandFrame {
		&self.last_frame
	}

	/// Consumes the engine, returning the transport.
	pub fn into_transport(self) -> T {
		self.transport
	}

	/// Routes one keystroke through the precedence chain.
	pub fn handle_key(&mut self, key: char) -> Result<Step, TransportError> {
		if let Some(vector) = self.registry.move_vector(key) {
			let frame = CommandFrame::from_vector(vector, &self.speed);
			self.publish_frame(frame)?;
			return Ok(Step::Continue);
		}

		if let Some(vector) = self.registry.holonomic_vector(key) {
			let frame = CommandFrame::from_vector(vector, &self.speed);
			self.publish_frame(frame)?;
			return Ok(Step::Continue);
		}

		if let Some(factors) = self.registry.speed_factors(key) {
			self.speed.apply(factors);
			return Ok(Step::SpeedChanged {
				speed: self.speed.speed(),
				turn: self.speed.turn(),
			});
		}

		if let Some(binding) = self.registry.custom(key) {
			self.transport.publish(binding.handle, &binding.payload)?;
			return Ok(Step::Continue);
		}

		if key == INTERRUPT_CHAR {
			return Ok(Step::Quit);
		}

		// Stop rule: suppress the redundant all-zero frame while already
		// stopped, so repeated timeouts publish nothing.
		if !self.last_frame.is_zero() {
			self.publish_frame(CommandFrame::default())?;
		}
		Ok(Step::Continue)
	}

	fn publish_frame(&mut self, frame: CommandFrame) -> Result<(), TransportError> {
		self.transport
			.publish(self.motion_channel, &Payload::Twist(frame))?;
		self.last_frame = frame;
		Ok(())
	}
}
