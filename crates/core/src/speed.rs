//! Speed scaling state.

/// Multiplicative factors applied by one speed-scaling keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedFactors {
	/// Factor applied to the linear speed.
	pub linear: f64,
	/// Factor applied to the angular speed.
	pub angular: f64,
}

impl SpeedFactors {
	/// Creates a factor pair.
	pub const fn new(linear: f64, angular: f64) -> Self {
		Self { linear, angular }
	}
}

/// Current linear/angular speed scales and their upper limits.
///
/// Invariant: `speed <= speed_limit` and `turn <= turn_limit` after every
/// update. Values that would exceed a limit are clamped, never rejected.
/// There is no lower floor; repeated shrinking factors approach zero but
/// never reach or cross it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedState {
	speed: f64,
	turn: f64,
	speed_limit: f64,
	turn_limit: f64,
}

impl SpeedState {
	/// Creates the state from initial speeds and limits, clamping the
	/// initial values to the limits.
	pub fn new(speed: f64, turn: f64, speed_limit: f64, turn_limit: f64) -> Self {
		Self {
			speed: speed.min(speed_limit),
			turn: turn.min(turn_limit),
			speed_limit,
			turn_limit,
		}
	}

	/// Current linear speed scale.
	pub fn speed(&self) -> f64 {
		self.speed
	}

	/// Current angular speed scale.
	pub fn turn(&self) -> f64 {
		self.turn
	}

	/// Multiplies both scales by the given factors, clamped to the limits.
	pub fn apply(&mut self, factors: SpeedFactors) {
		self.speed = self.speed_limit.min(self.speed * factors.linear);
		self.turn = self.turn_limit.min(self.turn * factors.angular);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn apply_scales_and_clamps() {
		let mut state = SpeedState::new(0.5, 1.0, 0.6, 1.05);

		state.apply(SpeedFactors::new(1.1, 1.1));
		assert!((state.speed() - 0.55).abs() < 1e-12);
		assert_eq!(state.turn(), 1.05);

		state.apply(SpeedFactors::new(1.1, 1.1));
		assert_eq!(state.speed(), 0.6);
		assert_eq!(state.turn(), 1.05);
	}

	#[test]
	fn shrinking_never_goes_negative() {
		let mut state = SpeedState::new(0.5, 1.0, 1000.0, 1000.0);
		for _ in 0..200 {
			state.apply(SpeedFactors::new(0.9, 0.9));
		}
		assert!(state.speed() > 0.0);
		assert!(state.turn() > 0.0);
	}

	#[test]
	fn initial_values_clamped_to_limits() {
		let state = SpeedState::new(5.0, 3.0, 2.0, 1.0);
		assert_eq!(state.speed(), 2.0);
		assert_eq!(state.turn(), 1.0);
	}
}
