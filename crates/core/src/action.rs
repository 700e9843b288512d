//! Binding actions, parsed once from configuration action names.
//!
//! Action names are matched against closed sets at load time and carried as
//! enum tags thereafter; dispatch never compares strings.

use std::str::FromStr;

use thiserror::Error;

use crate::frame::MotionVector;
use crate::speed::SpeedFactors;

/// An action name outside the closed set of its section.
///
/// The loader treats this as "extra knowledge" in the configuration and
/// skips the entry without error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action name: {0}")]
pub struct UnknownAction(pub String);

/// Standard (differential-drive) movement actions, plus vertical motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
	ForwardLeft,
	Forward,
	ForwardRight,
	Left,
	/// Bound key renders in help but installs no motion vector.
	NoMovement,
	Right,
	BackwardLeft,
	Backward,
	BackwardRight,
	Up,
	Down,
}

impl MoveAction {
	/// The full-scale motion vector for this action, or `None` for
	/// [`MoveAction::NoMovement`].
	pub const fn vector(self) -> Option<MotionVector> {
		let v = match self {
			Self::ForwardLeft => MotionVector::new(1.0, 0.0, 0.0, 1.0),
			Self::Forward => MotionVector::new(1.0, 0.0, 0.0, 0.0),
			Self::ForwardRight => MotionVector::new(1.0, 0.0, 0.0, -1.0),
			Self::Left => MotionVector::new(0.0, 0.0, 0.0, 1.0),
			Self::NoMovement => return None,
			Self::Right => MotionVector::new(0.0, 0.0, 0.0, -1.0),
			Self::BackwardLeft => MotionVector::new(-1.0, 0.0, 0.0, 1.0),
			Self::Backward => MotionVector::new(-1.0, 0.0, 0.0, 0.0),
			Self::BackwardRight => MotionVector::new(-1.0, 0.0, 0.0, -1.0),
			Self::Up => MotionVector::new(0.0, 0.0, 1.0, 0.0),
			Self::Down => MotionVector::new(0.0, 0.0, -1.0, 0.0),
		};
		Some(v)
	}
}

impl FromStr for MoveAction {
	type Err = UnknownAction;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"forward_left" => Ok(Self::ForwardLeft),
			"forward" => Ok(Self::Forward),
			"forward_right" => Ok(Self::ForwardRight),
			"left" => Ok(Self::Left),
			"no_movement" => Ok(Self::NoMovement),
			"right" => Ok(Self::Right),
			"backward_left" => Ok(Self::BackwardLeft),
			"backward" => Ok(Self::Backward),
			"backward_right" => Ok(Self::BackwardRight),
			"up" => Ok(Self::Up),
			"down" => Ok(Self::Down),
			_ => Err(UnknownAction(s.to_string())),
		}
	}
}

/// Holonomic (strafing) movement actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolonomicAction {
	ForwardLeft,
	Forward,
	ForwardRight,
	Left,
	/// Bound key renders in help but installs no motion vector.
	NoMovement,
	Right,
	BackwardLeft,
	Backward,
	BackwardRight,
}

impl HolonomicAction {
	/// The full-scale strafing vector for this action, or `None` for
	/// [`HolonomicAction::NoMovement`].
	pub const fn vector(self) -> Option<MotionVector> {
		let v = match self {
			Self::ForwardLeft => MotionVector::new(1.0, 1.0, 0.0, 0.0),
			Self::Forward => MotionVector::new(1.0, 0.0, 0.0, 0.0),
			Self::ForwardRight => MotionVector::new(1.0, -1.0, 0.0, 0.0),
			Self::Left => MotionVector::new(0.0, 1.0, 0.0, 0.0),
			Self::NoMovement => return None,
			Self::Right => MotionVector::new(0.0, -1.0, 0.0, 0.0),
			Self::BackwardLeft => MotionVector::new(-1.0, 1.0, 0.0, 0.0),
			Self::Backward => MotionVector::new(-1.0, 0.0, 0.0, 0.0),
			Self::BackwardRight => MotionVector::new(-1.0, -1.0, 0.0, 0.0),
		};
		Some(v)
	}
}

impl FromStr for HolonomicAction {
	type Err = UnknownAction;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"holonomic_forward_left" => Ok(Self::ForwardLeft),
			"holonomic_forward" => Ok(Self::Forward),
			"holonomic_forward_right" => Ok(Self::ForwardRight),
			"holonomic_left" => Ok(Self::Left),
			"holonomic_no_movement" => Ok(Self::NoMovement),
			"holonomic_right" => Ok(Self::Right),
			"holonomic_backward_left" => Ok(Self::BackwardLeft),
			"holonomic_backward" => Ok(Self::Backward),
			"holonomic_backward_right" => Ok(Self::BackwardRight),
			_ => Err(UnknownAction(s.to_string())),
		}
	}
}

/// Speed-scaling actions: ±10% on both scales, linear only, or angular only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedAction {
	IncreaseMax,
	DecreaseMax,
	IncreaseLinear,
	DecreaseLinear,
	IncreaseAngular,
	DecreaseAngular,
}

impl SpeedAction {
	/// The factor pair this action applies.
	pub const fn factors(self) -> SpeedFactors {
		match self {
			Self::IncreaseMax => SpeedFactors::new(1.1, 1.1),
			Self::DecreaseMax => SpeedFactors::new(0.9, 0.9),
			Self::IncreaseLinear => SpeedFactors::new(1.1, 1.0),
			Self::DecreaseLinear => SpeedFactors::new(0.9, 1.0),
			Self::IncreaseAngular => SpeedFactors::new(1.0, 1.1),
			Self::DecreaseAngular => SpeedFactors::new(1.0, 0.9),
		}
	}

	/// Human-readable description used by help rendering.
	pub const fn describe(self) -> &'static str {
		match self {
			Self::IncreaseMax => "increase max speeds by 10%",
			Self::DecreaseMax => "decrease max speeds by 10%",
			Self::IncreaseLinear => "increase linear speed by 10%",
			Self::DecreaseLinear => "decrease linear speed by 10%",
			Self::IncreaseAngular => "increase angular speed by 10%",
			Self::DecreaseAngular => "decrease angular speed by 10%",
		}
	}
}

impl FromStr for SpeedAction {
	type Err = UnknownAction;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"increase_max_speed_by_10" => Ok(Self::IncreaseMax),
			"decrease_max_speed_by_10" => Ok(Self::DecreaseMax),
			"increase_linear_speed_by_10" => Ok(Self::IncreaseLinear),
			"decrease_linear_speed_by_10" => Ok(Self::DecreaseLinear),
			"increase_angular_speed_by_10" => Ok(Self::IncreaseAngular),
			"decrease_angular_speed_by_10" => Ok(Self::DecreaseAngular),
			_ => Err(UnknownAction(s.to_string())),
		}
	}
}
