//! Motion vectors and the outbound command frame.

use serde::Serialize;

use crate::speed::SpeedState;

/// Full-scale motion components along each axis, before speed scaling.
///
/// Each component is a signed unit scalar in {-1, 0, 1}: `x` forward, `y`
/// strafe, `z` vertical, `th` rotation about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVector {
	/// Forward component.
	pub x: f64,
	/// Strafe (lateral) component.
	pub y: f64,
	/// Vertical component.
	pub z: f64,
	/// Rotation component.
	pub th: f64,
}

impl MotionVector {
	/// Creates a vector from its four axis components.
	pub const fn new(x: f64, y: f64, z: f64, th: f64) -> Self {
		Self { x, y, z, th }
	}
}

/// A three-component vector half of a [`CommandFrame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

/// The six-scalar motion command published to the robot.
///
/// Recomputed in full on every dispatched motion keystroke; never
/// accumulated incrementally, so stale state cannot drift into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CommandFrame {
	/// Linear velocity components.
	pub linear: Vec3,
	/// Angular velocity components. Only `z` is ever nonzero here.
	pub angular: Vec3,
}

impl CommandFrame {
	/// Scales a motion vector by the current speed state: linear axes by
	/// `speed`, rotation by `turn`.
	pub fn from_vector(vector: MotionVector, speed: &SpeedState) -> Self {
		Self {
			linear: Vec3 {
				x: vector.x * speed.speed(),
				y: vector.y * speed.speed(),
				z: vector.z * speed.speed(),
			},
			angular: Vec3 {
				x: 0.0,
				y: 0.0,
				z: vector.th * speed.turn(),
			},
		}
	}

	/// Returns `true` if every component is zero (the robot is stopped).
	pub fn is_zero(&self) -> bool {
		*self == Self::default()
	}
}
