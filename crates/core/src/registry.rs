//! The binding registry: key → action lookup across four namespaces.
//!
//! Built once by the configuration loader and read-only afterwards. The
//! four namespaces (motion, holonomic, speed, custom) are stored
//! independently; a key may legally appear in more than one, and the
//! dispatch loop resolves the collision by precedence, not the registry.
//! Maps preserve registration order, which only help rendering cares
//! about.

use indexmap::IndexMap;

use crate::action::{HolonomicAction, MoveAction, SpeedAction};
use crate::frame::MotionVector;
use crate::speed::SpeedFactors;
use crate::transport::{ChannelHandle, Payload};

/// A loaded custom binding: a channel handle paired with the literal
/// payload it publishes on every trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomBinding {
	/// Human-readable description from the configuration.
	pub description: String,
	/// Topic the channel was advertised under.
	pub topic: String,
	/// Handle acquired from the transport at load time.
	pub handle: ChannelHandle,
	/// Literal payload published on each trigger.
	pub payload: Payload,
}

/// Key → action bindings, one map per namespace.
///
/// Keys bound to `NoMovement` appear in the action maps (for help
/// rendering) but not in the vector maps, so at dispatch time they fall
/// through to the stop rule.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	move_actions: IndexMap<char, MoveAction>,
	move_vectors: IndexMap<char, MotionVector>,
	holonomic_actions: IndexMap<char, HolonomicAction>,
	holonomic_vectors: IndexMap<char, MotionVector>,
	speed_actions: IndexMap<char, SpeedAction>,
	custom: IndexMap<char, CustomBinding>,
}

impl Registry {
	/// Registers a standard move binding. Last write wins on a duplicate
	/// key.
	pub(crate) fn bind_move(&mut self, key: char, action: MoveAction) {
		self.move_actions.insert(key, action);
		if let Some(vector) = action.vector() {
			self.move_vectors.insert(key, vector);
		} else {
			self.move_vectors.shift_remove(&key);
		}
	}

	/// Registers a holonomic move binding.
	pub(crate) fn bind_holonomic(&mut self, key: char, action: HolonomicAction) {
		self.holonomic_actions.insert(key, action);
		if let Some(vector) = action.vector() {
			self.holonomic_vectors.insert(key, vector);
		} else {
			self.holonomic_vectors.shift_remove(&key);
		}
	}

	/// Registers a speed-scaling binding.
	pub(crate) fn bind_speed(&mut self, key: char, action: SpeedAction) {
		self.speed_actions.insert(key, action);
	}

	/// Registers a custom binding.
	pub(crate) fn bind_custom(&mut self, key: char, binding: CustomBinding) {
		self.custom.insert(key, binding);
	}

	/// Motion vector for a key in the standard move namespace.
	pub fn move_vector(&self, key: char) -> Option<MotionVector> {
		self.move_vectors.get(&key).copied()
	}

	/// Motion vector for a key in the holonomic namespace.
	pub fn holonomic_vector(&self, key: char) -> Option<MotionVector> {
		self.holonomic_vectors.get(&key).copied()
	}

	/// Speed factors for a key in the speed namespace.
	pub fn speed_factors(&self, key: char) -> Option<SpeedFactors> {
		self.speed_actions.get(&key).map(|a| a.factors())
	}

	/// Custom binding for a key.
	pub fn custom(&self, key: char) -> Option<&CustomBinding> {
		self.custom.get(&key)
	}

	/// Key bound to a standard move action, for help rendering.
	pub fn move_key(&self, action: MoveAction) -> Option<char> {
		self.move_actions
			.iter()
			.find(|(_, a)| **a == action)
			.map(|(k, _)| *k)
	}

	/// Key bound to a holonomic action, for help rendering.
	pub fn holonomic_key(&self, action: HolonomicAction) -> Option<char> {
		self.holonomic_actions
			.iter()
			.find(|(_, a)| **a == action)
			.map(|(k, _)| *k)
	}

	/// Speed bindings in registration order.
	pub fn speed_bindings(&self) -> impl Iterator<Item = (char, SpeedAction)> + '_ {
		self.speed_actions.iter().map(|(k, a)| (*k, *a))
	}

	/// Custom bindings in registration order.
	pub fn custom_bindings(&self) -> impl Iterator<Item = (char, &CustomBinding)> {
		self.custom.iter().map(|(k, b)| (*k, b))
	}
}
