//! Startup help rendering of the active bindings.

use std::fmt::Write;

use twistkey_core::{HolonomicAction, MoveAction, Registry};

/// Renders the help text: movement grids, vertical keys, speed lines,
/// and custom binding descriptions, all from the loaded registry.
pub fn render(registry: &Registry) -> String {
	let mut out = String::new();

	out.push_str("Reading from the keyboard and publishing to Twist!\n");
	out.push_str("---------------------------\n");
	out.push_str("Moving around:\n");
	grid_row(&mut out, [
		registry.move_key(MoveAction::ForwardLeft),
		registry.move_key(MoveAction::Forward),
		registry.move_key(MoveAction::ForwardRight),
	]);
	grid_row(&mut out, [
		registry.move_key(MoveAction::Left),
		registry.move_key(MoveAction::NoMovement),
		registry.move_key(MoveAction::Right),
	]);
	grid_row(&mut out, [
		registry.move_key(MoveAction::BackwardLeft),
		registry.move_key(MoveAction::Backward),
		registry.move_key(MoveAction::BackwardRight),
	]);

	out.push_str("\nFor Holonomic mode (strafing), hold down the shift key:\n");
	out.push_str("---------------------------\n");
	grid_row(&mut out, [
		registry.holonomic_key(HolonomicAction::ForwardLeft),
		registry.holonomic_key(HolonomicAction::Forward),
		registry.holonomic_key(HolonomicAction::ForwardRight),
	]);
	grid_row(&mut out, [
		registry.holonomic_key(HolonomicAction::Left),
		registry.holonomic_key(HolonomicAction::NoMovement),
		registry.holonomic_key(HolonomicAction::Right),
	]);
	grid_row(&mut out, [
		registry.holonomic_key(HolonomicAction::BackwardLeft),
		registry.holonomic_key(HolonomicAction::Backward),
		registry.holonomic_key(HolonomicAction::BackwardRight),
	]);

	out.push('\n');
	if let Some(key) = registry.move_key(MoveAction::Up) {
		let _ = writeln!(out, "{key} : up (+z)");
	}
	if let Some(key) = registry.move_key(MoveAction::Down) {
		let _ = writeln!(out, "{key} : down (-z)");
	}

	out.push_str("\nanything else : stop\n");

	out.push_str("\nSpeed:\n");
	out.push_str("---------------------------\n");
	for (key, action) in registry.speed_bindings() {
		let _ = writeln!(out, "{key} : {}", action.describe());
	}

	out.push_str("\nCTRL-C to quit\n");

	let customs: Vec<_> = registry.custom_bindings().collect();
	if !customs.is_empty() {
		out.push_str("\nCustom bindings:\n");
		out.push_str("---------------------------\n");
		for (key, binding) in customs {
			let _ = writeln!(out, "{} : {key}", binding.description);
		}
	}

	out.push('\n');
	out
}

fn grid_row(out: &mut String, keys: [Option<char>; 3]) {
	for key in keys {
		match key {
			Some(key) => {
				out.push(key);
				out.push_str("    ");
			}
			None => out.push_str("     "),
		}
	}
	out.push('\n');
}
