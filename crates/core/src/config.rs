//! Configuration loading: YAML bindings document → [`Registry`].
//!
//! The document has four top-level sections. `move_bindings`,
//! `holonomic_move_bindings` and `speed_bindings` map an action name to a
//! key string; `custom_bindings` maps a binding name to a full entry. Per
//! the permissive "extra knowledge" policy, unknown action names in the
//! first three sections are skipped silently; an unknown custom payload
//! type is reported and that single binding is skipped. Only structural
//! problems (unparseable YAML, missing or mismatched custom fields, empty
//! keys) abort loading.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, error};

use crate::action::{HolonomicAction, MoveAction, SpeedAction};
use crate::error::{ConfigError, Result};
use crate::registry::{CustomBinding, Registry};
use crate::transport::{Payload, PayloadKind, Transport};

/// The raw bindings document as deserialized from YAML.
#[derive(Debug, Deserialize)]
struct BindingsDoc {
	#[serde(default)]
	move_bindings: IndexMap<String, String>,
	#[serde(default)]
	holonomic_move_bindings: IndexMap<String, String>,
	#[serde(default)]
	speed_bindings: IndexMap<String, String>,
	#[serde(default)]
	custom_bindings: IndexMap<String, CustomEntry>,
}

/// One entry of the `custom_bindings` section. All fields but `data` are
/// required; a missing required field is a fatal deserialization error.
#[derive(Debug, Deserialize)]
struct CustomEntry {
	description: String,
	key: String,
	topic: String,
	topic_type: String,
	#[serde(default)]
	data: Option<serde_yaml::Value>,
}

/// Loads the bindings document at `path` into a [`Registry`], acquiring
/// one outbound channel per valid custom binding.
pub fn load<T: Transport>(path: &Path, transport: &mut T) -> Result<Registry> {
	let text = fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	load_str(&text, transport)
}

/// Loads a bindings document from a string. See [`load`].
pub fn load_str<T: Transport>(doc: &str, transport: &mut T) -> Result<Registry> {
	let doc: BindingsDoc = serde_yaml::from_str(doc)?;
	let mut registry = Registry::default();

	for (action, key) in &doc.move_bindings {
		let key = single_key("move_bindings", action, key)?;
		match action.parse::<MoveAction>() {
			Ok(parsed) => registry.bind_move(key, parsed),
			Err(_) => debug!(action = action.as_str(), "skipping unknown move action"),
		}
	}

	for (action, key) in &doc.holonomic_move_bindings {
		let key = single_key("holonomic_move_bindings", action, key)?;
		match action.parse::<HolonomicAction>() {
			Ok(parsed) => registry.bind_holonomic(key, parsed),
			Err(_) => debug!(action = action.as_str(), "skipping unknown holonomic action"),
		}
	}

	for (action, key) in &doc.speed_bindings {
		let key = single_key("speed_bindings", action, key)?;
		match action.parse::<SpeedAction>() {
			Ok(parsed) => registry.bind_speed(key, parsed),
			Err(_) => debug!(action = action.as_str(), "skipping unknown speed action"),
		}
	}

	for (name, entry) in &doc.custom_bindings {
		let key = single_key("custom_bindings", name, &entry.key)?;
		let Some(kind) = PayloadKind::from_topic_type(&entry.topic_type) else {
			error!(
				binding = name.as_str(),
				topic_type = entry.topic_type.as_str(),
				"unknown payload type for custom binding, skipping"
			);
			continue;
		};
		let payload = literal_payload(name, kind, entry.data.as_ref())?;
		let handle = transport.advertise(&entry.topic, kind)?;
		registry.bind_custom(
			key,
			CustomBinding {
				description: entry.description.clone(),
				topic: entry.topic.clone(),
				handle,
				payload,
			},
		);
	}

	Ok(registry)
}

/// First character of a key string. Extra characters are ignored; an
/// empty string is a fatal error.
fn single_key(section: &'static str, action: &str, key: &str) -> Result<char> {
	key.chars().next().ok_or_else(|| ConfigError::EmptyKey {
		section,
		action: action.to_string(),
	})
}

/// Converts a custom entry's `data` literal into the payload it declares.
fn literal_payload(
	binding: &str,
	kind: PayloadKind,
	data: Option<&serde_yaml::Value>,
) -> Result<Payload> {
	if kind == PayloadKind::Empty {
		return Ok(Payload::Empty);
	}

	let value = data.ok_or_else(|| ConfigError::MissingData {
		binding: binding.to_string(),
		kind,
	})?;
	let mismatch = || ConfigError::DataMismatch {
		binding: binding.to_string(),
		kind,
	};

	match kind {
		PayloadKind::Bool => value.as_bool().map(Payload::Bool).ok_or_else(mismatch),
		PayloadKind::String => value
			.as_str()
			.map(|s| Payload::String(s.to_string()))
			.ok_or_else(mismatch),
		PayloadKind::Int32 => value
			.as_i64()
			.and_then(|i| i32::try_from(i).ok())
			.map(Payload::Int32)
			.ok_or_else(mismatch),
		PayloadKind::Float32 => value
			.as_f64()
			.map(|f| Payload::Float32(f as f32))
			.ok_or_else(mismatch),
		PayloadKind::Empty | PayloadKind::Twist => unreachable!("filtered above"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::{ChannelHandle, TransportError};

	/// Records advertises and publishes without any real middleware.
	#[derive(Default)]
	struct RecordingTransport {
		channels: Vec<(String, PayloadKind)>,
	}

	impl Transport for RecordingTransport {
		fn advertise(
			&mut self,
			topic: &str,
			kind: PayloadKind,
		) -> std::result::Result<ChannelHandle, TransportError> {
			self.channels.push((topic.to_string(), kind));
			Ok(ChannelHandle::from_index(self.channels.len() - 1))
		}

		fn publish(
			&mut self,
			_handle: ChannelHandle,
			_payload: &Payload,
		) -> std::result::Result<(), TransportError> {
			Ok(())
		}
	}

	#[test]
	fn unknown_action_names_are_skipped_silently() {
		let doc = r#"
move_bindings:
  forward: "i"
  moonwalk: "m"
speed_bindings:
  increase_max_speed_by_10: "q"
  overdrive: "v"
"#;
		let mut transport = RecordingTransport::default();
		let registry = load_str(doc, &mut transport).unwrap();

		assert!(registry.move_vector('i').is_some());
		assert!(registry.move_vector('m').is_none());
		assert!(registry.speed_factors('q').is_some());
		assert!(registry.speed_factors('v').is_none());
	}

	#[test]
	fn multi_character_key_uses_first_char() {
		let doc = r#"
move_bindings:
  forward: "iii"
"#;
		let mut transport = RecordingTransport::default();
		let registry = load_str(doc, &mut transport).unwrap();
		assert!(registry.move_vector('i').is_some());
	}

	#[test]
	fn empty_key_is_fatal() {
		let doc = r#"
move_bindings:
  forward: ""
"#;
		let mut transport = RecordingTransport::default();
		let err = load_str(doc, &mut transport).unwrap_err();
		assert!(matches!(err, ConfigError::EmptyKey { section: "move_bindings", .. }));
	}

	#[test]
	fn unknown_payload_type_skips_only_that_binding() {
		let doc = r#"
custom_bindings:
  weird:
    description: "weird"
    key: "v"
    topic: "weird"
    topic_type: "std_msgs/ColorRGBA"
    data: 1
  estop:
    description: "Emergency stop"
    key: "p"
    topic: "estop"
    topic_type: "std_msgs/Bool"
    data: true
"#;
		let mut transport = RecordingTransport::default();
		let registry = load_str(doc, &mut transport).unwrap();

		assert!(registry.custom('v').is_none());
		let estop = registry.custom('p').unwrap();
		assert_eq!(estop.payload, Payload::Bool(true));
		assert_eq!(transport.channels, vec![("estop".to_string(), PayloadKind::Bool)]);
	}

	#[test]
	fn missing_custom_field_is_fatal() {
		let doc = r#"
custom_bindings:
  estop:
    description: "Emergency stop"
    key: "p"
    topic_type: "std_msgs/Bool"
    data: true
"#;
		let mut transport = RecordingTransport::default();
		assert!(matches!(
			load_str(doc, &mut transport),
			Err(ConfigError::Yaml(_))
		));
	}

	#[test]
	fn missing_data_is_fatal_unless_empty() {
		let doc = r#"
custom_bindings:
  estop:
    description: "Emergency stop"
    key: "p"
    topic: "estop"
    topic_type: "std_msgs/Bool"
"#;
		let mut transport = RecordingTransport::default();
		assert!(matches!(
			load_str(doc, &mut transport),
			Err(ConfigError::MissingData { .. })
		));

		let doc = r#"
custom_bindings:
  beep:
    description: "Trigger beep"
    key: "n"
    topic: "beep"
    topic_type: "std_msgs/Empty"
"#;
		let mut transport = RecordingTransport::default();
		let registry = load_str(doc, &mut transport).unwrap();
		assert_eq!(registry.custom('n').unwrap().payload, Payload::Empty);
	}

	#[test]
	fn data_type_mismatch_is_fatal() {
		let doc = r#"
custom_bindings:
  counter:
    description: "Counter"
    key: "1"
    topic: "count"
    topic_type: "std_msgs/Int32"
    data: "not a number"
"#;
		let mut transport = RecordingTransport::default();
		assert!(matches!(
			load_str(doc, &mut transport),
			Err(ConfigError::DataMismatch { .. })
		));
	}

	#[test]
	fn int32_range_is_enforced() {
		let doc = r#"
custom_bindings:
  counter:
    description: "Counter"
    key: "1"
    topic: "count"
    topic_type: "Int32"
    data: 4294967296
"#;
		let mut transport = RecordingTransport::default();
		assert!(matches!(
			load_str(doc, &mut transport),
			Err(ConfigError::DataMismatch { .. })
		));
	}

	#[test]
	fn missing_sections_load_as_empty() {
		let mut transport = RecordingTransport::default();
		let registry = load_str("move_bindings:\n  forward: \"i\"\n", &mut transport).unwrap();
		assert_eq!(registry.speed_bindings().count(), 0);
		assert_eq!(registry.custom_bindings().count(), 0);
	}
}
