//! NDJSON transport: one JSON object per published message.
//!
//! Each publish writes a single line `{"topic": …, "kind": …, "data": …}`
//! to the sink, which is stdout or a connected Unix stream socket.
//! Advertising only records the channel; nothing goes on the wire until a
//! keystroke publishes.

use std::io::Write;

use serde_json::{Value, json};
use twistkey_core::{ChannelHandle, Payload, PayloadKind, Transport, TransportError};

struct Channel {
	topic: String,
	kind: PayloadKind,
}

/// [`Transport`] implementation writing newline-delimited JSON.
pub struct NdjsonTransport<W: Write> {
	sink: W,
	channels: Vec<Channel>,
}

impl<W: Write> NdjsonTransport<W> {
	/// Wraps a sink.
	pub fn new(sink: W) -> Self {
		Self {
			sink,
			channels: Vec::new(),
		}
	}
}

impl<W: Write> Transport for NdjsonTransport<W> {
	fn advertise(
		&mut self,
		topic: &str,
		kind: PayloadKind,
	) -> Result<ChannelHandle, TransportError> {
		tracing::debug!(topic, %kind, "advertising channel");
		self.channels.push(Channel {
			topic: topic.to_string(),
			kind,
		});
		Ok(ChannelHandle::from_index(self.channels.len() - 1))
	}

	fn publish(&mut self, handle: ChannelHandle, payload: &Payload) -> Result<(), TransportError> {
		let channel = self
			.channels
			.get(handle.index())
			.ok_or(TransportError::UnknownChannel(handle.index()))?;
		if payload.kind() != channel.kind {
			return Err(TransportError::KindMismatch {
				topic: channel.topic.clone(),
				expected: channel.kind,
				got: payload.kind(),
			});
		}

		let message = json!({
			"topic": channel.topic,
			"kind": channel.kind.to_string(),
			"data": data_value(payload)?,
		});
		serde_json::to_writer(&mut self.sink, &message).map_err(std::io::Error::from)?;
		// Raw mode leaves output post-processing off; emit an explicit CRLF.
		self.sink.write_all(b"\r\n")?;
		self.sink.flush()?;
		Ok(())
	}
}

fn data_value(payload: &Payload) -> Result<Value, TransportError> {
	let value = match payload {
		Payload::Bool(b) => Value::Bool(*b),
		Payload::String(s) => Value::String(s.clone()),
		Payload::Int32(i) => json!(i),
		Payload::Float32(f) => json!(f),
		Payload::Empty => Value::Null,
		Payload::Twist(frame) => serde_json::to_value(frame).map_err(std::io::Error::from)?,
	};
	Ok(value)
}
