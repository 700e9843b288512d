//! Narrow seam to the host publish/subscribe middleware.
//!
//! The engine never talks to a transport directly; it advertises channels
//! and publishes payloads through the [`Transport`] trait. Implementations
//! live with the frontend (or in tests).

use std::fmt;

use thiserror::Error;

use crate::frame::CommandFrame;

/// Opaque id for an advertised outbound channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelHandle(usize);

impl ChannelHandle {
	/// Creates a handle from a transport-assigned index.
	pub fn from_index(index: usize) -> Self {
		Self(index)
	}

	/// The transport-assigned index.
	pub fn index(self) -> usize {
		self.0
	}
}

/// The kind of payload a channel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
	Bool,
	String,
	Int32,
	Float32,
	Empty,
	/// The motion command channel. Not available to custom bindings.
	Twist,
}

impl PayloadKind {
	/// Parses a custom binding's `topic_type` field.
	///
	/// Accepts the bare kind name or the `std_msgs/`-prefixed spelling.
	/// Returns `None` for anything else, including `Twist` (custom
	/// bindings cannot claim the motion channel kind).
	pub fn from_topic_type(s: &str) -> Option<Self> {
		match s.strip_prefix("std_msgs/").unwrap_or(s) {
			"Bool" => Some(Self::Bool),
			"String" => Some(Self::String),
			"Int32" => Some(Self::Int32),
			"Float32" => Some(Self::Float32),
			"Empty" => Some(Self::Empty),
			_ => None,
		}
	}
}

impl fmt::Display for PayloadKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bool => "Bool",
			Self::String => "String",
			Self::Int32 => "Int32",
			Self::Float32 => "Float32",
			Self::Empty => "Empty",
			Self::Twist => "Twist",
		};
		f.write_str(name)
	}
}

/// A literal value published on a channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	Bool(bool),
	String(String),
	Int32(i32),
	Float32(f32),
	Empty,
	/// The six-scalar motion command.
	Twist(CommandFrame),
}

impl Payload {
	/// The kind tag of this payload.
	pub fn kind(&self) -> PayloadKind {
		match self {
			Self::Bool(_) => PayloadKind::Bool,
			Self::String(_) => PayloadKind::String,
			Self::Int32(_) => PayloadKind::Int32,
			Self::Float32(_) => PayloadKind::Float32,
			Self::Empty => PayloadKind::Empty,
			Self::Twist(_) => PayloadKind::Twist,
		}
	}
}

/// Errors surfaced by a transport implementation.
#[derive(Debug, Error)]
pub enum TransportError {
	/// The underlying sink failed.
	#[error("transport I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// A publish referenced a handle the transport never issued.
	#[error("unknown channel handle {0}")]
	UnknownChannel(usize),

	/// A payload's kind does not match the kind the channel was
	/// advertised with.
	#[error("channel '{topic}' carries {expected}, got {got}")]
	KindMismatch {
		/// Topic the channel was advertised under.
		topic: String,
		/// Kind declared at advertise time.
		expected: PayloadKind,
		/// Kind of the rejected payload.
		got: PayloadKind,
	},
}

/// Outbound half of the host middleware.
///
/// Channels are advertised once, at startup; dispatch then performs at
/// most one publish per keystroke. There is no retry policy here; a failed
/// publish propagates to the caller.
pub trait Transport {
	/// Acquires an outbound channel for `topic` carrying `kind` payloads.
	fn advertise(&mut self, topic: &str, kind: PayloadKind) -> Result<ChannelHandle, TransportError>;

	/// Publishes one payload on a previously advertised channel.
	fn publish(&mut self, handle: ChannelHandle, payload: &Payload) -> Result<(), TransportError>;
}
