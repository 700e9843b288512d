//! Binding engine for configurable keyboard teleoperation.
//!
//! Converts raw keyboard characters into robot motion commands and custom
//! control messages, driven by a declarative YAML binding configuration:
//! - [`config`]: loads and validates the configuration into a [`Registry`]
//! - [`registry`]: key → action lookup across four binding namespaces
//! - [`dispatch`]: the per-keystroke precedence and stop-timeout semantics
//! - [`transport`]: the narrow seam to the host publish/subscribe middleware
//!
//! The engine is transport- and terminal-agnostic; the caller owns the raw
//! input source and feeds one character per call into [`Teleop::handle_key`].

pub mod action;
pub mod config;
pub mod dispatch;
mod error;
pub mod frame;
pub mod registry;
pub mod speed;
pub mod transport;

pub use action::{HolonomicAction, MoveAction, SpeedAction, UnknownAction};
pub use dispatch::{INTERRUPT_CHAR, KEY_TIMEOUT_SENTINEL, MOTION_TOPIC, Step, Teleop};
pub use error::{ConfigError, Result};
pub use frame::{CommandFrame, MotionVector, Vec3};
pub use registry::{CustomBinding, Registry};
pub use speed::{SpeedFactors, SpeedState};
pub use transport::{ChannelHandle, Payload, PayloadKind, Transport, TransportError};
