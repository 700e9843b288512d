//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::transport::{PayloadKind, TransportError};

/// Errors that abort configuration loading.
///
/// Every variant here is fatal to the caller; per-entry anomalies (unknown
/// action names, unknown payload types) are skipped during loading and never
/// surface as a [`ConfigError`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading the configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The document is not structurally valid YAML, or a required field on
	/// a custom binding is missing or has the wrong shape.
	#[error("malformed bindings document: {0}")]
	Yaml(#[from] serde_yaml::Error),

	/// A binding declares an empty key string.
	#[error("{section}: binding '{action}' has an empty key")]
	EmptyKey {
		/// Configuration section the binding appeared in.
		section: &'static str,
		/// Action or binding name with the empty key.
		action: String,
	},

	/// A custom binding omits its `data` literal although its payload
	/// type carries one.
	#[error("custom binding '{binding}': missing 'data' for payload type {kind}")]
	MissingData {
		/// Name of the custom binding.
		binding: String,
		/// Declared payload kind.
		kind: PayloadKind,
	},

	/// A custom binding's `data` literal does not match its declared
	/// payload type.
	#[error("custom binding '{binding}': data does not match payload type {kind}")]
	DataMismatch {
		/// Name of the custom binding.
		binding: String,
		/// Declared payload kind.
		kind: PayloadKind,
	},

	/// Acquiring an outbound channel for a custom binding failed.
	#[error("transport error: {0}")]
	Transport(#[from] TransportError),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
