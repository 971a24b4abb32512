//! Bridge error types.
//!
//! All errors in the `libcsibridge` crate are represented by the
//! [`BridgeError`] enum, which derives [`thiserror::Error`] for ergonomic
//! error handling and also implements [`Serialize`]/[`Deserialize`] so errors
//! can travel back across the orchestrator's RPC layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccessMode, AttachmentMode};

/// Unified error type for bridge operations.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The attachment/access mode pair has no protocol representation.
    #[error("no volume capability for attachment mode {attachment_mode} with access mode {access_mode}")]
    CapabilityUnsupported {
        /// Requested attachment mode.
        attachment_mode: AttachmentMode,
        /// Requested access mode.
        access_mode: AccessMode,
    },

    /// The mount flags exceed the protocol size bound.
    #[error("mount flags total {size} bytes, must stay under {limit}")]
    MountOptionsTooLarge {
        /// Total serialized size of the flags, in bytes.
        size: usize,
        /// The exclusive upper bound.
        limit: usize,
    },

    /// A required request field was absent or empty.
    #[error("required field {0} is missing")]
    MissingRequiredField(String),

    /// The transport collaborator failed; surfaced unchanged, never retried.
    #[error("transport error: {0}")]
    Transport(String),
}

impl BridgeError {
    /// Create a [`BridgeError::MissingRequiredField`] for the named field.
    pub fn missing(field: &str) -> Self {
        Self::MissingRequiredField(field.to_owned())
    }

    /// Create a [`BridgeError::Transport`] from anything that implements
    /// [`std::fmt::Display`].
    pub fn transport<E: std::fmt::Display>(e: E) -> Self {
        Self::Transport(e.to_string())
    }
}
