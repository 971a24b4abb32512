//! Filesystem mount configuration for attach requests.
//!
//! [`MountOptions`] carries the desired filesystem type and mount flags for
//! volumes attached with the filesystem attachment mode.  Mount flags may
//! contain *sensitive* data: they are wrapped in [`MountFlags`], whose
//! [`Debug`](fmt::Debug) output is redacted so the raw values cannot reach
//! logs, traces, or debug dumps through any generic formatting pathway.  The
//! raw flags are reachable only through [`MountFlags::as_slice`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BridgeError;

/// Exclusive upper bound on the total serialized size of the mount flags.
pub const MAX_MOUNT_FLAGS_BYTES: usize = 4096;

// ---------------------------------------------------------------------------
// Mount flags
// ---------------------------------------------------------------------------

/// Ordered sequence of mount flags, e.g. `"noatime"`.
///
/// Flags may contain sensitive data and must never be leaked to logs or
/// returned in debugging output; `Debug` prints a redaction marker and the
/// type deliberately does not implement `Display`.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MountFlags(Vec<String>);

impl MountFlags {
    /// Wrap a sequence of raw flags.
    pub fn new(flags: Vec<String>) -> Self {
        Self(flags)
    }

    /// The raw flags, for collaborators that genuinely need them (i.e. the
    /// protocol payload).  Callers take on the confidentiality contract.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Total size of the flags in bytes.
    pub fn byte_len(&self) -> usize {
        self.0.iter().map(String::len).sum()
    }

    /// `true` when no flags are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for MountFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MountFlags([REDACTED: {} flags])", self.0.len())
    }
}

impl From<Vec<String>> for MountFlags {
    fn from(flags: Vec<String>) -> Self {
        Self(flags)
    }
}

// ---------------------------------------------------------------------------
// Mount options
// ---------------------------------------------------------------------------

/// Mount configuration provided when attaching a volume with the filesystem
/// attachment mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MountOptions {
    /// Desired filesystem type (e.g. `ext4`, `xfs`).  Optional; the plugin
    /// picks its default when absent.
    #[serde(default)]
    pub fs_type: Option<String>,

    /// Mount flags for the volume.  Redacted from all diagnostic output.
    #[serde(default)]
    mount_flags: MountFlags,
}

impl MountOptions {
    /// Build validated mount options.
    ///
    /// Fails with [`BridgeError::MountOptionsTooLarge`] when the flags total
    /// [`MAX_MOUNT_FLAGS_BYTES`] bytes or more.
    pub fn new(fs_type: Option<String>, mount_flags: Vec<String>) -> Result<Self, BridgeError> {
        let opts = Self {
            fs_type,
            mount_flags: MountFlags::new(mount_flags),
        };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check the size bound.  Deserialized values bypass [`new`](Self::new),
    /// so coordinators validate again at the boundary before any outbound
    /// call.
    pub fn validate(&self) -> Result<(), BridgeError> {
        let size = self.mount_flags.byte_len();
        if size >= MAX_MOUNT_FLAGS_BYTES {
            return Err(BridgeError::MountOptionsTooLarge {
                size,
                limit: MAX_MOUNT_FLAGS_BYTES,
            });
        }
        Ok(())
    }

    /// The wrapped mount flags.
    pub fn mount_flags(&self) -> &MountFlags {
        &self.mount_flags
    }
}
