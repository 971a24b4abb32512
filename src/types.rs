//! Orchestrator-level data model: attachment modes, access modes, and the
//! attach/detach/validate request and response shapes.
//!
//! These are the types the orchestrator constructs per RPC call.  They are
//! all [`Serialize`]/[`Deserialize`] so they can travel over the
//! orchestrator's own wire; each is consumed once by a coordinator and then
//! discarded — nothing in this crate retains a reference past translation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::mount::MountOptions;

// ---------------------------------------------------------------------------
// Volume identity
// ---------------------------------------------------------------------------

/// Opaque, unique identifier for a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VolumeId(pub String);

impl VolumeId {
    /// `true` when the identifier carries no value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VolumeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VolumeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Attachment & access modes
// ---------------------------------------------------------------------------

/// How a volume is exposed to a task: as a raw block device or as a mounted
/// filesystem.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttachmentMode {
    /// No mode requested.  Never translatable; present so an uninitialized
    /// request deserializes instead of failing.
    #[default]
    Unknown,
    /// Expose the volume as a raw block device.
    BlockDevice,
    /// Mount the volume with a filesystem.
    FileSystem,
}

impl fmt::Display for AttachmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::BlockDevice => "block-device",
            Self::FileSystem => "file-system",
        })
    }
}

/// The concurrency contract for how many nodes and writers may use the
/// volume simultaneously.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccessMode {
    /// No mode requested.  Never translatable.
    #[default]
    Unknown,
    /// One node may mount read-write.
    SingleNodeWriter,
    /// One node may mount read-only.
    SingleNodeReaderOnly,
    /// Many nodes may mount read-only.
    MultiNodeReaderOnly,
    /// Many nodes may mount, exactly one of them read-write.
    MultiNodeSingleWriter,
    /// Many nodes may mount read-write.
    MultiNodeMultiWriter,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::SingleNodeWriter => "single-node-writer",
            Self::SingleNodeReaderOnly => "single-node-reader-only",
            Self::MultiNodeReaderOnly => "multi-node-reader-only",
            Self::MultiNodeSingleWriter => "multi-node-single-writer",
            Self::MultiNodeMultiWriter => "multi-node-multi-writer",
        })
    }
}

// ---------------------------------------------------------------------------
// Query metadata
// ---------------------------------------------------------------------------

/// Query metadata carried on orchestrator requests.  Pass-through for the
/// RPC layer; this crate never interprets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryMeta {
    /// Target region for the request.
    #[serde(default)]
    pub region: String,
    /// Target namespace for the request.
    #[serde(default)]
    pub namespace: String,
    /// Secret authentication token, if the cluster requires one.
    #[serde(default)]
    pub auth_token: String,
}

// ---------------------------------------------------------------------------
// Attach
// ---------------------------------------------------------------------------

/// The orchestrator's intent to attach (controller-publish) a volume to a
/// node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachVolumeRequest {
    /// Name of the storage plugin that owns the volume.
    pub plugin_name: String,

    /// The volume to attach.  This field is REQUIRED.
    pub volume_id: VolumeId,

    /// The node ID in CSI terms.  This field is REQUIRED and must match the
    /// node ID the plugin fingerprinted for this plugin name.  Distinct from
    /// [`client_node_id`](Self::client_node_id) — the two namespaces must
    /// never be conflated.
    pub csi_node_id: String,

    /// How the volume should be attached and mounted into a task.
    #[serde(default)]
    pub attachment_mode: AttachmentMode,

    /// The desired concurrent access model for the volume.
    #[serde(default)]
    pub access_mode: AccessMode,

    /// Additional mount configuration, meaningful with
    /// [`AttachmentMode::FileSystem`].
    #[serde(default)]
    pub mount_options: Option<MountOptions>,

    /// Attach the volume in a read-only fashion.
    #[serde(default)]
    pub read_only: bool,

    /// The orchestrator node that should receive the RPC.  Routing only;
    /// never forwarded to the plugin.
    pub client_node_id: String,

    /// Query metadata forwarded with the RPC.
    #[serde(default)]
    pub query: QueryMeta,
}

/// Result of a successful attach.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachVolumeResponse {
    /// Opaque static publish properties of the volume, passed through from
    /// the plugin byte-for-byte.  Contents are immutable once produced, safe
    /// to cache, and must be handed unchanged to subsequent node staging and
    /// publishing calls.  The volume ID alone identifies the volume — this
    /// mapping must never be used as an identity key.
    #[serde(default)]
    pub publish_context: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Detach
// ---------------------------------------------------------------------------

/// The orchestrator's intent to detach (controller-unpublish) a volume from
/// a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetachVolumeRequest {
    /// Name of the storage plugin that owns the volume.
    pub plugin_name: String,

    /// The volume to unpublish.  This field is REQUIRED.
    pub volume_id: VolumeId,

    /// The node ID in CSI terms.  This field is REQUIRED and must match the
    /// node ID the plugin fingerprinted for this plugin name.
    pub csi_node_id: String,
}

/// Result of a successful detach.  Detach carries no payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetachVolumeResponse {}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

/// The orchestrator's request to check that a volume supports the given
/// attachment and access modes before scheduling against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateVolumeRequest {
    /// ID of the storage plugin that owns the volume.
    pub plugin_id: String,

    /// The volume to validate.  This field is REQUIRED.
    pub volume_id: VolumeId,

    /// Attachment mode to validate.
    #[serde(default)]
    pub attachment_mode: AttachmentMode,

    /// Access mode to validate.
    #[serde(default)]
    pub access_mode: AccessMode,

    /// Query metadata forwarded with the RPC.
    #[serde(default)]
    pub query: QueryMeta,
}

/// Result of a successful validation.  Carries no payload; failure is
/// reported through the error channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateVolumeResponse {}
