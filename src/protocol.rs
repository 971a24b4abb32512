//! Controller protocol wire shapes.
//!
//! These are the request/response types handed to the external transport.
//! They mirror the CSI controller publish/unpublish/validate calls and are
//! all [`Default`]-constructible: the empty protocol request is the explicit
//! translation of an absent orchestrator request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::capability::VolumeCapability;
use crate::types::VolumeId;

/// Attach a volume to a node at the cluster-control level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerPublishVolumeRequest {
    /// Volume to publish.
    pub volume_id: VolumeId,
    /// Node ID in the plugin's namespace.
    pub node_id: String,
    /// Publish the volume read-only.
    #[serde(default)]
    pub read_only: bool,
    /// Capability negotiated from the orchestrator's mode pair.
    #[serde(default)]
    pub volume_capability: Option<VolumeCapability>,
}

/// Plugin response to a publish call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerPublishVolumeResponse {
    /// Opaque publish properties; passed through to the caller unchanged.
    #[serde(default)]
    pub publish_context: HashMap<String, String>,
}

/// Detach a volume from a node at the cluster-control level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerUnpublishVolumeRequest {
    /// Volume to unpublish.
    pub volume_id: VolumeId,
    /// Node ID in the plugin's namespace.
    pub node_id: String,
}

/// Plugin response to an unpublish call.  Carries nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerUnpublishVolumeResponse {}

/// Ask the plugin whether a volume supports a capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerValidateVolumeRequest {
    /// Volume to validate.
    pub volume_id: VolumeId,
    /// Capability to validate against.
    #[serde(default)]
    pub volume_capability: Option<VolumeCapability>,
}

/// Plugin response to a validate call.  Incompatibility is reported as an
/// error, not a payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControllerValidateVolumeResponse {}
