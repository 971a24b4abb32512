//! Transport seam to the storage-plugin controller.
//!
//! How protocol requests reach the plugin — connections, routing to the
//! controller node, retries, timeouts — is entirely the transport's concern.
//! This crate neither retries nor times out; a transport failure surfaces to
//! the coordinator's caller unchanged, and cancellation propagates by
//! dropping the in-flight future (the coordinators hold no resources that
//! need release).

use async_trait::async_trait;

use crate::error::BridgeError;
use crate::protocol::{
    ControllerPublishVolumeRequest, ControllerPublishVolumeResponse,
    ControllerUnpublishVolumeRequest, ControllerUnpublishVolumeResponse,
    ControllerValidateVolumeRequest, ControllerValidateVolumeResponse,
};

/// Outbound controller calls, one method per protocol operation.
#[async_trait]
pub trait ControllerTransport: Send + Sync {
    /// Deliver a publish request and return the plugin's response.
    async fn controller_publish_volume(
        &self,
        req: ControllerPublishVolumeRequest,
    ) -> Result<ControllerPublishVolumeResponse, BridgeError>;

    /// Deliver an unpublish request and return the plugin's response.
    async fn controller_unpublish_volume(
        &self,
        req: ControllerUnpublishVolumeRequest,
    ) -> Result<ControllerUnpublishVolumeResponse, BridgeError>;

    /// Deliver a capability-validation request and return the plugin's
    /// response.
    async fn controller_validate_volume(
        &self,
        req: ControllerValidateVolumeRequest,
    ) -> Result<ControllerValidateVolumeResponse, BridgeError>;
}
