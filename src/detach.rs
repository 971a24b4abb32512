//! Detach coordinator: orchestrator detach intent → controller unpublish.

use tracing::{debug, instrument};

use crate::error::BridgeError;
use crate::protocol::ControllerUnpublishVolumeRequest;
use crate::transport::ControllerTransport;
use crate::types::{DetachVolumeRequest, DetachVolumeResponse};

/// Build the protocol unpublish request for a detach intent.
///
/// Same `None` compatibility shim as [`publish_request`]: an absent request
/// maps to the default (empty) protocol request.  No capability negotiation
/// is needed for detach; only volume ID and node ID are carried.
///
/// [`publish_request`]: crate::attach::publish_request
pub fn unpublish_request(
    request: Option<&DetachVolumeRequest>,
) -> Result<ControllerUnpublishVolumeRequest, BridgeError> {
    let Some(req) = request else {
        return Ok(ControllerUnpublishVolumeRequest::default());
    };

    if req.volume_id.is_empty() {
        return Err(BridgeError::missing("volume_id"));
    }
    if req.csi_node_id.is_empty() {
        return Err(BridgeError::missing("csi_node_id"));
    }

    Ok(ControllerUnpublishVolumeRequest {
        volume_id: req.volume_id.clone(),
        node_id: req.csi_node_id.clone(),
    })
}

/// Coordinates controller unpublish calls.
pub struct DetachCoordinator<T> {
    transport: T,
}

impl<T: ControllerTransport> DetachCoordinator<T> {
    /// Wrap a transport collaborator.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Detach a volume from a node via the plugin controller.
    #[instrument(skip_all)]
    pub async fn detach(
        &self,
        request: Option<&DetachVolumeRequest>,
    ) -> Result<DetachVolumeResponse, BridgeError> {
        let protocol_req = unpublish_request(request)?;

        debug!(volume_id = %protocol_req.volume_id, "issuing controller unpublish");
        self.transport
            .controller_unpublish_volume(protocol_req)
            .await?;

        debug!("controller unpublish succeeded");
        Ok(DetachVolumeResponse {})
    }
}
