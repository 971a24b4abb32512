//! Validate coordinator: pre-scheduling capability check against a volume.

use tracing::{debug, instrument};

use crate::capability::volume_capability;
use crate::error::BridgeError;
use crate::protocol::ControllerValidateVolumeRequest;
use crate::transport::ControllerTransport;
use crate::types::{ValidateVolumeRequest, ValidateVolumeResponse};

/// Build the protocol validate request for a validation intent.
///
/// Same `None` compatibility shim as the attach and detach paths.
pub fn validate_request(
    request: Option<&ValidateVolumeRequest>,
) -> Result<ControllerValidateVolumeRequest, BridgeError> {
    let Some(req) = request else {
        return Ok(ControllerValidateVolumeRequest::default());
    };

    if req.volume_id.is_empty() {
        return Err(BridgeError::missing("volume_id"));
    }

    let capability = volume_capability(req.attachment_mode, req.access_mode, None)?;

    Ok(ControllerValidateVolumeRequest {
        volume_id: req.volume_id.clone(),
        volume_capability: Some(capability),
    })
}

/// Coordinates controller capability-validation calls.
pub struct ValidateCoordinator<T> {
    transport: T,
}

impl<T: ControllerTransport> ValidateCoordinator<T> {
    /// Wrap a transport collaborator.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Ask the plugin controller whether the volume supports the requested
    /// modes.  Incompatibility surfaces as a transport-reported error.
    #[instrument(skip_all)]
    pub async fn validate(
        &self,
        request: Option<&ValidateVolumeRequest>,
    ) -> Result<ValidateVolumeResponse, BridgeError> {
        let protocol_req = validate_request(request)?;

        debug!(volume_id = %protocol_req.volume_id, "issuing controller validate");
        self.transport
            .controller_validate_volume(protocol_req)
            .await?;

        Ok(ValidateVolumeResponse {})
    }
}
