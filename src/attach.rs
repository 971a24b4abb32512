//! Attach coordinator: orchestrator attach intent → controller publish.

use tracing::{debug, instrument};

use crate::capability::volume_capability;
use crate::error::BridgeError;
use crate::protocol::ControllerPublishVolumeRequest;
use crate::transport::ControllerTransport;
use crate::types::{AttachVolumeRequest, AttachVolumeResponse};

/// Build the protocol publish request for an attach intent.
///
/// `None` is the compatibility shim for callers holding an uninitialized
/// request: it maps to the default (empty) protocol request, never to an
/// error.  For a present request, required fields are checked first, mount
/// options are re-validated, and capability translation failure propagates
/// as [`BridgeError::CapabilityUnsupported`].
pub fn publish_request(
    request: Option<&AttachVolumeRequest>,
) -> Result<ControllerPublishVolumeRequest, BridgeError> {
    let Some(req) = request else {
        return Ok(ControllerPublishVolumeRequest::default());
    };

    if req.volume_id.is_empty() {
        return Err(BridgeError::missing("volume_id"));
    }
    if req.csi_node_id.is_empty() {
        return Err(BridgeError::missing("csi_node_id"));
    }
    if let Some(opts) = &req.mount_options {
        opts.validate()?;
    }

    let capability =
        volume_capability(req.attachment_mode, req.access_mode, req.mount_options.as_ref())?;

    Ok(ControllerPublishVolumeRequest {
        volume_id: req.volume_id.clone(),
        node_id: req.csi_node_id.clone(),
        read_only: req.read_only,
        volume_capability: Some(capability),
    })
}

/// Coordinates controller publish calls: translates the orchestrator
/// request, delegates to the transport, and hands the plugin's publish
/// context back untouched.
pub struct AttachCoordinator<T> {
    transport: T,
}

impl<T: ControllerTransport> AttachCoordinator<T> {
    /// Wrap a transport collaborator.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Attach a volume to a node via the plugin controller.
    ///
    /// Stateless and synchronous apart from the single delegated outbound
    /// call; transport failures surface unchanged.  Callers are responsible
    /// for at-most-one-in-flight discipline per (plugin, volume, node).
    #[instrument(skip_all)]
    pub async fn attach(
        &self,
        request: Option<&AttachVolumeRequest>,
    ) -> Result<AttachVolumeResponse, BridgeError> {
        let protocol_req = publish_request(request)?;

        debug!(volume_id = %protocol_req.volume_id, "issuing controller publish");
        let resp = self.transport.controller_publish_volume(protocol_req).await?;

        debug!(
            context_keys = resp.publish_context.len(),
            "controller publish succeeded"
        );
        Ok(AttachVolumeResponse {
            publish_context: resp.publish_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    use crate::capability::{CsiAccessMode, VolumeAccessType};
    use crate::protocol::{
        ControllerPublishVolumeResponse, ControllerUnpublishVolumeRequest,
        ControllerUnpublishVolumeResponse, ControllerValidateVolumeRequest,
        ControllerValidateVolumeResponse,
    };
    use crate::types::{AccessMode, AttachmentMode};

    /// Transport that answers publish calls with a canned context, or an
    /// error when `fail` is set.
    struct StaticTransport {
        context: HashMap<String, String>,
        fail: bool,
    }

    #[async_trait]
    impl ControllerTransport for StaticTransport {
        async fn controller_publish_volume(
            &self,
            _req: ControllerPublishVolumeRequest,
        ) -> Result<ControllerPublishVolumeResponse, BridgeError> {
            if self.fail {
                return Err(BridgeError::transport("connection refused"));
            }
            Ok(ControllerPublishVolumeResponse {
                publish_context: self.context.clone(),
            })
        }

        async fn controller_unpublish_volume(
            &self,
            _req: ControllerUnpublishVolumeRequest,
        ) -> Result<ControllerUnpublishVolumeResponse, BridgeError> {
            unreachable!("attach tests never unpublish")
        }

        async fn controller_validate_volume(
            &self,
            _req: ControllerValidateVolumeRequest,
        ) -> Result<ControllerValidateVolumeResponse, BridgeError> {
            unreachable!("attach tests never validate")
        }
    }

    fn valid_request() -> AttachVolumeRequest {
        AttachVolumeRequest {
            plugin_name: "ebs".into(),
            volume_id: "vol-1".into(),
            csi_node_id: "node-A".into(),
            attachment_mode: AttachmentMode::FileSystem,
            access_mode: AccessMode::SingleNodeWriter,
            read_only: false,
            ..Default::default()
        }
    }

    #[test]
    fn absent_request_yields_empty_protocol_request() {
        let req = publish_request(None).expect("absent request is not an error");
        assert_eq!(req, ControllerPublishVolumeRequest::default());
    }

    #[test]
    fn round_trip_fields() {
        let req = publish_request(Some(&valid_request())).expect("translates");
        assert_eq!(req.volume_id, "vol-1".into());
        assert_eq!(req.node_id, "node-A");
        assert!(!req.read_only);

        let cap = req.volume_capability.expect("capability present");
        assert_eq!(cap.access_mode, CsiAccessMode::SingleNodeWriter);
        assert!(matches!(cap.access_type, VolumeAccessType::Mount { .. }));
    }

    #[test]
    fn missing_volume_id_rejected() {
        let mut req = valid_request();
        req.volume_id = Default::default();
        let err = publish_request(Some(&req)).expect_err("volume_id is required");
        assert_eq!(err, BridgeError::missing("volume_id"));
    }

    #[test]
    fn missing_csi_node_id_rejected() {
        let mut req = valid_request();
        req.csi_node_id.clear();
        let err = publish_request(Some(&req)).expect_err("csi_node_id is required");
        assert_eq!(err, BridgeError::missing("csi_node_id"));
    }

    #[test]
    fn untranslatable_modes_propagate() {
        let mut req = valid_request();
        req.access_mode = AccessMode::Unknown;
        let err = publish_request(Some(&req)).expect_err("translation failure must surface");
        assert!(matches!(err, BridgeError::CapabilityUnsupported { .. }));
    }

    #[tokio::test]
    async fn publish_context_passes_through_unchanged() {
        let context = HashMap::from([
            ("devicePath".to_owned(), "/dev/xvdf".to_owned()),
            ("lun".to_owned(), "7".to_owned()),
        ]);
        let coordinator = AttachCoordinator::new(StaticTransport {
            context: context.clone(),
            fail: false,
        });

        let resp = coordinator
            .attach(Some(&valid_request()))
            .await
            .expect("attach succeeds");
        assert_eq!(resp.publish_context, context);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_unchanged() {
        let coordinator = AttachCoordinator::new(StaticTransport {
            context: HashMap::new(),
            fail: true,
        });

        let err = coordinator
            .attach(Some(&valid_request()))
            .await
            .expect_err("transport failure must surface");
        assert_eq!(err, BridgeError::transport("connection refused"));
    }
}
