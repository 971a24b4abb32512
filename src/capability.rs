//! Translation from orchestrator mode pairs to protocol volume capabilities.
//!
//! The orchestrator describes an attachment with two modal enumerations
//! ([`AttachmentMode`], [`AccessMode`]); the plugin protocol wants a single
//! [`VolumeCapability`] combining an access type with a protocol access
//! mode.  [`volume_capability`] is the one place that mapping lives: a pure,
//! deterministic function, total over the supported pairs, with no silent
//! default for anything outside them.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::mount::{MountFlags, MountOptions};
use crate::types::{AccessMode, AttachmentMode};

/// Access mode in the plugin protocol's own enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CsiAccessMode {
    /// One node, read-write.
    SingleNodeWriter,
    /// One node, read-only.
    SingleNodeReaderOnly,
    /// Many nodes, all read-only.
    MultiNodeReaderOnly,
    /// Many nodes, one writer.
    MultiNodeSingleWriter,
    /// Many nodes, all writers.
    MultiNodeMultiWriter,
}

/// How the volume is surfaced on the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum VolumeAccessType {
    /// Raw block device, no filesystem.
    Block,
    /// Mounted filesystem.
    Mount {
        /// Desired filesystem type, plugin default when absent.
        fs_type: Option<String>,
        /// Mount flags; redacted from diagnostic output.
        #[serde(default)]
        mount_flags: MountFlags,
    },
}

/// Protocol capability descriptor consumed by controller publish and
/// validate requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeCapability {
    /// Requested access mode, in protocol terms.
    pub access_mode: CsiAccessMode,
    /// Requested access type.
    pub access_type: VolumeAccessType,
}

/// Translate an orchestrator mode pair into a protocol capability.
///
/// Mount options, when present, are folded into the filesystem access type;
/// they have no meaning for block-device attachments and are ignored there.
/// Fails with [`BridgeError::CapabilityUnsupported`] when either mode is
/// outside the protocol's enumeration; no partial descriptor is produced.
pub fn volume_capability(
    attachment_mode: AttachmentMode,
    access_mode: AccessMode,
    mount_options: Option<&MountOptions>,
) -> Result<VolumeCapability, BridgeError> {
    let unsupported = || BridgeError::CapabilityUnsupported {
        attachment_mode,
        access_mode,
    };

    let protocol_mode = match access_mode {
        AccessMode::SingleNodeWriter => CsiAccessMode::SingleNodeWriter,
        AccessMode::SingleNodeReaderOnly => CsiAccessMode::SingleNodeReaderOnly,
        AccessMode::MultiNodeReaderOnly => CsiAccessMode::MultiNodeReaderOnly,
        AccessMode::MultiNodeSingleWriter => CsiAccessMode::MultiNodeSingleWriter,
        AccessMode::MultiNodeMultiWriter => CsiAccessMode::MultiNodeMultiWriter,
        AccessMode::Unknown => return Err(unsupported()),
    };

    let access_type = match attachment_mode {
        AttachmentMode::BlockDevice => VolumeAccessType::Block,
        AttachmentMode::FileSystem => VolumeAccessType::Mount {
            fs_type: mount_options.and_then(|m| m.fs_type.clone()),
            mount_flags: mount_options
                .map(|m| m.mount_flags().clone())
                .unwrap_or_default(),
        },
        AttachmentMode::Unknown => return Err(unsupported()),
    };

    Ok(VolumeCapability {
        access_mode: protocol_mode,
        access_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED_ATTACHMENT: [AttachmentMode; 2] =
        [AttachmentMode::BlockDevice, AttachmentMode::FileSystem];
    const SUPPORTED_ACCESS: [AccessMode; 5] = [
        AccessMode::SingleNodeWriter,
        AccessMode::SingleNodeReaderOnly,
        AccessMode::MultiNodeReaderOnly,
        AccessMode::MultiNodeSingleWriter,
        AccessMode::MultiNodeMultiWriter,
    ];

    #[test]
    fn supported_pairs_translate_deterministically() {
        for attachment in SUPPORTED_ATTACHMENT {
            for access in SUPPORTED_ACCESS {
                let first = volume_capability(attachment, access, None)
                    .unwrap_or_else(|e| panic!("{attachment}/{access} must translate: {e}"));
                let second = volume_capability(attachment, access, None).expect("repeatable");
                assert_eq!(first, second, "{attachment}/{access} must be deterministic");
            }
        }
    }

    #[test]
    fn unknown_modes_are_unsupported() {
        for access in SUPPORTED_ACCESS {
            let err = volume_capability(AttachmentMode::Unknown, access, None)
                .expect_err("unknown attachment mode must not translate");
            assert!(matches!(err, BridgeError::CapabilityUnsupported { .. }));
        }
        for attachment in SUPPORTED_ATTACHMENT {
            let err = volume_capability(attachment, AccessMode::Unknown, None)
                .expect_err("unknown access mode must not translate");
            assert!(matches!(err, BridgeError::CapabilityUnsupported { .. }));
        }
    }

    #[test]
    fn block_device_maps_to_block_access_type() {
        let cap = volume_capability(
            AttachmentMode::BlockDevice,
            AccessMode::MultiNodeMultiWriter,
            None,
        )
        .expect("translates");
        assert_eq!(cap.access_mode, CsiAccessMode::MultiNodeMultiWriter);
        assert_eq!(cap.access_type, VolumeAccessType::Block);
    }

    #[test]
    fn filesystem_carries_mount_options() {
        let opts = MountOptions::new(Some("xfs".into()), vec!["noatime".into()])
            .expect("validates");
        let cap = volume_capability(
            AttachmentMode::FileSystem,
            AccessMode::SingleNodeWriter,
            Some(&opts),
        )
        .expect("translates");
        match cap.access_type {
            VolumeAccessType::Mount {
                fs_type,
                mount_flags,
            } => {
                assert_eq!(fs_type.as_deref(), Some("xfs"));
                assert_eq!(mount_flags.as_slice(), ["noatime"]);
            }
            other => panic!("expected mount access type, got {other:?}"),
        }
    }

    #[test]
    fn filesystem_without_mount_options() {
        let cap = volume_capability(
            AttachmentMode::FileSystem,
            AccessMode::SingleNodeWriter,
            None,
        )
        .expect("translates");
        match cap.access_type {
            VolumeAccessType::Mount {
                fs_type,
                mount_flags,
            } => {
                assert!(fs_type.is_none());
                assert!(mount_flags.is_empty());
            }
            other => panic!("expected mount access type, got {other:?}"),
        }
    }
}
