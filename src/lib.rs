//! # libcsibridge — client-side CSI controller bridge
//!
//! `libcsibridge` translates an orchestrator's volume-attachment model into
//! the [Container Storage Interface][csi] controller publish/unpublish
//! protocol.  It is a pure translation core: it builds protocol-correct
//! requests, hands them to an external transport, and passes the plugin's
//! opaque publish context back to the caller untouched.  It follows the RK8s
//! architecture conventions (`tracing` for observability, `thiserror` for
//! structured errors, `serde` for all wire-facing types).
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |---|---|
//! | [`types`] | Orchestrator-level data model: requests, responses, modes. |
//! | [`mount`] | [`MountOptions`] value object with size-bounded, redacted flags. |
//! | [`capability`] | Mode-pair → [`VolumeCapability`] translation. |
//! | [`protocol`] | Controller publish/unpublish wire shapes. |
//! | [`error`] | [`BridgeError`] enum covering all failure modes. |
//! | [`transport`] | [`ControllerTransport`] trait — the external RPC seam. |
//! | [`attach`] | [`AttachCoordinator`] — attach intent → controller publish. |
//! | [`detach`] | [`DetachCoordinator`] — detach intent → controller unpublish. |
//! | [`validate`] | [`ValidateCoordinator`] — capability validation call. |
//!
//! The transport itself (connection handling, routing, retry, timeouts) is
//! out of scope and reachable only through the [`transport`] seam.
//!
//! [csi]: https://github.com/container-storage-interface/spec

pub mod attach;
pub mod capability;
pub mod detach;
pub mod error;
pub mod mount;
pub mod protocol;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export the most commonly used items at crate root for convenience.
pub use attach::AttachCoordinator;
pub use capability::{VolumeCapability, volume_capability};
pub use detach::DetachCoordinator;
pub use error::BridgeError;
pub use mount::MountOptions;
pub use transport::ControllerTransport;
pub use types::*;
pub use validate::ValidateCoordinator;
