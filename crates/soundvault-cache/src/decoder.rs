//! Media decode collaborator interface
//!
//! Turning cached bytes into a playable asset is platform- and
//! hardware-specific, so the engine only defines the contract and hands the
//! collaborator a path to the blob on disk.

use async_trait::async_trait;
use std::path::Path;

/// Content-type hint the engine passes for audio payloads fetched from a
/// URL with no better information.
pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// Streaming decoder turning an on-disk payload into a playable asset.
#[async_trait]
pub trait MediaDecoder: Send + Sync {
    /// The decoded asset produced on success.
    type Asset: Send;

    /// Decode the payload at `path`, using `content_type` as a format hint.
    ///
    /// Failures are reported as text; the engine wraps the text without
    /// interpreting it.
    async fn decode(
        &self,
        path: &Path,
        content_type: &str,
    ) -> std::result::Result<Self::Asset, String>;
}
