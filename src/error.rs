//! Error type shared by the renderer and descriptor parsing.

use thiserror::Error;

/// Errors produced when building or reconfiguring an icon.
///
/// Rendering itself never fails once a renderer exists; these only cover
/// caller contract violations and configuration input.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("pixel radius must be positive, got {0}")]
    InvalidRadius(u32),

    #[error("cannot allocate a {width}x{height} icon surface")]
    Allocation { width: u32, height: u32 },

    #[error("invalid icon descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}
