//! Drawing parameter derivation - solver id hash to sigil variations.
//!
//! The derivation is deterministic: the same solver id always produces the
//! same parameters, so the author of a wound report and any later reader
//! can regenerate an identical sigil independently.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Procedural drawing parameters derived from a solver id.
///
/// Each parameter comes from one byte of the id's SHA-256 digest:
/// - Byte 0: rotation offset (0-360 degrees)
/// - Byte 1: layer count (3-7)
/// - Byte 2: ray count (6-12)
/// - Byte 3: line weight (1-5 pixels)
/// - Byte 4: scale factor (0.7-1.3)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SigilParams {
    /// Base rotation applied to all layers and rays, in degrees.
    pub rotation_offset: f32,
    /// Number of concentric layers.
    pub layer_count: u32,
    /// Number of radiating elements.
    pub ray_count: u32,
    /// Stroke width in pixels.
    pub line_weight: u32,
    /// Overall size multiplier.
    pub scale_factor: f32,
}

impl SigilParams {
    /// Derive parameters from a solver id.
    pub fn derive(solver_id: &str) -> Self {
        let digest = Sha256::digest(solver_id.as_bytes());

        Self {
            rotation_offset: (f32::from(digest[0]) / 255.0) * 360.0,
            layer_count: 3 + u32::from(digest[1] % 5),
            ray_count: 6 + u32::from(digest[2] % 7),
            line_weight: 1 + u32::from(digest[3] % 5),
            scale_factor: 0.7 + (f32::from(digest[4]) / 255.0) * 0.6,
        }
    }
}
