//! # Sigil Render
//!
//! Rasterizes chakra sigils. A seed-derived parameter set selects how many
//! layers, rays, and strokes to draw; the chakra selects the palette and
//! the shape grammar; the result is written out as a square RGB PNG.
//!
//! ```no_run
//! use sigil_render::SigilGenerator;
//!
//! # fn main() -> Result<(), sigil_render::Error> {
//! let sigil = SigilGenerator::new(Some("396 Hz"), "root", "solver123")?;
//! let path = sigil.generate("sigils/root.png", 512)?;
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod geometry;
pub mod sigil;

pub use canvas::Canvas;
pub use sigil::{SigilGenerator, DEFAULT_IMAGE_SIZE};

use std::path::PathBuf;

/// Result type for sigil-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sigil-render
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Chakra resolution failed: {0}")]
    Resolve(#[from] sigil_core::Error),

    #[error("Failed to create output directory for {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write sigil to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
