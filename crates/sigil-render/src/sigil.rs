//! Sigil generation - resolution, derivation, and drawing tied together.

use std::fs;
use std::path::{Path, PathBuf};

use sigil_core::{Chakra, Palette, SigilParams};

use crate::canvas::Canvas;
use crate::geometry;
use crate::{Error, Result};

/// Default output side length, in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 512;

/// Generates sigil images for wound reports.
///
/// Construction resolves the chakra and derives the drawing parameters
/// once; the generator is immutable afterwards, and [`generate`] renders
/// the same image for the same size every time.
///
/// [`generate`]: SigilGenerator::generate
#[derive(Debug, Clone)]
pub struct SigilGenerator {
    chakra: Chakra,
    params: SigilParams,
    solver_id: String,
}

impl SigilGenerator {
    /// Create a generator for a wound report.
    ///
    /// `wound` is matched case-insensitively; an unrecognized wound falls
    /// back to the `frequency` label when that maps to a chakra.
    pub fn new(frequency: Option<&str>, wound: &str, solver_id: &str) -> Result<Self> {
        let chakra = Chakra::resolve(wound, frequency)?;
        let params = SigilParams::derive(solver_id);
        tracing::debug!(
            chakra = chakra.name(),
            solver_id,
            layers = params.layer_count,
            rays = params.ray_count,
            "sigil generator ready"
        );
        Ok(Self {
            chakra,
            params,
            solver_id: solver_id.to_string(),
        })
    }

    /// The resolved chakra.
    pub fn chakra(&self) -> Chakra {
        self.chakra
    }

    /// The derived drawing parameters.
    pub fn params(&self) -> &SigilParams {
        &self.params
    }

    /// The chakra's color palette.
    pub fn palette(&self) -> &'static Palette {
        self.chakra.palette()
    }

    /// The solver id the parameters were derived from.
    pub fn solver_id(&self) -> &str {
        &self.solver_id
    }

    /// Render the sigil into an in-memory canvas of `image_size` pixels.
    pub fn render(&self, image_size: u32) -> Canvas {
        let palette = self.palette();
        let mut canvas = Canvas::new(image_size, palette.background);
        let center = canvas.center();
        let base_size = (image_size / 3) as f32;
        geometry::draw(&mut canvas, self.chakra, palette, &self.params, center, base_size);
        canvas
    }

    /// Render the sigil and write it to `output_path` as a PNG.
    ///
    /// Parent directories are created as needed. Returns the path written.
    pub fn generate(&self, output_path: impl AsRef<Path>, image_size: u32) -> Result<PathBuf> {
        let path = output_path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let canvas = self.render(image_size);
        canvas
            .into_image()
            .save(&path)
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            chakra = self.chakra.name(),
            size = image_size,
            "sigil written"
        );
        Ok(path)
    }

    /// Render and write at the default 512x512 size.
    pub fn generate_default(&self, output_path: impl AsRef<Path>) -> Result<PathBuf> {
        self.generate(output_path, DEFAULT_IMAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_core::Color;
    use tempfile::TempDir;

    #[test]
    fn test_root_sigil_generation() {
        let dir = TempDir::new().unwrap();
        let sigil = SigilGenerator::new(Some("396 Hz"), "root", "test_solver_root").unwrap();

        let output = dir.path().join("sigil_root.png");
        let written = sigil.generate_default(&output).unwrap();
        assert_eq!(written, output);

        let img = image::open(&written).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (512, 512));
    }

    #[test]
    fn test_custom_image_size() {
        let dir = TempDir::new().unwrap();
        let sigil = SigilGenerator::new(None, "throat", "test_size").unwrap();

        let written = sigil.generate(dir.path().join("small.png"), 256).unwrap();
        let img = image::open(&written).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (256, 256));
    }

    #[test]
    fn test_output_directory_creation() {
        let dir = TempDir::new().unwrap();
        let sigil = SigilGenerator::new(None, "crown", "test_dir_creation").unwrap();

        let nested = dir.path().join("nested").join("path").join("sigil.png");
        let written = sigil.generate(&nested, 64).unwrap();
        assert!(written.exists());
    }

    #[test]
    fn test_example_from_problem_statement() {
        // seed "solver123", wound "root", frequency "396 Hz".
        let dir = TempDir::new().unwrap();
        let sigil = SigilGenerator::new(Some("396 Hz"), "root", "solver123").unwrap();
        assert_eq!(sigil.chakra(), Chakra::Root);

        let written = sigil.generate(dir.path().join("example.png"), 512).unwrap();
        let img = image::open(&written).unwrap().to_rgb8();

        // The figure never reaches the corners, so the top-left pixel is
        // the raw root background.
        assert_eq!(*img.get_pixel(0, 0), image::Rgb([20, 10, 10]));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = SigilGenerator::new(Some("417 Hz"), "sacral", "consistent_solver").unwrap();
        let b = SigilGenerator::new(Some("417 Hz"), "sacral", "consistent_solver").unwrap();
        assert_eq!(a.params(), b.params());

        let raster_a = a.render(128).into_image().into_raw();
        let raster_b = b.render(128).into_image().into_raw();
        assert_eq!(raster_a, raster_b);
    }

    #[test]
    fn test_distinct_solvers_render_differently() {
        let alpha = SigilGenerator::new(None, "root", "solver_alpha").unwrap();
        let beta = SigilGenerator::new(None, "root", "solver_beta").unwrap();
        assert_ne!(alpha.params(), beta.params());

        let raster_alpha = alpha.render(128).into_image().into_raw();
        let raster_beta = beta.render(128).into_image().into_raw();
        assert_ne!(raster_alpha, raster_beta);
    }

    #[test]
    fn test_frequency_fallback_construction() {
        let sigil = SigilGenerator::new(Some("417 Hz"), "anything", "test_mapping2").unwrap();
        assert_eq!(sigil.chakra(), Chakra::Sacral);
    }

    #[test]
    fn test_explicit_wound_beats_frequency() {
        let sigil = SigilGenerator::new(Some("417 Hz"), "root", "test_mapping").unwrap();
        assert_eq!(sigil.chakra(), Chakra::Root);
    }

    #[test]
    fn test_invalid_wound_rejected() {
        let err = SigilGenerator::new(Some("999 Hz"), "invalid_wound", "test_invalid").unwrap_err();
        assert!(matches!(
            err,
            Error::Resolve(sigil_core::Error::UnknownWound(_))
        ));
        assert!(err.to_string().contains("invalid_wound"));
    }

    #[test]
    fn test_render_background_matches_palette() {
        let sigil = SigilGenerator::new(None, "heart", "demo").unwrap();
        let canvas = sigil.render(96);
        assert_eq!(canvas.pixel(0, 0), Color::rgb(5, 15, 5));
    }
}
