use std::path::Path;

use anyhow::Context as _;
use image::imageops::FilterType;

use crate::{
    core::{PixelGrid, Resolution},
    error::DotreelResult,
    playback::FrameLoader,
};

/// Default luma cutoff: strictly brighter pixels become foreground.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Decodes frame images into binarized grids at a fixed working resolution.
///
/// All color handling lives here: decode, resample, grayscale conversion and
/// thresholding. The encoder downstream only ever sees an already-binary grid.
pub struct ImageLoader {
    resolution: Resolution,
    threshold: u8,
}

impl ImageLoader {
    pub fn new(resolution: Resolution, threshold: u8) -> Self {
        Self {
            resolution,
            threshold,
        }
    }

    pub fn binarize(&self, img: &image::DynamicImage) -> PixelGrid {
        let resized = img.resize_exact(
            self.resolution.width,
            self.resolution.height,
            FilterType::Triangle,
        );
        let luma = resized.to_luma8();
        let bits: Vec<bool> = luma.pixels().map(|p| p.0[0] > self.threshold).collect();

        PixelGrid::from_bits(self.resolution.width, self.resolution.height, bits)
            .expect("luma buffer matches the requested resolution")
    }
}

impl FrameLoader for ImageLoader {
    fn load(&mut self, source: &Path) -> DotreelResult<PixelGrid> {
        let img =
            image::open(source).with_context(|| format!("decode frame '{}'", source.display()))?;
        Ok(self.binarize(&img))
    }
}
