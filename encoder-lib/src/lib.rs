//! Encodes monochrome animations for SSD1306-style OLEDs as a base frame
//! plus bit-packed, byte-level changes between consecutive frames.

mod animation;
mod bitmap;
mod decoder;
mod delta;
mod error;
mod header;
mod packer;
mod params;
mod source;
mod stats;

pub use ::image::{Rgba, RgbaImage};

pub use self::{
    animation::*, bitmap::*, decoder::*, delta::*, error::*, header::*, packer::*, params::*,
    source::*, stats::*,
};

#[derive(Debug)]
pub struct Encoder<'a> {
    params: &'a Params,
}

impl<'a> Encoder<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self { params }
    }

    /// Thresholds every image and encodes the resulting frames as a loop.
    pub fn encode(&self, images: &[RgbaImage]) -> Result<Animation> {
        let (width, height) = delta::ensure_uniform(images.iter().map(RgbaImage::dimensions))?;

        let frames = images
            .iter()
            .map(|img| Bitmap::rasterize(img, self.params.threshold))
            .collect::<Result<Vec<_>>>()?;

        let anim = Animation::new(self.params.storage, frames)?;
        let stats = anim.stats();

        tracing::info!(
            width,
            height,
            frames = stats.frames,
            changes = stats.changes,
            bytes = stats.total_bytes(),
            "encoded animation"
        );

        Ok(anim)
    }
}
