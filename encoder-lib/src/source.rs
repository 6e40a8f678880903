use ::image::{codecs::gif::GifDecoder, io::Reader as ImageReader, AnimationDecoder};
use anyhow::{bail, Context};
use std::{fs::File, io::BufReader};
pub use std::path::{Path, PathBuf};

use crate::RgbaImage;

/// Frames to encode, in playback order.
pub struct Source {
    images: Vec<RgbaImage>,
}

impl Source {
    pub fn is_gif(path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("gif"))
    }

    /// Lists all `*.png` files below `dir`, sorted by path.
    pub fn paths(dir: impl AsRef<Path>) -> anyhow::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let pattern = dir.join("**").join("*.png");
        let paths = glob::glob(&pattern.to_string_lossy()).context("Couldn't find frames")?;

        let mut paths = paths
            .map(|path| path.context("Couldn't find frame"))
            .collect::<anyhow::Result<Vec<_>>>()?;

        if paths.is_empty() {
            bail!("Found no png files within: {}", dir.display());
        }

        paths.sort();

        Ok(paths)
    }

    pub fn decode(path: impl AsRef<Path>) -> anyhow::Result<RgbaImage> {
        let path = path.as_ref();

        let image = ImageReader::open(path)
            .with_context(|| format!("Couldn't open frame: {}", path.display()))?
            .decode()
            .with_context(|| format!("Couldn't decode frame: {}", path.display()))?;

        Ok(image.to_rgba8())
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let images = Self::paths(dir)?
            .iter()
            .map(Self::decode)
            .collect::<anyhow::Result<_>>()?;

        Ok(Self { images })
    }

    pub fn from_gif(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .with_context(|| format!("Couldn't open animation: {}", path.display()))?;

        let frames = GifDecoder::new(BufReader::new(file))
            .with_context(|| format!("Couldn't read animation: {}", path.display()))?
            .into_frames()
            .collect_frames()
            .with_context(|| format!("Couldn't decode animation: {}", path.display()))?;

        if frames.is_empty() {
            bail!("Found no frames within: {}", path.display());
        }

        Ok(Self {
            images: frames.into_iter().map(|frame| frame.into_buffer()).collect(),
        })
    }

    pub fn from_images(images: Vec<RgbaImage>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[RgbaImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
