use crate::*;
use ::image::Pixel;

/// Monochrome frame in the SSD1306 page layout: every byte holds eight
/// vertically stacked pixels (bit `z` is row `8 * page + z`), bytes are
/// ordered page by page and column by column within a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Bitmap {
    pub fn rasterize(img: &RgbaImage, threshold: u8) -> Result<Self> {
        let (width, height) = img.dimensions();

        if height % 8 != 0 {
            return Err(Error::InvalidHeight { height });
        }

        let mut bytes = Vec::with_capacity(Self::byte_count(width, height));

        for y in (0..height).step_by(8) {
            for x in 0..width {
                let byte = (0..8).rev().fold(0u8, |byte, z| {
                    if is_lit(img.get_pixel(x, y + z), threshold) {
                        byte | (1 << z)
                    } else {
                        byte
                    }
                });

                bytes.push(byte);
            }
        }

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Builds a bitmap from bytes that are already in page layout.
    ///
    /// # Panics
    ///
    /// Panics if `height` is not a multiple of 8 or if `bytes` doesn't hold
    /// exactly `width * height / 8` bytes.
    pub fn from_pages(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        assert_eq!(height % 8, 0, "height must be a multiple of 8");
        assert_eq!(bytes.len(), Self::byte_count(width, height));

        Self {
            width,
            height,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let idx = (y / 8) * self.width + x;

        self.bytes[idx as usize] & (1 << (y % 8)) != 0
    }

    fn byte_count(width: u32, height: u32) -> usize {
        (width as usize) * (height as usize / 8)
    }
}

/// Unweighted RGB mean strictly above `threshold`; alpha is ignored.
fn is_lit(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let sum: u16 = pixel.channels()[..3].iter().map(|&c| c as u16).sum();

    // mean > threshold, compared in integers so that rounding can't move the
    // boundary
    sum > 3 * threshold as u16
}
