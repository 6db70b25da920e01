//! Image decoding and luma channel extraction

use crate::analysis::pipeline::SymbolSource;
use crate::io::configuration::{LUMA_BLUE_WEIGHT, LUMA_GREEN_WEIGHT, LUMA_RED_WEIGHT};
use crate::io::error::{EntropyError, Result, WithPath};
use image::RgbaImage;
use ndarray::Array2;
use std::path::Path;

/// Brightness of an sRGB pixel on the 0..=255 scale
///
/// BT.601 luma, rounded half to even.
pub fn luma_from_rgb(red: u8, green: u8, blue: u8) -> u8 {
    let luma = LUMA_BLUE_WEIGHT.mul_add(
        f64::from(blue),
        LUMA_RED_WEIGHT.mul_add(f64::from(red), LUMA_GREEN_WEIGHT * f64::from(green)),
    );
    luma.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Single-channel brightness plane of a decoded image, indexed `[y, x]`
#[derive(Clone, Debug)]
pub struct LumaPlane {
    data: Array2<u8>,
}

impl LumaPlane {
    /// Wrap a brightness array of shape `(height, width)`
    pub const fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Reduce an RGBA image to its luma channel, ignoring alpha
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut data = Array2::zeros((height, width));

        for (x, y, pixel) in image.enumerate_pixels() {
            let [red, green, blue, _alpha] = pixel.0;
            if let Some(value) = data.get_mut((y as usize, x as usize)) {
                *value = luma_from_rgb(red, green, blue);
            }
        }

        Self { data }
    }

    /// Decode an image file and extract its luma channel
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not name an existing file
    /// - The file cannot be read or is not a decodable image
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EntropyError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let image = image::open(path).with_path(path)?;
        let plane = Self::from_rgba(&image.to_rgba8());
        tracing::debug!(
            path = %path.display(),
            width = plane.width(),
            height = plane.height(),
            "Decoded input image"
        );
        Ok(plane)
    }

    /// Brightness values, shape `(height, width)`
    pub const fn data(&self) -> &Array2<u8> {
        &self.data
    }
}

impl SymbolSource for LumaPlane {
    fn width(&self) -> usize {
        self.data.ncols()
    }

    fn height(&self) -> usize {
        self.data.nrows()
    }

    fn symbol(&self, x: usize, y: usize) -> Option<i32> {
        self.data.get((y, x)).copied().map(i32::from)
    }
}
