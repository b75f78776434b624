//! Pixel buffer type for dataset samples.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypesError};

/// An interleaved pixel buffer with explicit dimensions.
///
/// Pixels are stored row-major in HWC (Height-Width-Channel) order as raw
/// `u8` values. Samples within one dataset may have different dimensions,
/// so every buffer carries its own width and height; the channel count is
/// fixed per buffer (RGB in practice).
///
/// # Example
///
/// ```
/// use perturb_types::ImageBuffer;
///
/// let image = ImageBuffer::rgb(4, 2, vec![0u8; 4 * 2 * 3]).unwrap();
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.channels(), 3);
/// assert_eq!(image.pixel_count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Creates a new pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero or if `data.len()` does
    /// not equal `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(TypesError::invalid_dimensions(width, height, channels));
        }

        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(TypesError::buffer_size_mismatch(expected, data.len()));
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Creates a three-channel (RGB) buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != width * height * 3`.
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 3, data)
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the channel count.
    #[must_use]
    pub const fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns the dimensions as `(width, height)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns the raw pixel bytes in HWC order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the raw pixel bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
