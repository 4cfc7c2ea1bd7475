// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::error::AssetError;
use core::fmt;
use image::ImageReader;
use std::path::Path;
use tracing::debug;

/// Decoded image held in the display controller's byte order.
///
/// LVGL's `LV_COLOR_FORMAT_ARGB8888` stores each pixel as a little-endian
/// 32-bit `0xAARRGGBB` word, which places blue at the lowest memory address.
/// The buffer therefore holds B,G,R,A per pixel, row-major, left-to-right,
/// top-to-bottom, matching the source scan order exactly. Getting the channel
/// order wrong does not produce a decoding error, it silently renders wrong
/// colors on the panel, so the reorder lives in exactly one place.
///
/// # Example
///
/// ```
/// use edgefirst_assetgen::transcode::Pixmap;
///
/// let pixmap = Pixmap::from_rgba(1, 1, &[10, 20, 30, 255]);
/// assert_eq!(pixmap.data(), &[30, 20, 10, 255]);
/// assert_eq!(pixmap.size(), 4);
/// ```
#[derive(Debug)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Opens and decodes an image file into the device byte order.
    ///
    /// Any decodable source format (grayscale, indexed, 3-channel,
    /// 4-channel) is normalized to 8-bit RGBA first, with a fully opaque
    /// alpha channel synthesized when the source has none, and then
    /// reordered to B,G,R,A. No resizing, no color-space conversion, no
    /// alpha premultiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] when the file cannot be opened or
    /// parsed as an image (missing file, corrupt header, unsupported
    /// codec).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .map_err(|e| AssetError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?
            .decode()
            .map_err(|e| AssetError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;
        debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.as_raw()))
    }

    /// Builds a pixmap from raw 8-bit RGBA samples already in memory.
    ///
    /// Mostly useful for exercising the pipeline with synthetic images.
    ///
    /// # Panics
    ///
    /// Panics if `rgba.len()` is not `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        assert_eq!(
            rgba.len(),
            width as usize * height as usize * 4,
            "rgba buffer does not match {width}x{height}"
        );
        let mut data = Vec::with_capacity(rgba.len());
        for px in rgba.chunks_exact(4) {
            data.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The B,G,R,A byte buffer, `width * height * 4` bytes long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl fmt::Display for Pixmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} {}B", self.width, self.height, self.size())
    }
}
