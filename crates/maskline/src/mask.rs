//! Binary mask: a rectangular grid of boolean membership values.
//!
//! [`Mask`] stores the grid as a flat row-major `Vec<bool>`, so every
//! row has the same length by construction; a ragged grid cannot exist
//! past [`Mask::from_rows`]. All reads go through the bounds-checked
//! [`Mask::get`], which reports off-grid cells as `None`; the edge
//! scan relies on that to treat the mask boundary as outside.
//!
//! Interop with in-memory raster data is provided by
//! [`Mask::from_gray`] / [`Mask::to_gray`]; decoding image bytes is out
//! of scope for this crate.

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, OutlineError};

/// A rectangular 2D grid of booleans, addressed by `(x, y)` from the
/// top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-false mask of the given size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![false; width * height],
        }
    }

    /// Create a mask by evaluating `f(x, y)` for every cell, row-major.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a mask from nested rows.
    ///
    /// Row 0 fixes the width; an empty slice yields a zero-area mask.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::RaggedRows`] if any row's length differs
    /// from row 0's.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, OutlineError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * rows.len());
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(OutlineError::RaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }
        Ok(Self {
            width,
            height: rows.len(),
            data,
        })
    }

    /// Build a mask from an in-memory grayscale image.
    ///
    /// A pixel is inside the mask iff its luma value is strictly
    /// greater than `threshold`, so `from_gray(img, 0)` treats every
    /// non-black pixel as inside.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_gray(image: &GrayImage, threshold: u8) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self::from_fn(width, height, |x, y| {
            image.get_pixel(x as u32, y as u32).0[0] > threshold
        })
    }

    /// Render the mask as a binary grayscale image: inside cells become
    /// white (255), outside cells black (0).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_gray(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let inside = self.get(x as usize, y as usize) == Some(true);
            image::Luma([if inside { 255 } else { 0 }])
        })
    }

    /// The cell at `(x, y)`, or `None` if the position is off-grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).and_then(|i| self.data.get(i)).copied()
    }

    /// Set the cell at `(x, y)`. Off-grid writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width and height together.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns `true` if the mask has zero area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

/// Serde-compatible proxy for [`Mask`].
///
/// The flat cell vector is serialized alongside the dimensions;
/// deserialization re-validates that the lengths agree, so the
/// rectangular invariant survives a round trip through untrusted data.
#[derive(Serialize, Deserialize)]
struct MaskProxy {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Serialize for Mask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let proxy = MaskProxy {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        };
        proxy.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Mask {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let proxy = MaskProxy::deserialize(deserializer)?;
        let expected = proxy
            .width
            .checked_mul(proxy.height)
            .ok_or_else(|| serde::de::Error::custom("mask dimensions overflow"))?;
        if proxy.data.len() != expected {
            return Err(serde::de::Error::custom("mask data length mismatch"));
        }
        Ok(Self {
            width: proxy.width,
            height: proxy.height,
            data: proxy.data,
        })
    }
}
