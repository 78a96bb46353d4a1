//! Pixel geometry and the unit conversions the serializer needs.
//!
//! Sizes throughout the engine are expressed in CSS pixels so that the
//! replica builder can copy the live preview's numbers verbatim. The
//! conversions below pin the pixel to 1/96 inch.

use serde::{Deserialize, Serialize};

/// English Metric Units per CSS pixel (914400 EMU per inch / 96 px per inch).
pub const EMU_PER_PIXEL: i64 = 9525;

/// Twentieths of a point per inch.
pub const TWIPS_PER_INCH: u32 = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Extent in EMU, as `(cx, cy)`.
    pub fn to_emu(&self) -> (i64, i64) {
        (px_to_emu(self.width), px_to_emu(self.height))
    }
}

pub fn px_to_emu(px: u32) -> i64 {
    i64::from(px) * EMU_PER_PIXEL
}

/// 1 px = 15 twips at 96 DPI.
pub fn px_to_twips(px: u32) -> u32 {
    px * TWIPS_PER_INCH / 96
}

/// Font sizes in word-processor markup are written in half-points.
pub fn half_points(points: f32) -> u32 {
    (points * 2.0).round().max(1.0) as u32
}
