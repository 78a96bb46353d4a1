pub mod color;
pub mod geometry;
pub mod media;

pub use color::Color;
pub use geometry::{PixelSize, half_points, px_to_emu, px_to_twips, EMU_PER_PIXEL, TWIPS_PER_INCH};
pub use media::ImageSubtype;
