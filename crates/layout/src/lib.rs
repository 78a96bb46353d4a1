//! Layout planning for multi-image blocks.
//!
//! The planner only decides the shape of the table an image block becomes
//! and the pixel size of each cell. It never sees image bytes.

mod planner;

pub use planner::{Arrangement, ArrangementKind, LayoutSizes, Slot, plan};
