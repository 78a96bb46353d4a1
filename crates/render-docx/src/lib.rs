//! Office Open XML serializer.
//!
//! [`DocxSerializer`] turns a [`DocumentTree`](eventdoc_idf::DocumentTree)
//! into a WordprocessingML package: the main document part, its
//! relationships, a style part carrying the default font, core document
//! properties and one media part per embedded image.

mod document;
mod media;
mod parts;
mod serializer;
mod xml;

pub use serializer::DocxSerializer;
