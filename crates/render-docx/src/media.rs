use eventdoc_idf::{IRNode, InlineImage, InlineNode, SharedData};
use eventdoc_types::ImageSubtype;
use std::sync::Arc;

/// One media part of the package.
#[derive(Debug, Clone)]
pub(crate) struct MediaEntry {
    pub rel_id: String,
    pub file_name: String,
    pub subtype: ImageSubtype,
    pub data: SharedData,
}

impl MediaEntry {
    pub fn part_name(&self) -> String {
        format!("word/media/{}", self.file_name)
    }
}

/// Assigns relationship ids and part names to every image in the tree.
///
/// Images sharing the same buffer (the same `Arc`) are stored once.
#[derive(Debug, Default)]
pub(crate) struct MediaTable {
    entries: Vec<MediaEntry>,
}

/// Relationship ids below this are reserved for the fixed document parts.
const FIRST_MEDIA_REL: usize = 10;

impl MediaTable {
    pub fn collect(body: &[IRNode]) -> Self {
        let mut table = Self::default();
        for node in body {
            table.visit(node);
        }
        table
    }

    fn visit(&mut self, node: &IRNode) {
        match node {
            IRNode::Paragraph { children, .. } => {
                for child in children {
                    if let InlineNode::Image(image) = child {
                        self.register(image);
                    }
                }
            }
            IRNode::Table(table) => {
                for cell in table.cells() {
                    for child in &cell.children {
                        self.visit(child);
                    }
                }
            }
            IRNode::PageBreak => {}
        }
    }

    fn register(&mut self, image: &InlineImage) {
        if self.lookup(image).is_some() {
            return;
        }
        let n = self.entries.len() + 1;
        self.entries.push(MediaEntry {
            rel_id: format!("rId{}", FIRST_MEDIA_REL + n - 1),
            file_name: format!("image{}.{}", n, image.subtype.extension()),
            subtype: image.subtype,
            data: Arc::clone(&image.data),
        });
    }

    pub fn lookup(&self, image: &InlineImage) -> Option<&MediaEntry> {
        self.entries
            .iter()
            .find(|e| Arc::ptr_eq(&e.data, &image.data) && e.subtype == image.subtype)
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Distinct subtypes in first-use order, for the content types part.
    pub fn subtypes(&self) -> Vec<ImageSubtype> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.subtype) {
                seen.push(entry.subtype);
            }
        }
        seen
    }
}
