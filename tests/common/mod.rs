#![allow(dead_code)]

pub mod fixtures;

use eventdoc::idf::{DocumentTree, IRNode, InlineNode, TableNode};
use std::io::{Cursor, Read};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An unpacked `.docx` with helpers for asserting on its parts.
pub struct DocxPackage {
    pub names: Vec<String>,
    pub document_xml: String,
}

impl DocxPackage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let names = archive.file_names().map(str::to_string).collect();
        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")?
            .read_to_string(&mut document_xml)?;
        Ok(Self { names, document_xml })
    }

    pub fn media_count(&self) -> usize {
        self.names.iter().filter(|n| n.starts_with("word/media/")).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.document_xml.contains(needle)
    }
}

/// Every table in the body, including tables nested in cells.
pub fn tables(tree: &DocumentTree) -> Vec<&TableNode> {
    fn walk<'a>(nodes: &'a [IRNode], out: &mut Vec<&'a TableNode>) {
        for node in nodes {
            if let IRNode::Table(table) = node {
                out.push(table);
                for cell in table.cells() {
                    walk(&cell.children, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(&tree.body, &mut out);
    out
}

/// Concatenated text of one block node.
pub fn node_text(node: &IRNode) -> String {
    match node {
        IRNode::Paragraph { children, .. } => children
            .iter()
            .filter_map(|child| match child {
                InlineNode::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect(),
        IRNode::Table(table) => table
            .cells()
            .flat_map(|cell| cell.children.iter())
            .map(node_text)
            .collect::<Vec<_>>()
            .join("\n"),
        IRNode::PageBreak => String::new(),
    }
}

/// Inline images in a cell, in order.
pub fn images_in(nodes: &[IRNode]) -> Vec<&eventdoc::idf::InlineImage> {
    nodes
        .iter()
        .flat_map(|node| match node {
            IRNode::Paragraph { children, .. } => children.iter().collect::<Vec<_>>(),
            _ => Vec::new(),
        })
        .filter_map(|child| match child {
            InlineNode::Image(image) => Some(image),
            _ => None,
        })
        .collect()
}
