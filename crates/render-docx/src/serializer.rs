use crate::document::DocumentWriter;
use crate::media::MediaTable;
use crate::parts;
use eventdoc_idf::{DocumentTree, IRNode, InlineNode};
use eventdoc_traits::{DocumentSerializer, SerializeError};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a [`DocumentTree`] as a `.docx` package.
#[derive(Debug, Clone, Copy)]
pub struct DocxSerializer {
    compression: CompressionMethod,
}

impl Default for DocxSerializer {
    fn default() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }
}

impl DocxSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores every part uncompressed. Handy when inspecting output by hand.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }
}

impl DocumentSerializer for DocxSerializer {
    fn serialize(&self, tree: &DocumentTree) -> Result<Vec<u8>, SerializeError> {
        validate_nodes(&tree.body)?;

        let media = MediaTable::collect(&tree.body);
        let document_xml = DocumentWriter::write(tree, &media)?;

        let options = SimpleFileOptions::default().compression_method(self.compression);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        write_part(&mut zip, options, parts::CONTENT_TYPES, parts::content_types_xml(&media).as_bytes())?;
        write_part(&mut zip, options, parts::ROOT_RELS, parts::root_rels_xml().as_bytes())?;
        write_part(&mut zip, options, parts::DOCUMENT, &document_xml)?;
        write_part(&mut zip, options, parts::DOCUMENT_RELS, parts::document_rels_xml(&media).as_bytes())?;
        write_part(&mut zip, options, parts::STYLES, parts::styles_xml(tree).as_bytes())?;
        write_part(&mut zip, options, parts::CORE_PROPS, parts::core_props_xml(tree).as_bytes())?;
        for entry in media.entries() {
            write_part(&mut zip, options, &entry.part_name(), &entry.data)?;
        }

        let bytes = zip
            .finish()
            .map_err(|e| SerializeError::Zip(e.to_string()))?
            .into_inner();
        log::debug!(
            "Serialized docx package: {} parts, {} media, {} bytes",
            6 + media.len(),
            media.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "docx"
    }
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    name: &str,
    bytes: &[u8],
) -> Result<(), SerializeError> {
    zip.start_file(name, options)
        .map_err(|e| SerializeError::Zip(e.to_string()))?;
    zip.write_all(bytes)?;
    Ok(())
}

/// Rejects trees the package format cannot represent.
fn validate_nodes(nodes: &[IRNode]) -> Result<(), SerializeError> {
    for node in nodes {
        match node {
            IRNode::Paragraph { children, .. } => {
                for child in children {
                    if let InlineNode::Image(image) = child {
                        if image.data.is_empty() {
                            return Err(SerializeError::InvalidTree(format!(
                                "image '{}' has no data",
                                image.description
                            )));
                        }
                        if image.size.is_empty() {
                            return Err(SerializeError::InvalidTree(format!(
                                "image '{}' has a zero display size",
                                image.description
                            )));
                        }
                    }
                }
            }
            IRNode::Table(table) => {
                if table.columns.is_empty() && !table.rows.is_empty() {
                    return Err(SerializeError::InvalidTree(
                        "table has rows but no columns".into(),
                    ));
                }
                for (i, row) in table.rows.iter().enumerate() {
                    if row.cells.len() != table.columns.len() {
                        return Err(SerializeError::InvalidTree(format!(
                            "table row {} has {} cells, expected {}",
                            i,
                            row.cells.len(),
                            table.columns.len()
                        )));
                    }
                    for cell in &row.cells {
                        validate_nodes(&cell.children)?;
                    }
                }
            }
            IRNode::PageBreak => {}
        }
    }
    Ok(())
}
