//! WordprocessingML body writer.

use crate::media::MediaTable;
use crate::xml::XmlOut;
use eventdoc_idf::{
    Alignment, BorderLine, DocumentTree, IRNode, InlineImage, InlineNode, ParagraphStyle, RunStyle,
    TableNode,
};
use eventdoc_traits::SerializeError;
use std::io;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const WP_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

pub(crate) struct DocumentWriter<'a> {
    out: XmlOut,
    media: &'a MediaTable,
    /// Running `wp:docPr` id; must be unique per drawing.
    drawing_id: u32,
}

impl<'a> DocumentWriter<'a> {
    pub fn write(tree: &DocumentTree, media: &'a MediaTable) -> Result<Vec<u8>, SerializeError> {
        let mut writer = DocumentWriter {
            out: XmlOut::new()?,
            media,
            drawing_id: 0,
        };
        writer.out.start(
            "w:document",
            &[
                ("xmlns:w", W_NS),
                ("xmlns:r", R_NS),
                ("xmlns:wp", WP_NS),
                ("xmlns:a", A_NS),
                ("xmlns:pic", PIC_NS),
            ],
        )?;
        writer.out.start("w:body", &[])?;
        for node in &tree.body {
            writer.node(node)?;
        }
        writer.section(tree)?;
        writer.out.end("w:body")?;
        writer.out.end("w:document")?;
        Ok(writer.out.finish())
    }

    fn section(&mut self, tree: &DocumentTree) -> io::Result<()> {
        let page = &tree.page;
        self.out.start("w:sectPr", &[])?;
        self.out.empty(
            "w:pgSz",
            &[("w:w", page.width.to_string().as_str()), ("w:h", page.height.to_string().as_str())],
        )?;
        self.out.empty(
            "w:pgMar",
            &[
                ("w:top", page.margin_top.to_string().as_str()),
                ("w:right", page.margin_right.to_string().as_str()),
                ("w:bottom", page.margin_bottom.to_string().as_str()),
                ("w:left", page.margin_left.to_string().as_str()),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        self.out.end("w:sectPr")
    }

    fn node(&mut self, node: &IRNode) -> Result<(), SerializeError> {
        match node {
            IRNode::Paragraph { style, children } => self.paragraph(style, children),
            IRNode::Table(table) => self.table(table),
            IRNode::PageBreak => {
                self.out.start("w:p", &[])?;
                self.out.start("w:r", &[])?;
                self.out.empty("w:br", &[("w:type", "page")])?;
                self.out.end("w:r")?;
                self.out.end("w:p")?;
                Ok(())
            }
        }
    }

    fn paragraph(&mut self, style: &ParagraphStyle, children: &[InlineNode]) -> Result<(), SerializeError> {
        self.out.start("w:p", &[])?;
        self.paragraph_properties(style)?;
        for child in children {
            match child {
                InlineNode::Text { text, style } => self.run(text, style)?,
                InlineNode::Image(image) => self.drawing(image)?,
                InlineNode::LineBreak => {
                    self.out.start("w:r", &[])?;
                    self.out.empty("w:br", &[])?;
                    self.out.end("w:r")?;
                }
            }
        }
        self.out.end("w:p")?;
        Ok(())
    }

    fn paragraph_properties(&mut self, style: &ParagraphStyle) -> io::Result<()> {
        self.out.start("w:pPr", &[])?;
        if style.keep_with_next {
            self.out.empty("w:keepNext", &[])?;
        }
        if style.border_top.is_some() || style.border_bottom.is_some() {
            self.out.start("w:pBdr", &[])?;
            if let Some(line) = &style.border_top {
                self.border("w:top", line)?;
            }
            if let Some(line) = &style.border_bottom {
                self.border("w:bottom", line)?;
            }
            self.out.end("w:pBdr")?;
        }
        self.out.empty(
            "w:spacing",
            &[
                ("w:before", style.spacing_before.to_string().as_str()),
                ("w:after", style.spacing_after.to_string().as_str()),
            ],
        )?;
        if style.indent_left > 0 {
            self.out.empty("w:ind", &[("w:left", style.indent_left.to_string().as_str())])?;
        }
        self.out.empty("w:jc", &[("w:val", justification(style.alignment))])?;
        self.out.end("w:pPr")
    }

    fn border(&mut self, edge: &str, line: &BorderLine) -> io::Result<()> {
        self.out.empty(
            edge,
            &[
                ("w:val", "single"),
                ("w:sz", line.size.to_string().as_str()),
                ("w:space", "1"),
                ("w:color", line.color.to_hex().as_str()),
            ],
        )
    }

    fn run(&mut self, text: &str, style: &RunStyle) -> io::Result<()> {
        self.out.start("w:r", &[])?;
        self.run_properties(style)?;
        for (i, line) in text.split(['\n', '\u{0B}', '\u{0C}']).enumerate() {
            if i > 0 {
                self.out.empty("w:br", &[])?;
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    self.out.empty("w:tab", &[])?;
                }
                if !segment.is_empty() {
                    self.out
                        .text_element("w:t", &[("xml:space", "preserve")], segment)?;
                }
            }
        }
        self.out.end("w:r")
    }

    fn run_properties(&mut self, style: &RunStyle) -> io::Result<()> {
        let has_props = style.bold
            || style.italic
            || style.underline
            || style.size.is_some()
            || style.color.is_some()
            || style.font.is_some();
        if !has_props {
            return Ok(());
        }
        self.out.start("w:rPr", &[])?;
        if let Some(font) = &style.font {
            self.out.empty(
                "w:rFonts",
                &[("w:ascii", font.as_str()), ("w:hAnsi", font.as_str()), ("w:cs", font.as_str())],
            )?;
        }
        if style.bold {
            self.out.empty("w:b", &[])?;
        }
        if style.italic {
            self.out.empty("w:i", &[])?;
        }
        if let Some(color) = &style.color {
            self.out.empty("w:color", &[("w:val", color.to_hex().as_str())])?;
        }
        if let Some(size) = style.size {
            let size = size.to_string();
            self.out.empty("w:sz", &[("w:val", size.as_str())])?;
            self.out.empty("w:szCs", &[("w:val", size.as_str())])?;
        }
        if style.underline {
            self.out.empty("w:u", &[("w:val", "single")])?;
        }
        self.out.end("w:rPr")
    }

    fn drawing(&mut self, image: &InlineImage) -> Result<(), SerializeError> {
        let entry = self.media.lookup(image).ok_or_else(|| {
            SerializeError::InvalidTree("image was not registered with the media table".into())
        })?;
        let rel_id = entry.rel_id.clone();
        let file_name = entry.file_name.clone();
        self.drawing_id += 1;
        let id = self.drawing_id.to_string();
        let (cx, cy) = image.size.to_emu();
        let (cx, cy) = (cx.to_string(), cy.to_string());
        let name = format!("Picture {id}");

        let out = &mut self.out;
        out.start("w:r", &[])?;
        out.start("w:drawing", &[])?;
        out.start(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        out.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        out.empty("wp:effectExtent", &[("l", "0"), ("t", "0"), ("r", "0"), ("b", "0")])?;
        out.empty(
            "wp:docPr",
            &[("id", id.as_str()), ("name", name.as_str()), ("descr", image.description.as_str())],
        )?;
        out.start("wp:cNvGraphicFramePr", &[])?;
        out.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
        out.end("wp:cNvGraphicFramePr")?;
        out.start("a:graphic", &[])?;
        out.start("a:graphicData", &[("uri", PIC_NS)])?;
        out.start("pic:pic", &[])?;
        out.start("pic:nvPicPr", &[])?;
        out.empty("pic:cNvPr", &[("id", "0"), ("name", file_name.as_str())])?;
        out.empty("pic:cNvPicPr", &[])?;
        out.end("pic:nvPicPr")?;
        out.start("pic:blipFill", &[])?;
        out.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
        out.start("a:stretch", &[])?;
        out.empty("a:fillRect", &[])?;
        out.end("a:stretch")?;
        out.end("pic:blipFill")?;
        out.start("pic:spPr", &[])?;
        out.start("a:xfrm", &[])?;
        out.empty("a:off", &[("x", "0"), ("y", "0")])?;
        out.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        out.end("a:xfrm")?;
        out.start("a:prstGeom", &[("prst", "rect")])?;
        out.empty("a:avLst", &[])?;
        out.end("a:prstGeom")?;
        out.end("pic:spPr")?;
        out.end("pic:pic")?;
        out.end("a:graphicData")?;
        out.end("a:graphic")?;
        out.end("wp:inline")?;
        out.end("w:drawing")?;
        out.end("w:r")?;
        Ok(())
    }

    fn table(&mut self, table: &TableNode) -> Result<(), SerializeError> {
        self.out.start("w:tbl", &[])?;
        self.out.start("w:tblPr", &[])?;
        self.out.empty(
            "w:tblW",
            &[("w:w", table.total_width().to_string().as_str()), ("w:type", "dxa")],
        )?;
        if table.alignment != Alignment::Left {
            self.out.empty("w:jc", &[("w:val", justification(table.alignment))])?;
        }
        self.table_borders(table.borders)?;
        self.out.empty("w:tblLayout", &[("w:type", "fixed")])?;
        if let Some(margin) = table.cell_margin {
            let margin = margin.to_string();
            self.out.start("w:tblCellMar", &[])?;
            self.out.empty("w:left", &[("w:w", margin.as_str()), ("w:type", "dxa")])?;
            self.out.empty("w:right", &[("w:w", margin.as_str()), ("w:type", "dxa")])?;
            self.out.end("w:tblCellMar")?;
        }
        self.out.end("w:tblPr")?;

        self.out.start("w:tblGrid", &[])?;
        for column in &table.columns {
            self.out.empty("w:gridCol", &[("w:w", column.width.to_string().as_str())])?;
        }
        self.out.end("w:tblGrid")?;

        for row in &table.rows {
            self.out.start("w:tr", &[])?;
            for (cell, column) in row.cells.iter().zip(&table.columns) {
                self.out.start("w:tc", &[])?;
                self.out.start("w:tcPr", &[])?;
                self.out.empty(
                    "w:tcW",
                    &[("w:w", column.width.to_string().as_str()), ("w:type", "dxa")],
                )?;
                self.out.end("w:tcPr")?;
                for child in &cell.children {
                    self.node(child)?;
                }
                // A cell must end with a paragraph.
                if !matches!(cell.children.last(), Some(IRNode::Paragraph { .. })) {
                    self.out.empty("w:p", &[])?;
                }
                self.out.end("w:tc")?;
            }
            self.out.end("w:tr")?;
        }
        self.out.end("w:tbl")?;
        Ok(())
    }

    fn table_borders(&mut self, visible: bool) -> io::Result<()> {
        let (val, size) = if visible { ("single", "4") } else { ("nil", "0") };
        self.out.start("w:tblBorders", &[])?;
        for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
            self.out.empty(
                edge,
                &[("w:val", val), ("w:sz", size), ("w:space", "0"), ("w:color", "auto")],
            )?;
        }
        self.out.end("w:tblBorders")
    }
}

fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}
