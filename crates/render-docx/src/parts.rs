//! The fixed, non-body parts of the package.

use crate::media::MediaTable;
use crate::xml::xml_safe;
use eventdoc_idf::DocumentTree;
use quick_xml::escape::escape;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

pub(crate) const CONTENT_TYPES: &str = "[Content_Types].xml";
pub(crate) const ROOT_RELS: &str = "_rels/.rels";
pub(crate) const DOCUMENT: &str = "word/document.xml";
pub(crate) const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
pub(crate) const STYLES: &str = "word/styles.xml";
pub(crate) const CORE_PROPS: &str = "docProps/core.xml";

/// Escaped caller text with characters XML cannot carry removed.
fn text(value: &str) -> String {
    escape(xml_safe(value).as_ref()).into_owned()
}

pub(crate) fn content_types_xml(media: &MediaTable) -> String {
    let mut defaults = vec![
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#.to_string(),
        r#"<Default Extension="xml" ContentType="application/xml"/>"#.to_string(),
    ];
    for subtype in media.subtypes() {
        defaults.push(format!(
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            subtype.extension(),
            subtype.mime_type()
        ));
    }

    format!(
        concat!(
            "{decl}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
            "{defaults}",
            "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>",
            "<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>",
            "<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>",
            "</Types>"
        ),
        decl = XML_DECL,
        defaults = defaults.concat()
    )
}

pub(crate) fn root_rels_xml() -> String {
    format!(
        concat!(
            "{decl}<Relationships xmlns=\"{ns}\">",
            "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>",
            "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>",
            "</Relationships>"
        ),
        decl = XML_DECL,
        ns = REL_NS
    )
}

pub(crate) fn document_rels_xml(media: &MediaTable) -> String {
    let mut rels = vec![
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#.to_string(),
    ];
    for entry in media.entries() {
        rels.push(format!(
            r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/{}"/>"#,
            entry.rel_id, entry.file_name
        ));
    }
    format!(
        "{XML_DECL}<Relationships xmlns=\"{REL_NS}\">{}</Relationships>",
        rels.concat()
    )
}

pub(crate) fn styles_xml(tree: &DocumentTree) -> String {
    let font = text(tree.default_font.as_str());
    let size = tree.default_size;
    format!(
        concat!(
            "{decl}<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
            "<w:docDefaults><w:rPrDefault><w:rPr>",
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:eastAsia=\"{font}\" w:cs=\"{font}\"/>",
            "<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/><w:lang w:val=\"en-US\"/>",
            "</w:rPr></w:rPrDefault>",
            "<w:pPrDefault><w:pPr><w:spacing w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault>",
            "</w:docDefaults>",
            "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/><w:qFormat/></w:style>",
            "<w:style w:type=\"table\" w:default=\"1\" w:styleId=\"TableNormal\"><w:name w:val=\"Normal Table\"/>",
            "<w:tblPr><w:tblInd w:w=\"0\" w:type=\"dxa\"/><w:tblCellMar>",
            "<w:top w:w=\"0\" w:type=\"dxa\"/><w:left w:w=\"108\" w:type=\"dxa\"/>",
            "<w:bottom w:w=\"0\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/>",
            "</w:tblCellMar></w:tblPr></w:style>",
            "</w:styles>"
        ),
        decl = XML_DECL,
        font = font,
        size = size
    )
}

pub(crate) fn core_props_xml(tree: &DocumentTree) -> String {
    let meta = &tree.metadata;
    let subject = meta
        .subject
        .as_deref()
        .map(|s| format!("<dc:subject>{}</dc:subject>", text(s)))
        .unwrap_or_default();
    format!(
        concat!(
            "{decl}<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" ",
            "xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" ",
            "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
            "<dc:title>{title}</dc:title>{subject}<dc:creator>{creator}</dc:creator>",
            "</cp:coreProperties>"
        ),
        decl = XML_DECL,
        title = text(meta.title.as_str()),
        subject = subject,
        creator = text(meta.creator.as_str())
    )
}
