#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:customStyle="1" w:styleId="Author"><w:name w:val="Author"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:customStyle="1" w:styleId="Abstract"><w:name w:val="Abstract"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:rPr><w:b/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:rPr><w:b/><w:i/></w:rPr></w:style>
<w:style w:type="character" w:styleId="Emphasis"><w:name w:val="Emphasis"/><w:rPr><w:i/></w:rPr></w:style>
</w:styles>"#;

/// A run as `(text, rPr children)`.
pub type RunSpec<'a> = (&'a str, &'a str);

/// Builds `<w:p>` XML with an optional paragraph style id.
pub fn paragraph(style_id: Option<&str>, runs: &[RunSpec<'_>]) -> String {
    let mut xml = String::from("<w:p>");
    if let Some(id) = style_id {
        xml.push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id));
    }
    for (text, rpr) in runs {
        xml.push_str("<w:r>");
        if !rpr.is_empty() {
            xml.push_str(&format!("<w:rPr>{}</w:rPr>", rpr));
        }
        xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t></w:r>"#, text));
    }
    xml.push_str("</w:p>");
    xml
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        body
    )
}

/// Writes a minimal `.docx` package with the given body XML.
pub fn write_docx(path: &Path, body: &str) {
    let file = File::create(path).expect("create docx file");
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, content) in [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("word/styles.xml", STYLES.to_string()),
        ("word/document.xml", document_xml(body)),
    ] {
        zip.start_file(name, options).expect("start zip entry");
        zip.write_all(content.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish docx");
}

/// Writes a `.docx` into `dir` and returns its path.
pub fn docx_in(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    write_docx(&path, body);
    path
}

/// Paragraphs of a short manuscript in the journal layout.
pub fn manuscript_body() -> String {
    [
        paragraph(Some("Title"), &[("Example Study", "")]),
        paragraph(
            Some("Author"),
            &[
                ("Jane Doe", ""),
                ("1", r#"<w:vertAlign w:val="superscript"/>"#),
                (", John Roe", ""),
                ("2", r#"<w:vertAlign w:val="superscript"/>"#),
            ],
        ),
        paragraph(
            Some("Author"),
            &[
                ("1", r#"<w:vertAlign w:val="superscript"/>"#),
                ("Department of Physics", ""),
            ],
        ),
        paragraph(
            Some("Author"),
            &[
                ("2", r#"<w:vertAlign w:val="superscript"/>"#),
                ("Department of Chemistry", ""),
            ],
        ),
        paragraph(Some("Abstract"), &[("We measure things.", "")]),
        paragraph(Some("Heading1"), &[("Introduction", "")]),
        paragraph(
            None,
            &[
                ("Water is H", ""),
                ("2", r#"<w:vertAlign w:val="subscript"/>"#),
                ("O and ", ""),
                ("very", "<w:b/><w:i/>"),
                (" wet.", ""),
            ],
        ),
        paragraph(Some("Heading2"), &[("Samples", "")]),
        paragraph(None, &[("See ", ""), ("Ref", r#"<w:rStyle w:val="Emphasis"/>"#)]),
        paragraph(Some("Heading1"), &[("Supplementary Information", "")]),
        paragraph(None, &[("Extra data.", "")]),
    ]
    .concat()
}
