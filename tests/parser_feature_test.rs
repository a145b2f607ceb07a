mod common;

use docx2tex::{DocxReader, ParagraphStyle, VerticalAlign};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

fn package(document: &str, styles: Option<&str>) -> Cursor<Vec<u8>> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .expect("start entry");
    zip.write_all(document.as_bytes()).expect("write entry");
    if let Some(styles) = styles {
        zip.start_file("word/styles.xml", SimpleFileOptions::default())
            .expect("start entry");
        zip.write_all(styles.as_bytes()).expect("write entry");
    }
    let cursor = zip.finish().expect("finish zip");
    Cursor::new(cursor.into_inner())
}

#[test]
fn test_styles_resolved_by_display_name() {
    let styles = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:styleId="berschrift1"><w:name w:val="heading 1"/></w:style></w:styles>"#;
    let body = common::paragraph(Some("berschrift1"), &[("Results", "")]);
    let doc = DocxReader
        .read_from(package(&common::document_xml(&body), Some(styles)))
        .expect("read docx");

    let para = &doc.paragraphs[0];
    assert_eq!(para.style, ParagraphStyle::Section);
    assert_eq!(para.style_name.as_deref(), Some("heading 1"));
}

#[test]
fn test_style_ids_used_without_style_part() {
    let body = [
        common::paragraph(Some("Heading2"), &[("Samples", "")]),
        common::paragraph(Some("Abstract"), &[("Summary", "")]),
        common::paragraph(None, &[("Plain", "")]),
    ]
    .concat();
    let doc = DocxReader
        .read_from(package(&common::document_xml(&body), None))
        .expect("read docx");

    let styles: Vec<ParagraphStyle> = doc.paragraphs.iter().map(|p| p.style).collect();
    assert_eq!(
        styles,
        vec![
            ParagraphStyle::Subsection,
            ParagraphStyle::Abstract,
            ParagraphStyle::Body
        ]
    );
    assert_eq!(doc.paragraphs[2].style_name, None);
}

#[test]
fn test_run_formatting_flags() {
    let body = common::paragraph(
        None,
        &[
            ("a", "<w:b/>"),
            ("b", r#"<w:i/><w:u w:val="double"/>"#),
            ("c", r#"<w:b w:val="false"/><w:u w:val="none"/>"#),
            ("d", r#"<w:vertAlign w:val="subscript"/>"#),
            ("e", r#"<w:vertAlign w:val="baseline"/>"#),
        ],
    );
    let doc = DocxReader
        .read_from(package(&common::document_xml(&body), None))
        .expect("read docx");

    let runs = &doc.paragraphs[0].runs;
    assert_eq!(runs.len(), 5);
    assert!(runs[0].bold && !runs[0].italic);
    assert!(runs[1].italic && runs[1].underline);
    assert!(!runs[2].bold && !runs[2].underline);
    assert_eq!(runs[3].vertical_align, VerticalAlign::Subscript);
    assert_eq!(runs[4].vertical_align, VerticalAlign::Baseline);
}

#[test]
fn test_malformed_document_xml_is_error() {
    let result = DocxReader.read_from(package("<w:document", None));
    assert!(matches!(result, Err(docx2tex::Error::Xml(_))));
}
