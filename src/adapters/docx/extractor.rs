use super::styles::{CharacterFlags, StyleResolver};
use super::xml::{is_wml, wml, wml_attr, WML_NS};
use crate::core::model::{Document, Paragraph, ParagraphStyle, Run};
use crate::{Error, Result};
use roxmltree::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldPhase {
    Instruction,
    Result,
}

/// Walks `word/document.xml` and collects styled paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct DocxExtractor<'s> {
    styles: &'s StyleResolver,
}

impl<'s> DocxExtractor<'s> {
    pub fn new(styles: &'s StyleResolver) -> Self {
        Self { styles }
    }

    pub fn extract(&self, document_xml: &str) -> Result<Document> {
        let xml = roxmltree::Document::parse(document_xml)?;
        let body = wml(xml.root_element(), "body")
            .ok_or_else(|| Error::DocxParse("document has no w:body element".to_string()))?;

        let mut doc = Document::default();
        self.extract_blocks(body, &mut doc);
        Ok(doc)
    }

    fn extract_blocks(&self, parent: Node<'_, '_>, output: &mut Document) {
        for child in parent.children().filter(is_wml) {
            match child.tag_name().name() {
                "p" => output.paragraphs.push(self.extract_paragraph(child)),
                "sdt" => {
                    if let Some(sdt_content) = wml(child, "sdtContent") {
                        self.extract_blocks(sdt_content, output);
                    }
                }
                "tbl" => log::warn!("skipping table: tables are not converted"),
                _ => {}
            }
        }
    }

    fn extract_paragraph(&self, node: Node<'_, '_>) -> Paragraph {
        let style_name = wml(node, "pPr")
            .and_then(|p| wml_attr(p, "pStyle"))
            .map(|id| self.styles.display_name(id).to_string());

        let style = style_name
            .as_deref()
            .map(ParagraphStyle::from_style_name)
            .unwrap_or_default();

        let mut runs = Vec::new();
        let mut field_stack = Vec::new();
        self.collect_runs(node, &mut field_stack, &mut runs);

        Paragraph {
            style,
            style_name,
            runs,
        }
    }

    /// Collects runs in document order, descending into inline containers.
    fn collect_runs(
        &self,
        parent: Node<'_, '_>,
        field_stack: &mut Vec<FieldPhase>,
        runs: &mut Vec<Run>,
    ) {
        for child in parent.children().filter(is_wml) {
            match child.tag_name().name() {
                "r" => {
                    if let Some(run) = self.extract_run(child, field_stack) {
                        runs.push(run);
                    }
                }
                "hyperlink" | "ins" | "smartTag" | "fldSimple" | "customXml" => {
                    self.collect_runs(child, field_stack, runs)
                }
                "sdt" => {
                    if let Some(sdt_content) = wml(child, "sdtContent") {
                        self.collect_runs(sdt_content, field_stack, runs);
                    }
                }
                // w:del, bookmarks, proofing marks
                _ => {}
            }
        }
    }

    fn extract_run(&self, node: Node<'_, '_>, field_stack: &mut Vec<FieldPhase>) -> Option<Run> {
        let mut text = String::new();

        for child in node.children().filter(is_wml) {
            match child.tag_name().name() {
                "fldChar" => match child.attribute((WML_NS, "fldCharType")) {
                    Some("begin") => field_stack.push(FieldPhase::Instruction),
                    Some("separate") => {
                        if let Some(last) = field_stack.last_mut() {
                            *last = FieldPhase::Result;
                        }
                    }
                    Some("end") => {
                        let _ = field_stack.pop();
                    }
                    _ => {}
                },
                // Field instructions are never rendered.
                "instrText" | "delInstrText" => {}
                _ if field_stack.last() == Some(&FieldPhase::Instruction) => {}
                "t" => text.push_str(child.text().unwrap_or_default()),
                "tab" => text.push('\t'),
                "br" | "cr" => text.push('\n'),
                "noBreakHyphen" => text.push('-'),
                _ => {}
            }
        }

        if text.is_empty() {
            return None;
        }

        let rpr = wml(node, "rPr");
        let direct = rpr.map(CharacterFlags::from_rpr).unwrap_or_default();
        let run_style_id = rpr.and_then(|n| wml_attr(n, "rStyle"));
        let flags = self.styles.resolve_run_flags(&direct, run_style_id);

        Some(Run {
            text,
            italic: flags.italic.unwrap_or(false),
            bold: flags.bold.unwrap_or(false),
            underline: flags.underline.unwrap_or(false),
            vertical_align: flags.vertical_align.unwrap_or_default(),
        })
    }
}
