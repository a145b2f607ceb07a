//! Paragraph converter - maps a paragraph style to template markup.

use super::author::AuthorBlock;
use super::{ConversionContext, RunConverter};
use crate::core::model::{Paragraph, ParagraphStyle};

/// Opens the document body right after the abstract.
pub const BEGIN_DOCUMENT: &str = "\\begin{document}\n\\flushbottom\n\\maketitle\n\\thispagestyle{empty}\n";

/// Placed in front of a supplementary section heading.
pub const SUPPLEMENT_START: &str = "\\clearpage\n\\beginsupplement\n";

/// Converter for Paragraph elements.
pub struct ParagraphConverter;

impl ParagraphConverter {
    /// Converts a Paragraph to LaTeX. The result is empty or ends in a newline.
    pub fn convert(para: &Paragraph, context: &mut ConversionContext<'_>) -> String {
        let text = RunConverter::convert_all(&para.runs, context);

        match para.style {
            ParagraphStyle::Title => format!("\\title{{{}}}\n", text),
            ParagraphStyle::Author => AuthorBlock::parse(&text)
                .map(|block| block.to_latex())
                .unwrap_or_default(),
            ParagraphStyle::Abstract => Self::convert_abstract(&text, context),
            ParagraphStyle::Section => Self::convert_section(&text, context),
            ParagraphStyle::Subsection => format!("\\subsection*{{{}}}\n", text),
            ParagraphStyle::Body => format!("{}\n", text),
        }
    }

    fn convert_abstract(text: &str, context: &mut ConversionContext<'_>) -> String {
        let mut output = format!("\\begin{{abstract}}\n{}\n\\end{{abstract}}\n", text);
        if context.begin_document() {
            output.push_str(BEGIN_DOCUMENT);
        } else {
            log::warn!("additional Abstract paragraph after the document body began");
        }
        output
    }

    fn convert_section(text: &str, context: &mut ConversionContext<'_>) -> String {
        let section = format!("\\section*{{{}}}\n", text);
        if context.is_supplement_heading(&section) && context.take_supplement_reset() {
            log::debug!("supplement numbering reset before {:?}", text);
            return format!("{}{}", SUPPLEMENT_START, section);
        }
        section
    }
}
