//! # docx2tex
//!
//! DOCX to LaTeX converter for the Scientific Reports (`wlscirep`) journal
//! template. Paragraph styles (`Title`, `Author`, `Abstract`, `Heading 1`,
//! `Heading 2`) select the markup; every other paragraph passes through.
//!
//! ## Example
//!
//! ```no_run
//! use docx2tex::{ConvertOptions, DocxToLatex};
//!
//! let options = ConvertOptions {
//!     reset_supplement_once: true,
//!     ..Default::default()
//! };
//!
//! let converter = DocxToLatex::new(options);
//! let latex = converter.convert("paper.docx").unwrap();
//! println!("{}", latex);
//! ```

pub mod adapters;
pub mod converter;
pub mod core;
pub mod error;
pub mod render;

pub use crate::core::model::{Document, Paragraph, ParagraphStyle, Run, VerticalAlign};
pub use adapters::docx::{DocumentReader, DocxReader};
pub use converter::DocxToLatex;
pub use error::{Error, Result};

/// Marker phrase that turns a section heading into the start of the supplement.
pub const DEFAULT_SUPPLEMENT_MARKER: &str = "Supplementary Information";

/// Options for DOCX to LaTeX conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Document class, class options and packages of the emitted preamble.
    pub template: TemplateOptions,
    /// Section headings containing this phrase get a page break and a
    /// `\beginsupplement` call in front of them.
    pub supplement_marker: String,
    /// Emit the supplement reset only before the first matching heading
    /// instead of before every one.
    pub reset_supplement_once: bool,
    /// Whether to escape LaTeX special characters in run text.
    pub escape_special_chars: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            template: TemplateOptions::default(),
            supplement_marker: DEFAULT_SUPPLEMENT_MARKER.to_string(),
            reset_supplement_once: false,
            escape_special_chars: false,
        }
    }
}

/// Journal template used for the preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Name passed to `\documentclass`.
    pub document_class: String,
    /// Options in the `\documentclass[...]` brackets.
    pub class_options: Vec<String>,
    /// One `\usepackage` line per entry, in order.
    pub packages: Vec<String>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            document_class: "wlscirep".to_string(),
            class_options: vec!["fleqn".to_string(), "10pt".to_string()],
            packages: vec![
                "graphicx".to_string(),
                "amsmath".to_string(),
                "lineno".to_string(),
            ],
        }
    }
}
