//! Converter modules for DOCX to LaTeX transformation.

mod author;
mod context;
mod paragraph;
mod run;

use crate::adapters::docx::{DocumentReader, DocxReader};
use crate::core::ast::DocumentAst;
use crate::core::model::Document;
use crate::render::{LatexRenderer, Renderer};
use crate::{ConvertOptions, Error, Result};
use std::io::Write;
use std::path::Path;

pub use self::author::{AuthorBlock, AuthorEntry};
pub use self::context::ConversionContext;
pub use self::paragraph::{ParagraphConverter, BEGIN_DOCUMENT, SUPPLEMENT_START};
pub use self::run::RunConverter;

/// Main converter struct that orchestrates DOCX to LaTeX conversion.
pub struct DocxToLatex {
    options: ConvertOptions,
}

impl DocxToLatex {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Converts a DOCX file to LaTeX.
    ///
    /// # Arguments
    /// * `path` - Path to the DOCX file
    ///
    /// # Returns
    /// The complete LaTeX document as a String.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        check_input(path)?;

        let document = DocxReader.read(path)?;
        self.convert_document(&document)
    }

    /// Converts a DOCX file and writes the LaTeX document to `out`.
    pub fn convert_to_writer<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<()> {
        let latex = self.convert(path)?;
        out.write_all(latex.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Renders an already loaded document. Depends only on `document`.
    pub fn convert_document(&self, document: &Document) -> Result<String> {
        let ast = self.build_ast(document);
        LatexRenderer::new(&self.options.template).render(&ast)
    }

    /// Maps every paragraph to its markup block, in source order.
    pub fn build_ast(&self, document: &Document) -> DocumentAst {
        let mut context = ConversionContext::new(&self.options);
        let mut ast = DocumentAst::default();

        for para in &document.paragraphs {
            let markup = ParagraphConverter::convert(para, &mut context);
            log::debug!(
                "{:?} paragraph (style {:?}) -> {} bytes",
                para.style,
                para.style_name.as_deref().unwrap_or("<none>"),
                markup.len()
            );
            ast.push(para.style, markup);
        }

        if !context.document_begun() {
            log::warn!("no Abstract paragraph found; \\begin{{document}} was not emitted");
        }
        if context.supplement_resets() > 1 {
            log::warn!(
                "supplement numbering reset emitted {} times",
                context.supplement_resets()
            );
        }

        ast
    }
}

/// Checks the input preconditions: the path ends in `docx` and exists.
pub fn check_input(path: &Path) -> Result<()> {
    // Literal suffix check on the whole path, so `report.mydocx` passes.
    if !path.to_string_lossy().ends_with("docx") {
        return Err(Error::NotDocx(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}
