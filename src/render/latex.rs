use crate::core::ast::DocumentAst;
use crate::render::Renderer;
use crate::{Result, TemplateOptions};

/// Defines `\beginsupplement`: restarts table and figure numbering as S1, S2, ...
pub const SUPPLEMENT_MACRO: &str = "\\newcommand{\\beginsupplement}{%
  \\setcounter{table}{0}%
  \\renewcommand{\\thetable}{S\\arabic{table}}%
  \\setcounter{figure}{0}%
  \\renewcommand{\\thefigure}{S\\arabic{figure}}%
}
";

const END_DOCUMENT: &str = "\\end{document}\n";

#[derive(Debug, Clone, Copy)]
pub struct LatexRenderer<'a> {
    template: &'a TemplateOptions,
}

impl<'a> LatexRenderer<'a> {
    pub fn new(template: &'a TemplateOptions) -> Self {
        Self { template }
    }

    /// Document class, packages and the supplement macro, then a blank line.
    pub fn preamble(&self) -> String {
        let mut out = String::new();

        if self.template.class_options.is_empty() {
            out.push_str(&format!("\\documentclass{{{}}}\n", self.template.document_class));
        } else {
            out.push_str(&format!(
                "\\documentclass[{}]{{{}}}\n",
                self.template.class_options.join(","),
                self.template.document_class
            ));
        }

        for package in &self.template.packages {
            out.push_str(&format!("\\usepackage{{{}}}\n", package));
        }

        out.push_str(SUPPLEMENT_MACRO);
        out.push('\n');
        out
    }
}

impl Renderer for LatexRenderer<'_> {
    fn render(&self, document: &DocumentAst) -> Result<String> {
        let mut out = self.preamble();

        for block in &document.blocks {
            out.push_str(&block.markup);
            out.push('\n');
        }

        out.push_str(END_DOCUMENT);
        Ok(out)
    }
}
