mod escape;
mod latex;

use crate::core::ast::DocumentAst;
use crate::Result;

pub use escape::escape_latex;
pub use latex::{LatexRenderer, SUPPLEMENT_MACRO};

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> Result<String>;
}
