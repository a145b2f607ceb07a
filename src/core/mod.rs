//! Document model read from DOCX and the block list produced from it.

pub mod ast;
pub mod model;
