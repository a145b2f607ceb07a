//! Readers that turn source files into the document model.

pub mod docx;
