mod archive;
mod extractor;
mod styles;
mod xml;

use crate::core::model::Document;
use crate::Result;
use std::io::{Read, Seek};
use std::path::Path;

pub use archive::DocxPackage;
pub use extractor::DocxExtractor;
pub use styles::{CharacterFlags, StyleResolver};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Source of a paragraph-level document model.
pub trait DocumentReader {
    fn read(&self, path: &Path) -> Result<Document>;
}

/// Reads `.docx` packages.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<Document> {
        log::debug!("opening DOCX package {}", path.display());
        let package = DocxPackage::open(path)?;
        self.read_package(package)
    }
}

impl DocxReader {
    /// Reads a DOCX package from any seekable byte source.
    pub fn read_from<R: Read + Seek>(&self, reader: R) -> Result<Document> {
        self.read_package(DocxPackage::from_reader(reader)?)
    }

    fn read_package<R: Read + Seek>(&self, mut package: DocxPackage<R>) -> Result<Document> {
        let document_xml = package.require_part(DOCUMENT_PART)?;
        let style_resolver = match package.read_part(STYLES_PART)? {
            Some(styles_xml) => StyleResolver::from_xml(&styles_xml)?,
            None => {
                log::debug!("{} not present, style names fall back to ids", STYLES_PART);
                StyleResolver::default()
            }
        };

        let document = DocxExtractor::new(&style_resolver).extract(&document_xml)?;
        log::debug!("read {} paragraphs", document.paragraphs.len());
        Ok(document)
    }
}
