use crate::ConvertOptions;

/// Context passed through conversion for emission state.
pub struct ConversionContext<'a> {
    options: &'a ConvertOptions,
    document_begun: bool,
    supplement_resets: usize,
}

impl<'a> ConversionContext<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            document_begun: false,
            supplement_resets: 0,
        }
    }

    /// Marks the document body as started. Returns `false` if it already was.
    pub fn begin_document(&mut self) -> bool {
        !std::mem::replace(&mut self.document_begun, true)
    }

    pub fn document_begun(&self) -> bool {
        self.document_begun
    }

    /// Whether `section` (already wrapped) opens the supplementary material.
    pub fn is_supplement_heading(&self, section: &str) -> bool {
        let marker = self.options.supplement_marker.as_str();
        !marker.is_empty() && section.contains(marker)
    }

    /// Records a supplement numbering reset. Returns `false` when the reset
    /// should be suppressed because one was already emitted in once-only mode.
    pub fn take_supplement_reset(&mut self) -> bool {
        if self.options.reset_supplement_once && self.supplement_resets > 0 {
            return false;
        }
        self.supplement_resets += 1;
        true
    }

    pub fn supplement_resets(&self) -> usize {
        self.supplement_resets
    }

    pub fn escape_special_chars(&self) -> bool {
        self.options.escape_special_chars
    }
}
