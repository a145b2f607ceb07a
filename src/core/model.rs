//! Source document model: paragraphs with a style and formatted runs.

/// Ordered paragraphs of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph tagged with the style it was written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    /// Display name of the paragraph style (or its id when no name is known).
    pub style_name: Option<String>,
    pub runs: Vec<Run>,
}

/// Paragraph styles that map to dedicated template markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    Title,
    Author,
    Abstract,
    /// "Heading 1"
    Section,
    /// "Heading 2"
    Subsection,
    #[default]
    Body,
}

impl ParagraphStyle {
    /// Classifies a style name such as `Title`, `Heading 1` or `heading1`.
    pub fn from_style_name(name: &str) -> Self {
        let name_lower = name.trim().to_lowercase();

        if let Some(rest) = name_lower.strip_prefix("heading") {
            return match rest.trim().parse::<usize>() {
                Ok(1) => Self::Section,
                Ok(2) => Self::Subsection,
                _ => Self::Body,
            };
        }

        match name_lower.as_str() {
            "title" => Self::Title,
            "author" => Self::Author,
            "abstract" => Self::Abstract,
            _ => Self::Body,
        }
    }
}

/// Vertical position of a run. Sub- and superscript are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

/// A span of text sharing one set of formatting flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
    pub vertical_align: VerticalAlign,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn superscript(mut self) -> Self {
        self.vertical_align = VerticalAlign::Superscript;
        self
    }

    pub fn subscript(mut self) -> Self {
        self.vertical_align = VerticalAlign::Subscript;
        self
    }

    /// Sets both script flags; superscript takes precedence.
    pub fn with_scripts(mut self, subscript: bool, superscript: bool) -> Self {
        self.vertical_align = if superscript {
            VerticalAlign::Superscript
        } else if subscript {
            VerticalAlign::Subscript
        } else {
            VerticalAlign::Baseline
        };
        self
    }
}

impl Paragraph {
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Appends a run (builder style).
    pub fn push(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Appends an unformatted run.
    pub fn push_text(self, text: impl Into<String>) -> Self {
        self.push(Run::new(text))
    }

    /// Raw text of all runs without formatting.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
