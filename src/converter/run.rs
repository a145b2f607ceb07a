//! Run formatter - wraps run text in LaTeX text-formatting commands.

use super::ConversionContext;
use crate::core::model::{Run, VerticalAlign};
use crate::render::escape_latex;

/// Converter for Run elements.
pub struct RunConverter;

type Wrap = (fn(&Run) -> bool, &'static str);

/// Applied in order, innermost first.
const WRAPS: [Wrap; 5] = [
    (is_superscript, "textsuperscript"),
    (is_subscript, "textsubscript"),
    (is_italic, "emph"),
    (is_bold, "textbf"),
    (is_underline, "underline"),
];

fn is_superscript(run: &Run) -> bool {
    run.vertical_align == VerticalAlign::Superscript
}

fn is_subscript(run: &Run) -> bool {
    run.vertical_align == VerticalAlign::Subscript
}

fn is_italic(run: &Run) -> bool {
    run.italic
}

fn is_bold(run: &Run) -> bool {
    run.bold
}

fn is_underline(run: &Run) -> bool {
    run.underline
}

/// `\command{text}`
pub fn wrap(command: &str, text: &str) -> String {
    format!("\\{}{{{}}}", command, text)
}

impl RunConverter {
    /// Converts a Run to LaTeX text with formatting.
    pub fn convert(run: &Run, context: &ConversionContext<'_>) -> String {
        if run.text.is_empty() {
            return String::new();
        }

        let text = if context.escape_special_chars() {
            escape_latex(&run.text)
        } else {
            run.text.clone()
        };

        WRAPS
            .iter()
            .filter(|(applies, _)| applies(run))
            .fold(text, |inner, (_, command)| wrap(command, &inner))
    }

    /// Concatenates the formatted runs with no separator.
    pub fn convert_all(runs: &[Run], context: &ConversionContext<'_>) -> String {
        runs.iter()
            .map(|run| Self::convert(run, context))
            .collect()
    }
}
