//! Author and affiliation lines of the title block.
//!
//! An `Author` paragraph is either a single affiliation, written as a
//! superscript number followed by the institution, or a comma-separated list
//! of names each followed by superscript affiliation numbers. The parser
//! works on the already formatted paragraph text, so the superscripts show up
//! as `\textsuperscript{...}` markers.

use lazy_static::lazy_static;
use regex::Regex;

pub const SUPERSCRIPT_OPEN: &str = "\\textsuperscript{";

lazy_static! {
    /// Closing brace of a superscript followed by a comma, with an optional
    /// LaTeX thin space after it.
    static ref AUTHOR_DELIMITER: Regex =
        Regex::new(r"\},(?:\\,)?").expect("author delimiter pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorBlock {
    /// `\affil[number]{text}`
    Affiliation { number: String, text: String },
    /// One `\author[affiliations]{name}` per entry.
    Authors(Vec<AuthorEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub name: String,
    /// Comma-joined affiliation numbers, possibly empty.
    pub affiliations: String,
}

impl AuthorBlock {
    /// Parses formatted author text. Empty text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        if let Some(rest) = text.strip_prefix(SUPERSCRIPT_OPEN) {
            return Some(Self::parse_affiliation(text, rest));
        }

        let authors = AUTHOR_DELIMITER
            .split(text)
            .filter_map(|chunk| {
                if chunk.trim().is_empty() {
                    log::warn!("empty author entry in {:?}", text);
                    return None;
                }
                Some(AuthorEntry::parse(chunk))
            })
            .collect();

        Some(Self::Authors(authors))
    }

    fn parse_affiliation(text: &str, rest: &str) -> Self {
        match rest.split_once('}') {
            Some((number, affiliation)) => Self::Affiliation {
                number: number.trim().to_string(),
                text: affiliation.trim().to_string(),
            },
            None => {
                log::warn!("unterminated superscript in affiliation {:?}", text);
                Self::Affiliation {
                    number: rest.trim().to_string(),
                    text: String::new(),
                }
            }
        }
    }

    pub fn to_latex(&self) -> String {
        match self {
            Self::Affiliation { number, text } => format!("\\affil[{}]{{{}}}\n", number, text),
            Self::Authors(authors) => authors
                .iter()
                .map(|a| format!("\\author[{}]{{{}}}\n", a.affiliations, a.name))
                .collect(),
        }
    }
}

impl AuthorEntry {
    fn parse(chunk: &str) -> Self {
        let mut parts = chunk.split(SUPERSCRIPT_OPEN);
        let name = parts.next().unwrap_or_default().trim_start().to_string();
        let affiliations = parts
            .map(|token| {
                let token = token.trim_end();
                token.strip_suffix('}').unwrap_or(token)
            })
            .collect::<Vec<_>>()
            .join(",");

        if affiliations.is_empty() {
            log::warn!("author {:?} has no affiliation numbers", name);
        }

        Self { name, affiliations }
    }
}
