//! Style resolver - style display names and character-style inheritance.

use super::xml::{wml, wml_attr, wml_toggle, WML_NS};
use crate::core::model::VerticalAlign;
use crate::Result;
use roxmltree::Node;
use std::collections::{HashMap, HashSet};

/// Run formatting flags as written in one `w:rPr`. `None` means "not set here".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterFlags {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub vertical_align: Option<VerticalAlign>,
}

impl CharacterFlags {
    pub(crate) fn from_rpr(rpr: Node<'_, '_>) -> Self {
        let underline = wml(rpr, "u").map(|u| {
            u.attribute((WML_NS, "val")).map_or(true, |v| v != "none")
        });

        let vertical_align = wml_attr(rpr, "vertAlign").map(|v| match v {
            "superscript" => VerticalAlign::Superscript,
            "subscript" => VerticalAlign::Subscript,
            _ => VerticalAlign::Baseline,
        });

        Self {
            bold: wml_toggle(rpr, "b"),
            italic: wml_toggle(rpr, "i"),
            underline,
            vertical_align,
        }
    }

    /// Returns a new flag set where `overlay` overrides `self`.
    pub fn merge(self, overlay: &CharacterFlags) -> CharacterFlags {
        CharacterFlags {
            bold: overlay.bold.or(self.bold),
            italic: overlay.italic.or(self.italic),
            underline: overlay.underline.or(self.underline),
            vertical_align: overlay.vertical_align.or(self.vertical_align),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct StyleDef {
    name: Option<String>,
    base: Option<String>,
    character: CharacterFlags,
}

/// Resolver for DOCX styles and inheritance.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    style_map: HashMap<String, StyleDef>,
}

impl StyleResolver {
    /// Builds the resolver from the `word/styles.xml` part.
    pub fn from_xml(styles_xml: &str) -> Result<Self> {
        let xml = roxmltree::Document::parse(styles_xml)?;
        let mut style_map = HashMap::new();

        for style in xml
            .root_element()
            .children()
            .filter(|n| n.has_tag_name((WML_NS, "style")))
        {
            let Some(style_id) = style.attribute((WML_NS, "styleId")) else {
                continue;
            };
            let def = StyleDef {
                name: wml_attr(style, "name").map(str::to_string),
                base: wml_attr(style, "basedOn").map(str::to_string),
                character: wml(style, "rPr")
                    .map(CharacterFlags::from_rpr)
                    .unwrap_or_default(),
            };
            style_map.insert(style_id.to_string(), def);
        }

        Ok(Self { style_map })
    }

    /// Display name of a style (`Heading1` -> `heading 1`), or the id itself
    /// when the style sheet does not define it.
    pub fn display_name<'s>(&'s self, style_id: &'s str) -> &'s str {
        match self.style_map.get(style_id).and_then(|s| s.name.as_deref()) {
            Some(name) => name,
            None => {
                log::debug!("style id {:?} has no name in the style sheet", style_id);
                style_id
            }
        }
    }

    /// Resolves the effective character flags for a run.
    ///
    /// Hierarchy (highest priority first):
    /// 1. Direct formatting on the run (rPr)
    /// 2. Character style applied to the run (rStyle) and its ancestors
    ///
    /// Paragraph style formatting is not inherited.
    pub fn resolve_run_flags(
        &self,
        direct: &CharacterFlags,
        run_style_id: Option<&str>,
    ) -> CharacterFlags {
        let mut merged = CharacterFlags::default();

        if let Some(rid) = run_style_id {
            for style in self.style_chain(rid).into_iter().rev() {
                merged = merged.merge(&style.character);
            }
        }

        merged.merge(direct)
    }

    /// Style chain from leaf to root, stopping at unknown ids and cycles.
    fn style_chain(&self, style_id: &str) -> Vec<&StyleDef> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current_id = Some(style_id);

        while let Some(id) = current_id {
            if !seen.insert(id) {
                log::warn!("style {:?} inherits from itself", id);
                break;
            }
            let Some(style) = self.style_map.get(id) else {
                break;
            };
            chain.push(style);
            current_id = style.base.as_deref();
        }

        chain
    }
}
