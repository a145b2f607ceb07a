use crate::core::model::ParagraphStyle;

/// Converted document: one block per source paragraph, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<Block>,
}

/// Markup produced for a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub style: ParagraphStyle,
    pub markup: String,
}

impl DocumentAst {
    pub fn push(&mut self, style: ParagraphStyle, markup: String) {
        self.blocks.push(Block { style, markup });
    }
}
