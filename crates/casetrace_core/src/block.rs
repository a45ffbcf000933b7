use serde::{Deserialize, Serialize};

/// One classified, renderable unit of a structured response.
///
/// Blocks are emitted in source-paragraph order; every variant except
/// [`ContentBlock::Paragraph`] carries plain text with no embedded markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Section header extracted from a line.
    Heading { text: String },
    /// Cleaned list items, order preserved from the source paragraph.
    BulletList { items: Vec<String> },
    /// Pipe-delimited line kept verbatim; the renderer treats it as opaque
    /// tabular content and must not re-split it.
    TableRow { raw_text: String },
    /// Paragraph referencing a date or a named time period.
    TimelineEntry { text: String },
    /// Paragraph citing a numeric crime statistic.
    StatBlock { text: String },
    /// Prose split into spans so the renderer never parses markup.
    Paragraph { spans: Vec<Span> },
}

/// A run of paragraph text, either plain or highlighted domain vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            highlighted: true,
        }
    }
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn bullet_list(items: Vec<String>) -> Self {
        ContentBlock::BulletList { items }
    }

    pub fn table_row(raw_text: impl Into<String>) -> Self {
        ContentBlock::TableRow {
            raw_text: raw_text.into(),
        }
    }

    pub fn timeline_entry(text: impl Into<String>) -> Self {
        ContentBlock::TimelineEntry { text: text.into() }
    }

    pub fn stat_block(text: impl Into<String>) -> Self {
        ContentBlock::StatBlock { text: text.into() }
    }

    pub fn paragraph(spans: Vec<Span>) -> Self {
        ContentBlock::Paragraph { spans }
    }

    /// The block's text with structure and highlighting stripped.
    ///
    /// Concatenating `plain_text` over a structured response reconstructs the
    /// original paragraphs in order (modulo the stripped list glyphs).
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Heading { text }
            | ContentBlock::TimelineEntry { text }
            | ContentBlock::StatBlock { text } => text.clone(),
            ContentBlock::BulletList { items } => items.join("\n"),
            ContentBlock::TableRow { raw_text } => raw_text.clone(),
            ContentBlock::Paragraph { spans } => {
                spans.iter().map(|s| s.text.as_str()).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let block = ContentBlock::heading("Key Findings");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["text"], "Key Findings");
    }

    #[test]
    fn paragraph_serializes_spans() {
        let block = ContentBlock::paragraph(vec![
            Span::plain("a "),
            Span::highlighted("gang"),
        ]);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["spans"][1]["highlighted"], true);
    }

    #[test]
    fn plain_text_joins_list_items() {
        let block = ContentBlock::bullet_list(vec!["one".into(), "two".into()]);
        assert_eq!(block.plain_text(), "one\ntwo");
    }

    #[test]
    fn plain_text_concatenates_spans() {
        let block = ContentBlock::paragraph(vec![
            Span::plain("an "),
            Span::highlighted("arrest"),
            Span::plain(" was made"),
        ]);
        assert_eq!(block.plain_text(), "an arrest was made");
    }
}
