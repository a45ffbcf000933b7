//! The structuring pipeline: raw assistant reply → ordered typed blocks.
//!
//! Citation stripping runs first, then paragraph segmentation, then the rule
//! chain from [`crate::rules`]. Total over all inputs: an unrecognized
//! paragraph falls through to a highlighted [`ContentBlock::Paragraph`], and
//! whitespace-only paragraphs are dropped rather than emitted empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::ContentBlock;
use crate::citation::strip_citations;
use crate::rules::{rules, to_paragraph};

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph break regex"));

/// Split cleaned text on blank-line boundaries into trimmed, non-empty
/// paragraphs, source order preserved.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Classify one trimmed paragraph with the first matching rule.
pub fn classify(paragraph: &str) -> ContentBlock {
    match rules().iter().find(|rule| (rule.matches)(paragraph)) {
        Some(rule) => (rule.apply)(paragraph),
        None => to_paragraph(paragraph),
    }
}

/// Structure a raw assistant reply into renderable blocks.
///
/// Pure and deterministic; never fails. Blocks come out in the same relative
/// order as their source paragraphs.
pub fn structure(raw: &str) -> Vec<ContentBlock> {
    let cleaned = strip_citations(raw);
    split_paragraphs(&cleaned).into_iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Span;

    #[test]
    fn citation_then_timeline() {
        let blocks = structure("[1] Crime rates rose in 2024.");
        assert_eq!(
            blocks,
            vec![ContentBlock::timeline_entry("Crime rates rose in 2024.")]
        );
    }

    #[test]
    fn heading_then_plain_paragraph() {
        let blocks = structure("Key Findings:\n\nSomething happened.");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ContentBlock::heading("Key Findings"));
        assert_eq!(
            blocks[1],
            ContentBlock::paragraph(vec![Span::plain("Something happened.")])
        );
    }

    #[test]
    fn bullet_paragraph() {
        let blocks = structure("• arrest made\n• gang dismantled");
        assert_eq!(
            blocks,
            vec![ContentBlock::bullet_list(vec![
                "arrest made".into(),
                "gang dismantled".into(),
            ])]
        );
    }

    #[test]
    fn table_row_wins_over_timeline() {
        let raw = "Name | Date | Status\nJohn | 2024 | Open";
        let blocks = structure(raw);
        assert_eq!(blocks, vec![ContentBlock::table_row(raw)]);
    }

    #[test]
    fn statistic_paragraph() {
        let blocks = structure("42 arrests were made this year.");
        assert_eq!(
            blocks,
            vec![ContentBlock::stat_block("42 arrests were made this year.")]
        );
    }

    #[test]
    fn fallback_highlights_vocabulary() {
        let blocks = structure("There was a Crime Research investigation into fraud.");
        assert_eq!(
            blocks,
            vec![ContentBlock::paragraph(vec![
                Span::plain("There was a "),
                Span::highlighted("Crime Research"),
                Span::plain(" "),
                Span::highlighted("investigation"),
                Span::plain(" into "),
                Span::highlighted("fraud"),
                Span::plain("."),
            ])]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_no_blocks() {
        assert!(structure("").is_empty());
        assert!(structure("  \n\n   \n\n").is_empty());
    }

    #[test]
    fn whitespace_only_paragraphs_are_dropped() {
        let blocks = structure("First fact.\n\n   \n\nSecond fact.");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn one_block_per_paragraph() {
        let raw = "Heading one:\n\n• a\n• b\n\nplain text\n\n12 cases closed";
        let blocks = structure(raw);
        assert_eq!(blocks.len(), split_paragraphs(raw).len());
    }

    #[test]
    fn order_is_preserved() {
        let raw = "Alpha note.\n\nBeta note.\n\nGamma note.";
        let texts: Vec<String> = structure(raw).iter().map(|b| b.plain_text()).collect();
        assert_eq!(texts, vec!["Alpha note.", "Beta note.", "Gamma note."]);
    }

    #[test]
    fn citations_cannot_block_a_rule() {
        // Without stripping, the bracketed digits would let the statistic
        // rule fire on a paragraph that has no standalone number of its own.
        let blocks = structure("No new cases were reported.[4]");
        assert!(matches!(&blocks[0], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn welcome_message_structures_like_the_dashboard_greeting() {
        let raw = "Welcome to the Crime Research Assistant:\n\n\
                   I can help you with:\n\n\
                   • Crime trend analysis and statistics\n\
                   • Timeline of significant crime events\n\
                   • Geographic crime patterns\n\n\
                   What would you like to know?";
        let blocks = structure(raw);
        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks[0],
            ContentBlock::heading("Welcome to the Crime Research Assistant")
        );
        assert_eq!(blocks[1], ContentBlock::heading("I can help you with"));
        assert!(matches!(&blocks[2], ContentBlock::BulletList { items } if items.len() == 3));
        assert!(matches!(&blocks[3], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn three_or_more_newlines_still_split() {
        let blocks = structure("First.\n\n\n\nSecond.");
        assert_eq!(blocks.len(), 2);
    }
}
