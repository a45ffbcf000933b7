//! Ordered classification rules for response paragraphs.
//!
//! Each rule is an independent predicate + transform pair; the first rule
//! whose predicate matches owns the paragraph. Precedence matters: a table
//! row about a 2024 incident must not fire the timeline rule, and a heading
//! ending in a number must not be read as a statistic. The chain ends with a
//! catch-all that turns anything left over into a highlighted paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::ContentBlock;
use crate::highlight::highlight_terms;

/// One classification rule: a predicate over a trimmed paragraph and the
/// transform applied when it is the first to match.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub apply: fn(&str) -> ContentBlock,
}

static RULES: [Rule; 6] = [
    Rule {
        name: "bullet_list",
        matches: is_bullet_list,
        apply: to_bullet_list,
    },
    Rule {
        name: "table_row",
        matches: is_table_row,
        apply: to_table_row,
    },
    Rule {
        name: "timeline_entry",
        matches: is_timeline_entry,
        apply: to_timeline_entry,
    },
    Rule {
        name: "stat_block",
        matches: is_stat_block,
        apply: to_stat_block,
    },
    Rule {
        name: "heading",
        matches: is_heading,
        apply: to_heading,
    },
    Rule {
        name: "paragraph",
        matches: |_| true,
        apply: to_paragraph,
    },
];

/// The rules in precedence order. The last rule matches every paragraph.
pub fn rules() -> &'static [Rule] {
    &RULES
}

// ── bullet list ────────────────────────────────────────────────────

static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*]\s").expect("bullet regex"));

fn is_bullet_list(paragraph: &str) -> bool {
    paragraph.contains('•') || BULLET_LINE.is_match(paragraph)
}

fn to_bullet_list(paragraph: &str) -> ContentBlock {
    let items = paragraph
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '•' | '-' | '*'))
                .trim()
                .to_string()
        })
        .collect();
    ContentBlock::bullet_list(items)
}

// ── table row ──────────────────────────────────────────────────────

fn is_table_row(paragraph: &str) -> bool {
    paragraph.contains('|') && paragraph.split('|').count() >= 3
}

fn to_table_row(paragraph: &str) -> ContentBlock {
    ContentBlock::table_row(paragraph)
}

// ── timeline entry ─────────────────────────────────────────────────

// Any pipe means the paragraph is table-shaped; the timeline rule stands down
// even when the table rule itself did not fire.
static TIMELINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(20\d{2}|January|February|March|April|May|June|July|August|September|October|November|December|Ramadan|Eid)\b",
    )
    .expect("timeline regex")
});

fn is_timeline_entry(paragraph: &str) -> bool {
    !paragraph.contains('|') && TIMELINE.is_match(paragraph)
}

fn to_timeline_entry(paragraph: &str) -> ContentBlock {
    ContentBlock::timeline_entry(paragraph)
}

// ── statistic block ────────────────────────────────────────────────

// A standalone number followed anywhere later in the paragraph by a count
// keyword. Deliberately permissive: no distance bound, and (?s) lets the
// pair straddle single line breaks inside the paragraph.
static STATISTIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\b\d+\b.*\b(members|cases|arrests|crimes|incidents|reports)\b")
        .expect("statistic regex")
});

fn is_stat_block(paragraph: &str) -> bool {
    STATISTIC.is_match(paragraph)
}

fn to_stat_block(paragraph: &str) -> ContentBlock {
    ContentBlock::stat_block(paragraph)
}

// ── heading ────────────────────────────────────────────────────────

static HEADING_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(The latest|Recent|Current|Notable|Key|Important|Welcome)")
        .expect("heading regex")
});

static ENUMERATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s").expect("enumerated heading regex"));

fn is_heading(paragraph: &str) -> bool {
    paragraph.ends_with(':') || HEADING_LEAD.is_match(paragraph)
}

fn to_heading(paragraph: &str) -> ContentBlock {
    let text = paragraph.strip_suffix(':').unwrap_or(paragraph);
    let text = ENUMERATED.replace(text, "${1} ");
    ContentBlock::heading(text.into_owned())
}

// ── fallback paragraph ─────────────────────────────────────────────

pub(crate) fn to_paragraph(paragraph: &str) -> ContentBlock {
    ContentBlock::paragraph(highlight_terms(paragraph))
}
