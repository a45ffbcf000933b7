//! Reference-citation stripping.
//!
//! The backend appends bracketed footnote markers (`[1]`, sometimes chained
//! as `[2][5]`) to the reply text. They are removed before any classification
//! so a marker can never trigger or block a rule.

use once_cell::sync::Lazy;
use regex::Regex;

static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\[\d+\])+").expect("citation regex"));

/// Remove every run of consecutive bracketed-integer markers from `raw`.
pub fn strip_citations(raw: &str) -> String {
    CITATION.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_marker() {
        assert_eq!(
            strip_citations("[1] Crime rates rose in 2024."),
            " Crime rates rose in 2024."
        );
    }

    #[test]
    fn strips_chained_markers() {
        assert_eq!(strip_citations("fraud ring dismantled[2][5]."), "fraud ring dismantled.");
    }

    #[test]
    fn strips_markers_mid_sentence() {
        assert_eq!(
            strip_citations("Dubai Police[3] confirmed the arrest[12] today."),
            "Dubai Police confirmed the arrest today."
        );
    }

    #[test]
    fn leaves_non_numeric_brackets_alone() {
        assert_eq!(strip_citations("see [appendix] and [a1]"), "see [appendix] and [a1]");
    }

    #[test]
    fn idempotent() {
        let raw = "Cases fell[1][2] in March[7].";
        let once = strip_citations(raw);
        assert_eq!(strip_citations(&once), once);
    }
}
