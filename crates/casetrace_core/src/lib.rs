//! casetrace-core — response structuring for the crime-research assistant.
//!
//! The chat backend returns one flat string per assistant turn. This crate
//! reclassifies its paragraphs into semantically distinct blocks (headings,
//! bullet lists, table rows, timeline entries, statistic callouts,
//! highlighted prose) that a renderer maps to visual styles.
//!
//! The whole pipeline is a pure function of the input string:
//!
//! ```
//! use casetrace_core::{structure, ContentBlock};
//!
//! let blocks = structure("Key Findings:\n\n42 arrests were made this year.");
//! assert!(matches!(blocks[0], ContentBlock::Heading { .. }));
//! assert!(matches!(blocks[1], ContentBlock::StatBlock { .. }));
//! ```

pub mod block;
pub mod citation;
pub mod highlight;
pub mod rules;
pub mod structurer;

pub use block::{ContentBlock, Span};
pub use citation::strip_citations;
pub use highlight::highlight_terms;
pub use structurer::{classify, split_paragraphs, structure};
