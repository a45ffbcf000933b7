//! Terminal output helpers — dual-mode: styled text for humans, structured
//! JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for case listings
//! - `indicatif` for the chat spinner

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use casetrace_client::CrimeCase;
use casetrace_core::{ContentBlock, Span};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
}

fn emit_json(level: &str, message: &str) {
    let msg = Msg { level, message };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

/// Print a machine-readable payload (pretty JSON on stdout).
pub fn payload(value: &JsonValue) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{value}"),
    }
}

// ── Status helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text);
    } else {
        eprintln!("{} {}", style("!").yellow(), text);
    }
}

/// Spinner while waiting on the backend; suppressed in JSON mode.
pub fn spinner(message: &str) -> Option<ProgressBar> {
    if is_json() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

// ── Structured-response rendering ──────────────────────────────────

/// Render structured blocks to the terminal, one visual treatment per
/// variant. Text mode only; JSON mode serializes the blocks instead.
pub fn render_blocks(blocks: &[ContentBlock]) {
    for block in blocks {
        match block {
            ContentBlock::Heading { text } => {
                println!();
                println!("{}", style(text).bold().cyan().underlined());
            }
            ContentBlock::BulletList { items } => {
                for item in items {
                    println!("  {} {}", style("•").dim(), item);
                }
            }
            ContentBlock::TableRow { raw_text } => {
                println!("  {}", style(raw_text).dim());
            }
            ContentBlock::TimelineEntry { text } => {
                println!("{} {}", style("[timeline]").red(), text);
            }
            ContentBlock::StatBlock { text } => {
                println!("{} {}", style("[stat]").green(), text);
            }
            ContentBlock::Paragraph { spans } => {
                println!("{}", span_line(spans));
            }
        }
    }
}

fn span_line(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.highlighted {
                style(&span.text).yellow().bold().to_string()
            } else {
                span.text.clone()
            }
        })
        .collect()
}

/// List the reply's source URLs under the structured blocks.
pub fn sources(urls: &[String]) {
    if urls.is_empty() {
        return;
    }
    println!();
    println!("{}", style("Sources").bold());
    for url in urls {
        println!("  {} {}", style("→").dim(), style(url).dim());
    }
}

// ── Case listings ──────────────────────────────────────────────────

pub fn cases_table(cases: &[CrimeCase]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID"),
            Cell::new("Type"),
            Cell::new("Location"),
            Cell::new("Occurred"),
            Cell::new("Status"),
            Cell::new("Severity"),
        ]);

    for case in cases {
        table.add_row(vec![
            Cell::new(&case.crime_id),
            Cell::new(&case.crime_type),
            Cell::new(format!("{}, {}", case.city, case.country)),
            Cell::new(&case.date_occurred),
            Cell::new(case.current_status.as_str()),
            Cell::new(case.case_details.severity_level.as_str()),
        ]);
    }

    println!("{table}");
}
