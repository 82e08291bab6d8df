//! CLI output formatting.
//!
//! A normal build is silent. With `--verbose`, each written thumbnail gets a
//! diagnostic line with the source path and the final dimensions:
//!
//! ```text
//! content/ramen/miso/thumbnail.jpg [400]x[400]
//! ```
//!
//! `check` always prints the plan for every source:
//!
//! ```text
//! 001 shoyu_zurich
//!     Source: content/ramen/shoyu_zurich/thumbnail.jpg
//!     Resize: 400x800
//!     Crop: (0, 244)-(400, 644)
//!     Output: content/ramen/shoyu_zurich/thumbnail_small.jpg
//!
//! Planned 1 thumbnail
//! ```
//!
//! # Architecture
//!
//! Format functions return `Vec<String>` and are pure, no I/O. The `print_*`
//! wrappers write to stdout.

use crate::imaging::ThumbnailParams;
use crate::process::{Mode, ProcessEvent, ProcessResult};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// One-line diagnostic for a written thumbnail.
fn diagnostic_line(params: &ThumbnailParams) -> String {
    format!(
        "{} [{}]x[{}]",
        params.source.display(),
        params.crop.size,
        params.crop.size
    )
}

/// Indented plan block for one source.
fn plan_lines(index: usize, identifier: &str, params: &ThumbnailParams) -> Vec<String> {
    let (x1, y1) = params.crop.end();
    vec![
        format!("{} {}", format_index(index), identifier),
        format!("    Source: {}", params.source.display()),
        format!("    Resize: {}x{}", params.resize_width, params.resize_height),
        format!(
            "    Crop: ({}, {})-({}, {})",
            params.crop.x, params.crop.y, x1, y1
        ),
        format!("    Output: {}", params.output.display()),
    ]
}

/// Format a single progress event as display lines.
///
/// Written thumbnails only produce output in verbose mode; planned ones
/// always do.
pub fn format_process_event(event: &ProcessEvent, verbose: bool) -> Vec<String> {
    match event {
        ProcessEvent::ThumbnailWritten { params, .. } => {
            if verbose {
                vec![diagnostic_line(params)]
            } else {
                Vec::new()
            }
        }
        ProcessEvent::ThumbnailPlanned {
            index,
            identifier,
            params,
        } => plan_lines(*index, identifier, params),
    }
}

/// Closing summary line(s) for a batch.
pub fn format_summary(result: &ProcessResult, verbose: bool) -> Vec<String> {
    let n = result.thumbnails.len();
    match result.mode {
        Mode::Write if verbose => vec![format!("Wrote {} thumbnail{}", n, plural(n))],
        Mode::Write => Vec::new(),
        Mode::DryRun => vec![String::new(), format!("Planned {} thumbnail{}", n, plural(n))],
    }
}

pub fn print_process_event(event: &ProcessEvent, verbose: bool) {
    for line in format_process_event(event, verbose) {
        println!("{}", line);
    }
}

pub fn print_summary(result: &ProcessResult, verbose: bool) {
    for line in format_summary(result, verbose) {
        println!("{}", line);
    }
}
