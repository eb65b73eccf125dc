//! Composition of the single progress line drawn on every tick.
//!
//! A single stream renders as
//!
//! ```text
//! [/]  debian.iso  [========50%.........](1.00 MB)  0.52 MB/s
//! ```
//!
//! and a multi-part transfer as a header followed by one bar per part (here
//! with a 20 column budget)
//!
//! ```text
//! [-]  debian.iso  (200 bytes of 400 bytes)  0.00 MB/s [===50%....] 0.00 MB/s [===50%....] 0.00 MB/s
//! ```

use super::bar::render_byte_bar;
use super::style::StyleOptions;
use crate::session::{PartState, Session};
use crate::utils::format_bytes;

const UNKNOWN_SIZE: &str = "unknown size";

/// Render the progress line of `session` with the given spinner glyph.
pub fn render_frame(session: &Session, spinner: char, style: &StyleOptions) -> String {
    let totals = session.totals();

    if !session.is_multi_part() {
        let bar = session
            .parts()
            .first()
            .map(|part| part_bar(part, style))
            .unwrap_or_default();
        return format!(
            "[{}]  {}  [{}]({})  {:.2} MB/s",
            spinner,
            session.name(),
            bar,
            expected_size(totals.expected),
            megabytes_per_sec(totals.rate),
        );
    }

    let mut line = format!(
        "[{}]  {}  ({} of {})  {:.2} MB/s",
        spinner,
        session.name(),
        format_bytes(totals.observed),
        expected_size(totals.expected),
        megabytes_per_sec(totals.rate),
    );
    for part in session.parts() {
        line.push_str(&format!(
            " [{}] {:.2} MB/s",
            part_bar(part, style),
            megabytes_per_sec(part.rate())
        ));
    }
    line
}

/// Convert bytes per second to decimal megabytes per second.
pub fn megabytes_per_sec(rate: u64) -> f64 {
    rate as f64 / 1_000_000.0
}

fn part_bar(part: &PartState, style: &StyleOptions) -> String {
    render_byte_bar(
        part.observed(),
        part.expected(),
        part.bar_width(),
        style.fill(),
        style.placeholder(),
    )
}

fn expected_size(expected: Option<u64>) -> String {
    match expected {
        Some(bytes) if bytes > 0 => format_bytes(bytes),
        _ => UNKNOWN_SIZE.to_string(),
    }
}
