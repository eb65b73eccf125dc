//! Fixed-width textual progress bars with a centered percentage.
//!
//! A bar of width `W` for a fraction `f` is `round(f * W)` fill glyphs followed
//! by placeholder glyphs, with the label `NN%` cut into the middle of it. The
//! label replaces bar glyphs instead of being appended, so every bar is exactly
//! `W` characters wide:
//!
//! ```text
//! ========50%.........
//! ```
//!
//! Bars narrower than [`MIN_BAR_WIDTH`] cannot hold the label, so widths are
//! clamped to it. This matters when many parts share a small column budget.

/// Smallest bar width that still fits the percentage label.
pub const MIN_BAR_WIDTH: usize = 5;

/// Label drawn when the expected size is unknown.
const INDETERMINATE_LABEL: &str = "--%";

/// Width of each part's bar when `parts` bars share `budget` columns.
///
/// The result is never below `min_width` (itself never below [`MIN_BAR_WIDTH`]).
pub fn bar_width(budget: usize, parts: usize, min_width: usize) -> usize {
    let min_width = min_width.max(MIN_BAR_WIDTH);
    budget.checked_div(parts).unwrap_or(budget).max(min_width)
}

/// Integer percentage of a fraction, `floor(f * 100)`.
///
/// Prefer [`percent_of`] when the byte counts are at hand: `0.57 * 100.0` is
/// `56.99999999999999` in floating point.
pub fn percent(fraction: f64) -> u32 {
    (clamp_fraction(fraction) * 100.0).floor() as u32
}

/// Integer percentage of `observed` out of `expected` bytes, or `None` when the
/// expected size is unknown or zero.
///
/// Never reaches 100 before `observed` does.
///
/// ```rust
/// use dlwatch::progress::percent_of;
///
/// assert_eq!(percent_of(57, Some(100)), Some(57));
/// assert_eq!(percent_of(999_999_999_999, Some(1_000_000_000_000)), Some(99));
/// assert_eq!(percent_of(10, None), None);
/// ```
pub fn percent_of(observed: u64, expected: Option<u64>) -> Option<u32> {
    match expected {
        Some(expected) if expected > 0 => {
            let observed = observed.min(expected) as u128;
            Some((observed * 100 / expected as u128) as u32)
        }
        _ => None,
    }
}

/// Render a bar for `fraction` complete, or an indeterminate bar for `None`.
///
/// ```rust
/// use dlwatch::progress::render_bar;
///
/// assert_eq!(render_bar(Some(0.5), 20, '=', '.'), "========50%.........");
/// assert_eq!(render_bar(None, 10, '=', '.'), "...--%....");
/// ```
pub fn render_bar(fraction: Option<f64>, width: usize, fill: char, placeholder: char) -> String {
    let progress = fraction.map(|fraction| {
        let fraction = clamp_fraction(fraction);
        (fraction, percent(fraction))
    });
    draw(progress, width, fill, placeholder)
}

/// Render a bar for `observed` out of `expected` bytes.
///
/// The label comes from [`percent_of`], so a part one byte short of its target
/// reads `99%` even when the fill rounds up to the full width.
///
/// ```rust
/// use dlwatch::progress::render_byte_bar;
///
/// assert_eq!(render_byte_bar(500, Some(1_000), 20, '=', '.'), "========50%.........");
/// assert_eq!(render_byte_bar(7, None, 10, '=', '.'), "...--%....");
/// ```
pub fn render_byte_bar(
    observed: u64,
    expected: Option<u64>,
    width: usize,
    fill: char,
    placeholder: char,
) -> String {
    let progress = percent_of(observed, expected).zip(expected).map(|(percent, expected)| {
        let fraction = observed.min(expected) as f64 / expected as f64;
        (fraction, percent)
    });
    draw(progress, width, fill, placeholder)
}

fn draw(progress: Option<(f64, u32)>, width: usize, fill: char, placeholder: char) -> String {
    let width = width.max(MIN_BAR_WIDTH);

    let (filled, label) = match progress {
        Some((fraction, percent)) => {
            let filled = ((fraction * width as f64).round() as usize).min(width);
            (filled, format!("{percent:02}%"))
        }
        None => (0, INDETERMINATE_LABEL.to_string()),
    };

    let mut glyphs: Vec<char> = std::iter::repeat(fill)
        .take(filled)
        .chain(std::iter::repeat(placeholder).take(width - filled))
        .collect();

    // The label ends right after the midpoint; a longer label grows leftwards.
    let label: Vec<char> = label.chars().collect();
    let end = (width / 2 + 1).max(label.len()).min(width);
    let start = end - label.len();
    glyphs[start..end].copy_from_slice(&label);

    glyphs.into_iter().collect()
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
