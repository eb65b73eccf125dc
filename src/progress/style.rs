//! Progress line styling and layout options.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use dlwatch::progress::StyleOptions;
//!
//! // `=` for received bytes, `.` for the rest, an 80 column budget.
//! let style = StyleOptions::default();
//! assert_eq!(style.bar_budget(), 80);
//! ```
//!
//! ## Custom Glyphs
//!
//! ```rust
//! use dlwatch::progress::StyleOptions;
//!
//! let style = StyleOptions::default()
//!     .with_bar_chars('#', '-')
//!     .with_spinner(StyleOptions::SPINNER_DOTS);
//! assert_eq!(style.fill(), '#');
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use dlwatch::progress::StyleOptions;
//!
//! let style = StyleOptions::hidden();
//! assert!(!style.is_enabled());
//! ```

use super::bar::MIN_BAR_WIDTH;

/// Define the progress line style options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    /// Draw the progress line and report lines to stdout.
    pub(crate) enabled: bool,
    /// Glyph for the received part of a bar.
    pub(crate) fill: char,
    /// Glyph for the missing part of a bar.
    pub(crate) placeholder: char,
    /// Spinner glyphs, one per tick in rotation.
    pub(crate) spinner: Vec<char>,
    /// Total number of bar columns shared by every part of a multi-part transfer.
    pub(crate) bar_budget: usize,
    /// Bar width of a single-stream transfer.
    pub(crate) single_bar_width: usize,
    /// Smallest bar width ever drawn.
    pub(crate) min_bar_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            fill: '=',
            placeholder: '.',
            spinner: StyleOptions::SPINNER_CLASSIC.chars().collect(),
            bar_budget: 80,
            single_bar_width: 20,
            min_bar_width: MIN_BAR_WIDTH,
        }
    }
}

impl StyleOptions {
    /// Rotating line spinner: `/-\|`.
    pub const SPINNER_CLASSIC: &'static str = "/-\\|";
    /// Braille dots spinner.
    pub const SPINNER_DOTS: &'static str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

    /// Create style options which draw nothing.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..StyleOptions::default()
        }
    }

    /// Set the fill and placeholder glyphs of the bars.
    pub fn with_bar_chars(mut self, fill: char, placeholder: char) -> Self {
        self.fill = fill;
        self.placeholder = placeholder;
        self
    }

    /// Set the spinner glyphs. An empty string keeps the current spinner.
    pub fn with_spinner(mut self, glyphs: &str) -> Self {
        if !glyphs.is_empty() {
            self.spinner = glyphs.chars().collect();
        }
        self
    }

    /// Set the column budget shared by the bars of a multi-part transfer.
    pub fn with_bar_budget(mut self, budget: usize) -> Self {
        self.bar_budget = budget;
        self
    }

    /// Set the bar width used for a single-stream transfer.
    pub fn with_single_bar_width(mut self, width: usize) -> Self {
        self.single_bar_width = width;
        self
    }

    /// Set the smallest bar width. Values below [`MIN_BAR_WIDTH`] are raised to it.
    pub fn with_min_bar_width(mut self, width: usize) -> Self {
        self.min_bar_width = width.max(MIN_BAR_WIDTH);
        self
    }

    /// Set to `false` to draw nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Return `false` if the progress line is hidden.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Glyph for the completed part of a bar.
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Glyph for the remaining part of a bar.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Columns shared by the bars of a multi-part transfer.
    pub fn bar_budget(&self) -> usize {
        self.bar_budget
    }

    /// Width of the bar of a single-stream transfer.
    pub fn single_bar_width(&self) -> usize {
        self.single_bar_width
    }

    /// Smallest width any bar is drawn with, never below [`MIN_BAR_WIDTH`].
    pub fn min_bar_width(&self) -> usize {
        self.min_bar_width
    }

    /// Spinner glyph for the given tick.
    pub fn spinner_glyph(&self, tick: usize) -> char {
        match self.spinner.len() {
            0 => '/',
            len => self.spinner[tick % len],
        }
    }
}
