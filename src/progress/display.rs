//! Terminal output of the progress line and report lines.
//!
//! This module provides the [`ProgressDisplay`] struct which owns the live line.
//! Each tick replaces the line with a fresh frame; indicatif takes care of the
//! carriage return and rewrite. Notices are printed above the line so they
//! never interleave with a half-drawn frame. On finish the live line is cleared
//! and the final frame and report are printed in that order.
//!
//! # Examples
//!
//! ```rust
//! use dlwatch::progress::{ProgressDisplay, StyleOptions};
//!
//! let display = ProgressDisplay::new(&StyleOptions::hidden());
//! display.println("Downloading file.zip ...");
//! display.draw("[/]  file.zip  [=====...]");
//! display.finish("[/]  file.zip  [========]", "Downloaded file.zip successfully !");
//! ```

use crate::progress::StyleOptions;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Template drawing nothing but the frame itself.
const FRAME_TEMPLATE: &str = "{msg}";

/// Progress line manager.
pub struct ProgressDisplay {
    /// The line; hidden when the style is disabled.
    line: ProgressBar,
    /// Whether output was requested at all.
    enabled: bool,
}

impl ProgressDisplay {
    /// Create a display drawing to stdout, or a silent one for a hidden style.
    pub fn new(style_options: &StyleOptions) -> Self {
        if !style_options.is_enabled() {
            return Self {
                line: ProgressBar::hidden(),
                enabled: false,
            };
        }

        Self::with_draw_target(ProgressDrawTarget::stdout())
    }

    /// Create a display drawing to `target`.
    ///
    /// When the target is hidden, for example stdout that is not a terminal,
    /// notices and the closing lines are still printed with `println!`.
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(FRAME_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let line = ProgressBar::with_draw_target(None, target).with_style(style);

        Self {
            line,
            enabled: true,
        }
    }

    /// Whether nothing is printed at all.
    pub fn is_hidden(&self) -> bool {
        !self.enabled
    }

    /// Replace the live line with `frame`.
    pub fn draw(&self, frame: impl Into<String>) {
        self.line.set_message(frame.into());
    }

    /// Replace the live line with `frame` for good, then print `report` below it.
    pub fn finish(&self, frame: impl AsRef<str>, report: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        if self.line.is_hidden() {
            println!("{}", frame.as_ref());
            println!("{}", report.as_ref());
            return;
        }
        // A cleared bar is not redrawn under printed lines.
        self.line.finish_and_clear();
        self.line.println(frame);
        self.line.println(report);
    }

    /// Print a full line above the live line.
    ///
    /// When stdout is not a terminal indicatif draws nothing, but report lines
    /// are still printed.
    pub fn println(&self, line: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        if self.line.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.line.println(line);
        }
    }
}
