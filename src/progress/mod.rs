//! Progress line rendering and display.
//!
//! # Overview
//!
//! The progress module is organized into four components:
//!
//! - `bar` - Fixed-width bars with a centered percentage
//! - `frame` - Composition of the whole progress line from a session
//! - `style` - Glyphs, widths and visibility options
//! - `display` - Terminal output of frames and report lines
//!
//! # Examples
//!
//! ## Rendering a Bar
//!
//! ```rust
//! use dlwatch::progress::{bar_width, render_bar};
//!
//! // 4 parts share an 80 column budget.
//! let width = bar_width(80, 4, 5);
//! assert_eq!(width, 20);
//! assert_eq!(render_bar(Some(0.0), width, '=', '.'), "........00%.........");
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use dlwatch::progress::StyleOptions;
//!
//! let style = StyleOptions::default()
//!     .with_bar_chars('█', '░')
//!     .with_single_bar_width(30);
//! assert_eq!(style.single_bar_width(), 30);
//! ```

pub(crate) mod bar;
pub(crate) mod display;
pub(crate) mod frame;
pub(crate) mod style;

pub use bar::{bar_width, percent, percent_of, render_bar, render_byte_bar, MIN_BAR_WIDTH};
pub use display::ProgressDisplay;
pub use frame::{megabytes_per_sec, render_frame};
pub use style::StyleOptions;
