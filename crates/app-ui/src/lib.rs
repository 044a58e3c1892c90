//! User interface helpers for the companion apps
//!
//! Widget theming lives in each app; this crate carries the color
//! arithmetic they share for server-provided brand colors.
//!
//! # Example
//!
//! ```rust
//! use app_ui::colors::{null_safe_color, foreground_for_background, Color};
//!
//! let primary = null_safe_color(Some("#0082C9"), Color::BLACK);
//! assert_eq!(foreground_for_background(primary), Color::WHITE);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;

pub use colors::{
    adjust_opacity, foreground_for_background, is_dark_background, null_safe_color, parse_color,
    set_lightness, text_color, to_hex_string, Color, ColorError, Hsl,
};
