//! SVG renderer for generating output from calendar layouts
//!
//! This module takes a CalendarLayout and produces an SVG string
//! with a stable attribute contract for downstream styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, MONTH_NAMES};
