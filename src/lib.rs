//! Contrib Calendar - GitHub-style contribution calendars as SVG
//!
//! This library turns a JSON map of ISO date to contribution count into an
//! SVG calendar grid: one rounded rectangle per day, color-banded by count,
//! with month labels above the first week of each month.
//!
//! The pipeline has two stages: a fallible input stage
//! ([`ContributionRecord::from_json_str`]) and a pure, infallible core
//! ([`render`]) that always produces a full-year grid.
//!
//! # Example
//!
//! ```rust
//! use contrib_calendar::render_json;
//!
//! let svg = render_json(r#"{"2024-01-01": 3}"#, 2024).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod input;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use input::{ContributionRecord, InputError};
pub use layout::{CalendarConfig, CalendarLayout, Cell, MonthMarker, Tier};
pub use palette::{Palette, PaletteError};
pub use renderer::{render_svg, SvgConfig, MONTH_NAMES};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while parsing or validating input data
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Error while loading a palette
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Grid geometry and tier thresholds
    pub calendar: CalendarConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Tier color palette
    pub palette: Palette,
    /// Debug mode: print the computed layout to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calendar configuration
    pub fn with_calendar(mut self, config: CalendarConfig) -> Self {
        self.calendar = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the tier color palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a contribution record to SVG with default configuration
///
/// Pure and deterministic: identical input yields byte-identical output, and
/// an empty record yields a full grid of neutral cells.
pub fn render(record: &ContributionRecord, year: i32) -> String {
    render_with_config(record, year, &RenderConfig::default())
}

/// Render a contribution record to SVG with custom configuration
pub fn render_with_config(record: &ContributionRecord, year: i32, config: &RenderConfig) -> String {
    // Compute layout
    let layout = layout::compute(record, year, &config.calendar);

    // Debug output
    if config.debug {
        eprintln!("=== Calendar Layout Debug ===");
        eprintln!(
            "year={} cells={} markers={} document={}x{}",
            year,
            layout.cells.len(),
            layout.month_markers.len(),
            layout.width,
            layout.height
        );
        for marker in &layout.month_markers {
            eprintln!("  {} at x={}", MONTH_NAMES[marker.month], marker.x);
        }
        eprintln!("=============================");
    }

    // Generate SVG
    render_svg(&layout, &config.calendar, &config.svg, &config.palette)
}

/// Parse a JSON data string and render it with default configuration
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use contrib_calendar::render_json;
///
/// let svg = render_json(r#"{"2024-06-15": 12}"#, 2024).unwrap();
/// assert!(svg.contains(r#"data-level="12""#));
/// ```
pub fn render_json(source: &str, year: i32) -> Result<String, RenderError> {
    render_json_with_config(source, year, &RenderConfig::default())
}

/// Parse a JSON data string and render it with custom configuration
pub fn render_json_with_config(
    source: &str,
    year: i32,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let record = ContributionRecord::from_json_str(source)?;
    Ok(render_with_config(&record, year, config))
}
