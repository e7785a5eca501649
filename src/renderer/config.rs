//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration for standalone files
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// CSS class applied to every day cell
    pub day_class: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            day_class: "ContributionCalendar-day".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class for day cells
    pub fn with_day_class(mut self, class: impl Into<String>) -> Self {
        self.day_class = class.into();
        self
    }
}
