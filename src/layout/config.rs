//! Configuration for the calendar layout engine

/// Configuration options for calendar layout computation
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Side length of a day cell in pixels
    pub cell_size: u32,

    /// Gap between adjacent cells
    pub padding: u32,

    /// Horizontal offset of the grid from the document origin
    pub x_offset: u32,

    /// Vertical offset of the grid, leaving room for month labels
    pub y_offset: u32,

    /// Margin added to the right and bottom document edges
    pub margin: u32,

    /// Nominal number of week columns in a year
    pub weeks: u32,

    /// Counts at or above this value are medium tier
    pub medium_threshold: u32,

    /// Counts at or above this value are high tier
    pub high_threshold: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            padding: 2,
            x_offset: 10,
            y_offset: 20,
            margin: 10,
            weeks: 53,
            medium_threshold: 5,
            high_threshold: 10,
        }
    }
}

impl CalendarConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal and vertical distance between cell origins
    pub fn day_pitch(&self) -> u32 {
        self.cell_size + self.padding
    }

    /// Set the cell size
    pub fn with_cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
        self
    }

    /// Set the gap between cells
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the grid offsets from the document origin
    pub fn with_offsets(mut self, x_offset: u32, y_offset: u32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Set the document edge margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the tier thresholds (counts at or above each value)
    pub fn with_thresholds(mut self, medium: u32, high: u32) -> Self {
        self.medium_threshold = medium;
        self.high_threshold = high;
        self
    }
}
