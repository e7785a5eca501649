//! Core types for the calendar layout engine

use chrono::NaiveDate;

use super::CalendarConfig;

/// Number of day rows in the grid
pub const DAYS_PER_WEEK: u32 = 7;

/// Color band for a contribution count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// No contributions
    Neutral,
    /// Below the medium threshold
    Low,
    /// Between the medium and high thresholds
    Medium,
    /// At or above the high threshold
    High,
}

impl Tier {
    /// Classify a count using the thresholds in `config`
    pub fn from_count(count: u32, config: &CalendarConfig) -> Self {
        if count == 0 {
            Tier::Neutral
        } else if count >= config.high_threshold {
            Tier::High
        } else if count >= config.medium_threshold {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

/// A single day cell placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub date: NaiveDate,
    pub count: u32,
    /// Week column index, 0..=52
    pub week: u32,
    /// Day row index, 0..=6
    pub day_of_week: u32,
    pub tier: Tier,
    /// Pixel position of the cell's top-left corner
    pub x: u32,
    pub y: u32,
}

/// Label anchor for the first week-start cell of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthMarker {
    /// Pixel x of the anchor cell
    pub x: u32,
    /// Zero-based month index, 0 = January
    pub month: usize,
}

/// The computed layout for one calendar year
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarLayout {
    /// One cell per date of the year, ascending
    pub cells: Vec<Cell>,
    /// At most one marker per month, ascending x
    pub month_markers: Vec<MonthMarker>,
    /// Document width in pixels
    pub width: u32,
    /// Document height in pixels
    pub height: u32,
}
