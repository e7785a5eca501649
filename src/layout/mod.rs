//! Layout engine mapping contribution counts to grid geometry
//!
//! This module is the pure core of the crate: given a validated
//! [`ContributionRecord`](crate::input::ContributionRecord) and a year it
//! produces a [`CalendarLayout`] describing every day cell and month label
//! anchor, ready for SVG emission.

pub mod config;
pub mod engine;
pub mod types;

pub use config::CalendarConfig;
pub use engine::compute;
pub use types::{CalendarLayout, Cell, MonthMarker, Tier, DAYS_PER_WEEK};
