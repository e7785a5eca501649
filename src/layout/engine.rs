//! Calendar layout computation
//!
//! Maps a year of contribution counts onto a week-by-day grid. The grid is
//! filled sequentially from January 1: index `i` lands in week `i / 7`,
//! row `i % 7`. The first day of the year is not aligned to its real-world
//! weekday, so column 0 always starts with January 1.

use chrono::{Datelike, NaiveDate};

use crate::input::ContributionRecord;

use super::{CalendarConfig, CalendarLayout, Cell, MonthMarker, Tier, DAYS_PER_WEEK};

/// Compute the cell grid and month markers for `year`
///
/// Every date of the year produces exactly one cell; dates absent from the
/// record count as 0, and record entries outside `year` are ignored. An empty
/// record yields a full neutral grid rather than an error.
pub fn compute(record: &ContributionRecord, year: i32, config: &CalendarConfig) -> CalendarLayout {
    let pitch = config.day_pitch();
    let grid_width = config.weeks * pitch + config.x_offset + config.margin;
    let height = DAYS_PER_WEEK * pitch + config.y_offset + config.margin;

    let mut cells = Vec::with_capacity(366);
    let mut month_markers: Vec<MonthMarker> = Vec::new();
    let mut marked_months = [false; 12];

    // Years outside chrono's representable range lay out as an empty grid.
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return CalendarLayout {
            cells,
            month_markers,
            width: grid_width,
            height,
        };
    };

    for (i, date) in start
        .iter_days()
        .take_while(|d| d.year() == year)
        .enumerate()
    {
        let i = i as u32;
        let week = i / DAYS_PER_WEEK;
        let day_of_week = i % DAYS_PER_WEEK;
        let x = config.x_offset + week * pitch;
        let y = config.y_offset + day_of_week * pitch;

        let month = date.month0() as usize;
        if day_of_week == 0 && !marked_months[month] {
            month_markers.push(MonthMarker { x, month });
            marked_months[month] = true;
        }

        let count = record.get(date);
        cells.push(Cell {
            date,
            count,
            week,
            day_of_week,
            tier: Tier::from_count(count, config),
            x,
            y,
        });
    }

    // Markers are pushed in date order and therefore already x-ascending;
    // the stable sort is a no-op guard.
    month_markers.sort_by_key(|m| m.x);

    let label_extent = month_markers
        .last()
        .map(|m| m.x + config.cell_size + config.margin)
        .unwrap_or(config.x_offset);

    CalendarLayout {
        cells,
        month_markers,
        width: grid_width.max(label_extent),
        height,
    }
}
