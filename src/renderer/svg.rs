//! SVG generation from calendar layouts

use crate::layout::{CalendarConfig, CalendarLayout, Cell};
use crate::palette::Palette;

use super::SvgConfig;

/// English month abbreviations for label text, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    cells: Vec<String>,
    labels: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            cells: vec![],
            labels: vec![],
        }
    }

    fn indent(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one day rectangle
    ///
    /// The attribute set is a stable contract for downstream styling and
    /// tooling: geometry, `rx`/`ry` corners, `fill`, the day class, and
    /// `data-date`/`data-level` carrying the source date and count.
    pub fn add_day_cell(&mut self, cell: &Cell, size: u32, fill: &str) {
        self.cells.push(format!(
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="2" ry="2" fill="{}" data-date="{}" data-level="{}"/>"#,
            self.config.day_class, cell.x, cell.y, size, size, fill, cell.date, cell.count
        ));
    }

    /// Add a month label centered above its anchor cell
    pub fn add_month_label(&mut self, text: &str, x: f64, y: u32, fill: &str) {
        self.labels.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="10">{}</text>"#,
            x,
            y,
            fill,
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: u32, height: u32) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // Responsive root scaled by viewBox
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
            width, height
        ));
        svg.push_str(nl);

        svg.push_str(&self.indent(1));
        svg.push_str(r#"<g transform="translate(0, 0)">"#);
        svg.push_str(nl);

        for cell in &self.cells {
            svg.push_str(&self.indent(2));
            svg.push_str(cell);
            svg.push_str(nl);
        }

        for label in &self.labels {
            svg.push_str(&self.indent(2));
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str(&self.indent(1));
        svg.push_str("</g>");
        svg.push_str(nl);

        svg.push_str("</svg>");

        svg
    }
}

/// Render a CalendarLayout to an SVG string
pub fn render_svg(
    layout: &CalendarLayout,
    calendar: &CalendarConfig,
    config: &SvgConfig,
    palette: &Palette,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for cell in &layout.cells {
        builder.add_day_cell(cell, calendar.cell_size, palette.color_for(cell.tier));
    }

    // Labels sit in the band above the grid.
    let label_y = calendar.y_offset.saturating_sub(5);
    for marker in &layout.month_markers {
        let center_x = marker.x as f64 + calendar.cell_size as f64 / 2.0;
        builder.add_month_label(MONTH_NAMES[marker.month], center_x, label_y, &palette.label);
    }

    builder.build(layout.width, layout.height)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ContributionRecord;
    use crate::layout;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_day_cell_attributes() {
        let calendar = CalendarConfig::default();
        let layout = layout::compute(&ContributionRecord::default(), 2024, &calendar);

        let mut builder = SvgBuilder::new(SvgConfig::default());
        builder.add_day_cell(&layout.cells[0], calendar.cell_size, "#e1e4e8");

        assert_eq!(
            builder.cells[0],
            r##"<rect class="ContributionCalendar-day" x="10" y="20" width="10" height="10" rx="2" ry="2" fill="#e1e4e8" data-date="2024-01-01" data-level="0"/>"##
        );
    }

    #[test]
    fn test_month_label_element() {
        let mut builder = SvgBuilder::new(SvgConfig::default());
        builder.add_month_label("Jan", 15.0, 15, "#333");

        assert_eq!(
            builder.labels[0],
            r##"<text x="15" y="15" text-anchor="middle" fill="#333" font-size="10">Jan</text>"##
        );
    }

    #[test]
    fn test_build_root_element() {
        let builder = SvgBuilder::new(SvgConfig::default());
        let svg = builder.build(656, 114);

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"viewBox="0 0 656 114""#));
        assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));
        assert!(svg.contains(r#"<g transform="translate(0, 0)">"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_standalone_declaration() {
        let builder = SvgBuilder::new(SvgConfig::new().with_standalone(true));
        let svg = builder.build(100, 100);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let calendar = CalendarConfig::default();
        let layout = layout::compute(&ContributionRecord::default(), 2024, &calendar);
        let config = SvgConfig::new().with_pretty_print(false);
        let svg = render_svg(&layout, &calendar, &config, &Palette::default());

        assert!(!svg.contains('\n'));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_full_year() {
        let calendar = CalendarConfig::default();
        let layout = layout::compute(&ContributionRecord::default(), 2024, &calendar);
        let svg = render_svg(&layout, &calendar, &SvgConfig::default(), &Palette::default());

        assert_eq!(svg.matches("<rect").count(), 366);
        assert_eq!(svg.matches("<text").count(), 12);
        assert!(svg.contains(">Jan</text>"));
        assert!(svg.contains(">Dec</text>"));
    }
}
