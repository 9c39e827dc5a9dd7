//! Rendering of a single day's activity into a block element.

use super::date::format_date;

// == Activity Cell ==
/// One day of contribution activity as read from the upstream grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCell {
    /// Activity level bucket, 0..=4 in well-formed documents
    pub level: u8,
    /// Raw contribution count attribute
    pub count: String,
    /// ISO `YYYY-MM-DD` date attribute
    pub date: String,
}

impl ActivityCell {
    /// Creates a cell from the three per-day attributes.
    pub fn new(level: u8, count: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            level,
            count: count.into(),
            date: date.into(),
        }
    }

    /// Human-readable contribution phrase for the accessibility label.
    fn phrase(&self) -> String {
        match self.count.as_str() {
            "0" => "No contributions".to_string(),
            "1" => "1 contribution".to_string(),
            n => format!("{} contributions", n),
        }
    }

    /// Renders the cell as a fixed 10x10 block.
    ///
    /// The level only selects a CSS class; out-of-range levels render with
    /// a class the stylesheet does not color rather than failing.
    pub fn render(&self) -> String {
        format!(
            "<div class=\"commitscrape-block commitscrape-{}\" \
             style=\"width:10px;height:10px;margin-bottom:3px;margin-right:3px;\" \
             data-count=\"{}\" data-date=\"{}\" aria-label=\"{} on {}\"></div>",
            self.level,
            self.count,
            self.date,
            self.phrase(),
            format_date(&self.date),
        )
    }
}
