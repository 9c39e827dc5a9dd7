//! Extraction of the day-cell grid from a fetched profile document.

use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};

use super::cell::ActivityCell;

/// Days grouped into one rendered column.
pub const DAYS_PER_WEEK: usize = 7;

/// One week of cells, ordered oldest day first.
pub type Column = Vec<ActivityCell>;

const CALENDAR_SELECTOR: &str = "div.js-calendar-graph";
const DAY_CELL_SELECTOR: &str = "div.js-calendar-graph svg rect";

/// Maps the upstream palette fill onto an activity level, for document
/// versions that carry `fill` instead of a numeric `data-level`.
fn level_from_fill(fill: &str) -> u8 {
    match fill {
        "var(--color-calendar-graph-day-bg)" => 0,
        "var(--color-calendar-graph-day-L1-bg)" => 1,
        "var(--color-calendar-graph-day-L2-bg)" => 2,
        "var(--color-calendar-graph-day-L3-bg)" => 3,
        "var(--color-calendar-graph-day-L4-bg)" => 4,
        _ => 0,
    }
}

/// Parses the fetched document and groups its day cells into weekly columns.
///
/// Cells are visited in document order and grouped by `index / 7` into an
/// ordered map, so the returned columns are in ascending index order no
/// matter how they were accumulated. The activity level is read from
/// `data-level` when present, falling back to the `fill` palette lookup.
///
/// A document without the calendar container is rejected; a present
/// container with no cells yields an empty column list.
pub fn extract_columns(document: &str) -> Result<Vec<Column>> {
    let doc = Html::parse_document(document);

    let calendar = Selector::parse(CALENDAR_SELECTOR).expect("calendar selector");
    if doc.select(&calendar).next().is_none() {
        return Err(ScrapeError::MalformedCalendar);
    }

    let day_cells = Selector::parse(DAY_CELL_SELECTOR).expect("day-cell selector");
    let mut columns: BTreeMap<usize, Column> = BTreeMap::new();

    for (index, rect) in doc.select(&day_cells).enumerate() {
        let attrs = rect.value();

        let level = match attrs.attr("data-level") {
            Some(raw) => raw.parse().unwrap_or(0),
            None => attrs.attr("fill").map(level_from_fill).unwrap_or(0),
        };
        let count = attrs.attr("data-count").unwrap_or("0");
        let date = attrs.attr("data-date").unwrap_or("");

        columns
            .entry(index / DAYS_PER_WEEK)
            .or_default()
            .push(ActivityCell::new(level, count, date));
    }

    Ok(columns.into_values().collect())
}
