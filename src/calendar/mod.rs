//! Calendar pipeline
//!
//! Turns a fetched contribution-calendar document into an embeddable HTML
//! fragment: extract day cells, group them into weekly columns, render each
//! day as a styled block, assemble the fragment, and trim it to a requested
//! number of trailing columns.

mod cell;
mod date;
mod fragment;
mod grid;
mod trim;


// Re-export public types
pub use cell::ActivityCell;
pub use date::format_date;
pub use fragment::{assemble, STYLE_HEADER};
pub use grid::{extract_columns, Column, DAYS_PER_WEEK};
pub use trim::{trim_columns, TOTAL_COLUMN_SLOTS};
