//! Structural trimming of an assembled fragment to its trailing columns.

use scraper::{Html, Selector};

/// Column slots in a full year grid: 52 whole weeks plus one partial.
pub const TOTAL_COLUMN_SLOTS: usize = 53;

const COLUMN_SELECTOR: &str = "div.commitscrape-col";

/// Keeps only the trailing `keep` columns of an assembled fragment.
///
/// The fragment is re-parsed and the leading `53 - keep` column containers
/// are detached from the tree, then the remainder is re-serialized. The
/// removal count is capped at the number of columns actually present, and
/// `keep >= 53` removes nothing. Column boundaries are rediscovered
/// structurally, never by offset arithmetic on the markup text.
///
/// An empty or column-free fragment passes through without error.
pub fn trim_columns(fragment: &str, keep: usize) -> String {
    let mut doc = Html::parse_fragment(fragment);

    let columns = Selector::parse(COLUMN_SELECTOR).expect("column selector");
    let ids: Vec<_> = doc.select(&columns).map(|col| col.id()).collect();

    let remove = TOTAL_COLUMN_SLOTS.saturating_sub(keep).min(ids.len());
    for id in &ids[..remove] {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    doc.root_element().inner_html()
}
