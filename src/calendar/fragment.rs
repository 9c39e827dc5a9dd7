//! Assembly of rendered columns into the embeddable fragment.

use super::grid::Column;

/// Opens the outer container and embeds the fixed stylesheet. The
/// container is closed by [`assemble`] after the last column.
pub const STYLE_HEADER: &str = "<div aria-hidden=\"true\" class=\"commitscrape\">\
<style>\
.commitscrape-col:last-child .commitscrape-block{margin-right:0 !important;}\
.commitscrape-0{background-color:#161b22;}\
.commitscrape-1{background-color:#0a373e;}\
.commitscrape-2{background-color:#105f6b;}\
.commitscrape-3{background-color:#09798a;}\
.commitscrape-4{background-color:#05afca;}\
.commitscrape-col{display:inline-grid;}\
.commitscrape-block{border-radius: 3px;}\
</style>";

/// Joins rendered columns into one self-contained fragment.
///
/// Each column is wrapped in its own `commitscrape-col` container; the
/// trimmer relies on re-discovering exactly these container boundaries.
pub fn assemble(columns: &[Column]) -> String {
    let mut html = String::with_capacity(STYLE_HEADER.len() + columns.len() * 2048);
    html.push_str(STYLE_HEADER);

    for column in columns {
        html.push_str("<div class=\"commitscrape-col\">");
        for cell in column {
            html.push_str(&cell.render());
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ActivityCell;

    fn week(start_day: u32) -> Column {
        (0..7)
            .map(|i| ActivityCell::new(0, "0", format!("2021-03-{:02}", start_day + i)))
            .collect()
    }

    #[test]
    fn test_assemble_wraps_each_column() {
        let fragment = assemble(&[week(1), week(8)]);

        assert!(fragment.starts_with(STYLE_HEADER));
        assert!(fragment.ends_with("</div>"));
        assert_eq!(fragment.matches("<div class=\"commitscrape-col\">").count(), 2);
        // 14 rendered cells plus the two stylesheet rules naming the class
        assert_eq!(fragment.matches("commitscrape-block").count(), 14 + 2);
    }

    #[test]
    fn test_assemble_empty_grid() {
        let fragment = assemble(&[]);

        assert!(fragment.starts_with(STYLE_HEADER));
        assert!(!fragment.contains("commitscrape-col\">"));
    }

    #[test]
    fn test_assemble_preserves_column_order() {
        let fragment = assemble(&[week(1), week(8)]);

        let first = fragment.find("2021-03-01").unwrap();
        let second = fragment.find("2021-03-08").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_style_header_defines_all_levels() {
        for level in 0..=4 {
            assert!(STYLE_HEADER.contains(&format!(".commitscrape-{}{{", level)));
        }
    }
}
