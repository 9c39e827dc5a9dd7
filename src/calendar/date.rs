//! Display formatting for calendar dates.

/// Resolves a zero-padded month code (`"01"`..`"12"`) to its short name.
///
/// Unknown codes resolve to the empty string.
fn month_abbr(code: &str) -> &'static str {
    match code {
        "01" => "Jan",
        "02" => "Feb",
        "03" => "Mar",
        "04" => "Apr",
        "05" => "May",
        "06" => "Jun",
        "07" => "Jul",
        "08" => "Aug",
        "09" => "Sep",
        "10" => "Oct",
        "11" => "Nov",
        "12" => "Dec",
        _ => "",
    }
}

/// Formats a `YYYY-MM-DD` date as `"<Mon> <DD> <YYYY>"`.
///
/// `2021-07-04` becomes `"Jul 04 2021"`. Splitting is purely positional:
/// segment 0 is the year, segment 1 the month code, segment 2 the day.
/// Malformed input yields a partially empty label instead of an error.
pub fn format_date(date: &str) -> String {
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().map(month_abbr).unwrap_or("");
    let day = parts.next().unwrap_or("");

    format!("{} {} {}", month, day, year)
}
