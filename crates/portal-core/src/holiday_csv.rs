//! Holiday list CSV parsing.
//!
//! Format: `Name,Date(YYYY-MM-DD),Type,Notes` with a mandatory header line.
//! Splitting is a plain split on `,`; quoting is not supported. Rows with
//! fewer than three columns are dropped without error. Dates and types are
//! passed through unchecked; the store decides whether they are acceptable.

use serde::Serialize;

/// Colour for gazetted holidays.
pub const GAZETTED_COLOUR: &str = "#ef4444";
/// Colour for every other holiday type.
pub const OTHER_COLOUR: &str = "#eab308";

const MIN_COLUMNS: usize = 3;

/// One accepted CSV row, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub name: String,
    pub date: String,
    /// Lower-cased type column.
    pub holiday_type: String,
    pub notes: String,
    pub colour_hex: &'static str,
}

/// Display colour for a lower-cased holiday type.
#[must_use]
pub fn colour_for_type(holiday_type: &str) -> &'static str {
    if holiday_type == "gazetted" {
        GAZETTED_COLOUR
    } else {
        OTHER_COLOUR
    }
}

/// Parse CSV text into insertable rows, skipping the header, blank lines,
/// and rows with fewer than three columns. Columns past `notes` are ignored.
#[must_use]
pub fn parse_holiday_csv(text: &str) -> Vec<HolidayRow> {
    text.split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect()
}

fn parse_line(line: usize, raw: &str) -> Option<HolidayRow> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cols: Vec<&str> = trimmed.split(',').collect();
    if cols.len() < MIN_COLUMNS {
        return None;
    }
    let holiday_type = cols[2].trim().to_lowercase();
    Some(HolidayRow {
        line,
        name: cols[0].trim().to_string(),
        date: cols[1].trim().to_string(),
        colour_hex: colour_for_type(&holiday_type),
        holiday_type,
        notes: cols.get(3).map_or_else(String::new, |n| n.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_single_gazetted_row() {
        let rows = parse_holiday_csv("Name,Date,Type,Notes\nGandhi Jayanti,2024-10-02,gazetted,\n");
        assert_eq!(
            rows,
            vec![HolidayRow {
                line: 2,
                name: "Gandhi Jayanti".into(),
                date: "2024-10-02".into(),
                holiday_type: "gazetted".into(),
                notes: String::new(),
                colour_hex: GAZETTED_COLOUR,
            }]
        );
    }

    #[test]
    fn header_only_and_short_rows_yield_nothing() {
        assert!(parse_holiday_csv("Name,Date,Type,Notes").is_empty());
        assert!(parse_holiday_csv("Name,Date,Type,Notes\nBadRow\n").is_empty());
        assert!(parse_holiday_csv("Name,Date,Type,Notes\nHoli,2024-03-25\n").is_empty());
    }

    #[test]
    fn header_is_skipped_even_if_it_looks_like_data() {
        let rows = parse_holiday_csv("Holi,2024-03-25,gazetted\nDiwali,2024-11-01,Gazetted");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Diwali");
    }

    #[test]
    fn type_is_lowercased_and_colour_derived() {
        let rows = parse_holiday_csv(
            "Name,Date,Type,Notes\r\n Id-ul-Zuha , 2024-06-17 , RESTRICTED , Subject to moon sighting \r\n",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Id-ul-Zuha");
        assert_eq!(rows[0].date, "2024-06-17");
        assert_eq!(rows[0].holiday_type, "restricted");
        assert_eq!(rows[0].notes, "Subject to moon sighting");
        assert_eq!(rows[0].colour_hex, OTHER_COLOUR);
    }

    #[test]
    fn blank_lines_skipped_and_extra_columns_ignored() {
        let rows = parse_holiday_csv(
            "Name,Date,Type,Notes\n\n   \nFoundation Day,2024-09-26,institution,Campus closed,extra,cols\n",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 4);
        assert_eq!(rows[0].notes, "Campus closed");
    }
}
