#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned text table.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let numeric = is_numeric(&text);
                let padded = pad(&text, *width, numeric);
                if options.color {
                    highlight(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    let total = |widths: &[usize]| widths.iter().sum::<usize>() + separators;

    while total(widths) > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut out: String = single_line.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let gap = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{gap}{value}")
    } else {
        format!("{value}{gap}")
    }
}

/// Colour holiday types and pinned flags. `padded` already holds `text`.
fn highlight(text: &str, padded: String) -> String {
    let code = match text {
        "gazetted" | "true" => "31",
        "restricted" => "33",
        "conference" | "meeting" | "workshop" => "36",
        _ => return padded,
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_table};

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "Republic Day".into(), "gazetted".into()],
            vec!["12".into(), "Guru Nanak's Birthday".into(), "restricted".into()],
        ]
    }

    #[test]
    fn columns_align_and_numbers_right_align() {
        let table = render_table(
            &["id", "name", "type"],
            &rows(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("   1  Republic Day"));
        assert!(lines[3].starts_with("  12  Guru Nanak's Birthday"));
        let type_col = lines[0].find("type").unwrap();
        assert_eq!(lines[2].find("gazetted"), Some(type_col));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let table = render_table(
            &["id", "name", "type"],
            &rows(),
            TableOptions {
                max_width: Some(26),
                color: false,
            },
        );
        assert!(table.contains('…'));
        assert!(table.lines().all(|line| line.chars().count() <= 26));
    }

    #[test]
    fn color_wraps_holiday_type() {
        let table = render_table(
            &["id", "name", "type"],
            &rows(),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mgazetted\u{1b}[0m"));
        assert!(table.contains("\u{1b}[33mrestricted\u{1b}[0m"));
    }

    #[test]
    fn dates_are_not_treated_as_numbers() {
        let table = render_table(
            &["date"],
            &[vec!["2024-10-02".into()], vec!["x".into()]],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        assert!(table.lines().nth(2).is_some_and(|l| l.starts_with("2024-10-02")));
    }
}
