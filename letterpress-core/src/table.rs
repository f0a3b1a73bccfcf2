//! Fixed-width plain-text rendering for [`Table`].
//!
//! ```text
//! Name | Age
//! -----+----
//! John | 30
//! Jane | 25
//! ```
//!
//! Column order is the key order of the first row. A column's width is its
//! explicit width when one is given (leading digits of the width hint),
//! otherwise the widest of its title-cased header and its values. Explicit
//! widths are authoritative: narrower content is padded, wider content is
//! emitted whole and overflows the column. Hints above
//! [`MAX_COLUMN_WIDTH`] are ignored like non-numeric ones, so the width
//! falls back to the content.
//!
//! A key repeated within a row renders its last value in every column it
//! names.

use unicode_width::UnicodeWidthStr;

use crate::block::{Alignment, Table};

const CELL_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

/// Largest explicit column width honoured by [`explicit_width`].
pub const MAX_COLUMN_WIDTH: usize = 1024;

struct Column<'a> {
    key: &'a str,
    title: String,
    width: usize,
    alignment: Alignment,
}

impl Table {
    /// Render the table as an aligned monospace grid.
    ///
    /// Returns an empty string when the table has no rows or its first row
    /// has no cells.
    pub fn plain_text(&self) -> String {
        render(self)
    }
}

/// Render `table` as an aligned monospace grid. See the module docs.
pub fn render(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let columns = layout(table);
    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .map(|c| pad(&c.title, c.width, c.alignment))
        .collect();
    push_line(&mut out, &header.join(CELL_SEPARATOR));

    let rule: Vec<String> = columns.iter().map(|c| "-".repeat(c.width)).collect();
    push_line(&mut out, &rule.join(RULE_SEPARATOR));

    for row in &table.rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| pad(row.get(c.key).unwrap_or(""), c.width, c.alignment))
            .collect();
        push_line(&mut out, &cells.join(CELL_SEPARATOR));
    }

    out
}

fn layout(table: &Table) -> Vec<Column<'_>> {
    table
        .column_keys()
        .into_iter()
        .map(|key| {
            let title = capitalize(key);
            let width = match table.columns.width(key).and_then(explicit_width) {
                Some(width) => width,
                None => table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(key))
                    .map(display_width)
                    .fold(display_width(&title), usize::max),
            };
            Column {
                key,
                title,
                width,
                alignment: table.columns.alignment(key),
            }
        })
        .collect()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Leading ASCII digits of a width hint: `"12"` → 12, `"20%"` → 20.
/// `None` when the hint does not start with a digit or exceeds
/// [`MAX_COLUMN_WIDTH`].
pub fn explicit_width(hint: &str) -> Option<usize> {
    let hint = hint.trim();
    let end = hint
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(hint.len());
    hint[..end]
        .parse::<usize>()
        .ok()
        .filter(|width| *width <= MAX_COLUMN_WIDTH)
}

/// Upper-case the first character only.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` to `width` terminal columns. Never truncates.
pub fn pad(s: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(display_width(s));
    let (left, right) = match alignment {
        Alignment::Left => (0, fill),
        Alignment::Right => (fill, 0),
        Alignment::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Row;
    use rstest::rstest;

    fn rows(data: &[&[(&str, &str)]]) -> Vec<Row> {
        data.iter()
            .map(|cells| cells.iter().copied().collect())
            .collect()
    }

    #[test]
    fn two_columns_sized_by_content() {
        let table = Table::new(rows(&[
            &[("Name", "John"), ("Age", "30")],
            &[("Name", "Jane"), ("Age", "25")],
        ]));
        assert_eq!(
            table.plain_text(),
            "Name | Age\n-----+----\nJohn | 30 \nJane | 25 \n"
        );
    }

    #[test]
    fn lowercase_keys_are_title_cased() {
        let table = Table::new(rows(&[
            &[("name", "John"), ("age", "30")],
            &[("name", "Jane"), ("age", "25")],
        ]));
        assert_eq!(
            table.plain_text(),
            "Name | Age\n-----+----\nJohn | 30 \nJane | 25 \n"
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(Table::default().plain_text(), "");
        assert_eq!(Table::new([Row::new()]).plain_text(), "");
    }

    #[test]
    fn explicit_widths_pad_short_content() {
        let table = Table::new(rows(&[
            &[("id", "1"), ("name", "John")],
            &[("id", "2"), ("name", "Jane")],
        ]))
        .width("id", "5")
        .width("name", "10");
        assert_eq!(
            table.plain_text(),
            "Id    | Name      \n------+-----------\n1     | John      \n2     | Jane      \n"
        );
    }

    #[test]
    fn explicit_width_never_truncates() {
        let table = Table::new(rows(&[&[("name", "John")], &[("name", "Jo")]])).width("name", "2");
        assert_eq!(table.plain_text(), "Name\n--\nJohn\nJo\n");
    }

    #[test]
    fn right_alignment_pads_left() {
        let table = Table::new(rows(&[
            &[("name", "John"), ("score", "95")],
            &[("name", "Jane"), ("score", "87")],
        ]))
        .align("name", Alignment::Left)
        .align("score", Alignment::Right);
        assert_eq!(
            table.plain_text(),
            "Name | Score\n-----+------\nJohn |    95\nJane |    87\n"
        );
    }

    #[test]
    fn center_alignment_splits_padding() {
        let table = Table::new(rows(&[&[("status", "ok")], &[("status", "fail")]]))
            .width("status", "8")
            .align("status", Alignment::Center);
        assert_eq!(table.plain_text(), " Status \n--------\n   ok   \n  fail  \n");
    }

    #[test]
    fn center_alignment_odd_remainder_goes_right() {
        assert_eq!(pad("ok", 7, Alignment::Center), "  ok   ");
    }

    #[test]
    fn varying_column_widths() {
        let table = Table::new(rows(&[
            &[("short", "a"), ("long", "very long value")],
            &[("short", "b"), ("long", "x")],
        ]));
        assert_eq!(
            table.plain_text(),
            "Short | Long           \n------+----------------\na     | very long value\nb     | x              \n"
        );
    }

    #[test]
    fn non_numeric_width_is_ignored() {
        let table = Table::new(rows(&[&[("test", "value")]])).width("test", "invalid");
        assert_eq!(table.plain_text(), "Test \n-----\nvalue\n");
    }

    #[test]
    fn single_row_table() {
        let table = Table::new(rows(&[&[("column", "data")]]));
        assert_eq!(table.plain_text(), "Column\n------\ndata  \n");
    }

    #[test]
    fn missing_cells_render_empty() {
        let table = Table::new(rows(&[&[("a", "1"), ("b", "2")], &[("a", "3")]]));
        assert_eq!(table.plain_text(), "A | B\n--+--\n1 | 2\n3 |  \n");
    }

    // Keys absent from the first row are dropped, not added as columns.
    #[test]
    fn keys_missing_from_first_row_are_not_rendered() {
        let table = Table::new(rows(&[&[("a", "1")], &[("a", "2"), ("b", "extra")]]));
        let out = table.plain_text();
        assert_eq!(out, "A\n-\n1\n2\n");
        assert!(!out.contains("extra"));
    }

    #[test]
    fn repeated_key_renders_last_value() {
        let table = Table::new(rows(&[&[("a", "1"), ("a", "2")]]));
        assert_eq!(table.plain_text(), "A | A\n--+--\n2 | 2\n");
    }

    #[rstest]
    #[case("18446744073709551615")]
    #[case("1000000000000")]
    #[case("1025")]
    fn oversized_width_falls_back_to_content(#[case] hint: &str) {
        let table = Table::new(rows(&[&[("a", "1")]])).width("a", hint);
        assert_eq!(table.plain_text(), "A\n-\n1\n");
    }

    #[test]
    fn wide_characters_use_display_width() {
        let table = Table::new(rows(&[&[("city", "東京")], &[("city", "Oslo")]]));
        assert_eq!(table.plain_text(), "City\n----\n東京\nOslo\n");
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("20%", Some(20))]
    #[case("200px", Some(200))]
    #[case(" 7 ", Some(7))]
    #[case("invalid", None)]
    #[case("px20", None)]
    #[case("", None)]
    #[case("1024", Some(1024))]
    #[case("1025", None)]
    #[case("1000000000000", None)]
    #[case("18446744073709551615", None)]
    #[case("99999999999999999999999", None)]
    fn width_hints(#[case] hint: &str, #[case] expected: Option<usize>) {
        assert_eq!(explicit_width(hint), expected);
    }

    #[rstest]
    #[case("name", "Name")]
    #[case("Name", "Name")]
    #[case("éclair", "Éclair")]
    #[case("", "")]
    fn capitalize_first_char_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
