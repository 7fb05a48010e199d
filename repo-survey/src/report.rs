//! Markdown table rendering.

use crate::record::RepositoryRecord;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, Table};
use std::io::{self, Write};

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = [
    "repo-name",
    "repo-languages",
    "number-of-stars",
    "license-name",
    "last-commit-date",
];

const STARS_COLUMN: usize = 2;

/// Projects a record onto the five report columns.
#[must_use]
pub fn report_row(record: &RepositoryRecord) -> [String; 5] {
    [
        record.name.clone(),
        record.languages_joined(),
        record.stars.to_string(),
        record.license.clone(),
        record.last_commit.clone(),
    ]
}

/// Renders records as a GitHub-flavoured markdown table.
///
/// Column widths fit the widest cell, numbers are right-aligned, and the
/// output carries no trailing newline.
#[must_use]
pub fn render_table(records: &[RepositoryRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(HEADERS);

    for record in records {
        table.add_row(report_row(record));
    }

    if let Some(column) = table.column_mut(STARS_COLUMN) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}

/// Writes the rendered table, followed by a newline, to `out`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_table<W: Write>(records: &[RepositoryRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_table(records))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, languages: &[&str], stars: u32, license: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            stars,
            license: license.to_string(),
            last_commit: "2024-03-01T00:00:00Z".to_string(),
        }
    }

    fn cells(line: &str) -> Vec<String> {
        line.trim()
            .trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let records = vec![
            record("acme/kanban-board", &["JavaScript", "CSS"], 20, "MIT License"),
            record("acme/todo", &[], 3, "None"),
        ];

        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(cells(lines[0]), HEADERS);
        assert!(lines[1].starts_with("|-"));
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'));
        assert_eq!(
            cells(lines[2]),
            vec![
                "acme/kanban-board",
                "JavaScript, CSS",
                "20",
                "MIT License",
                "2024-03-01T00:00:00Z"
            ]
        );
        assert_eq!(cells(lines[3])[1], "");
        assert_eq!(cells(lines[3])[3], "None");
    }

    #[test]
    fn lines_share_one_width() {
        let records = vec![
            record("a/short", &["C"], 1, "None"),
            record("a/a-much-longer-repository-name", &["Rust", "Shell"], 12345, "None"),
        ];

        let table = render_table(&records);
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();

        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn stars_are_right_aligned() {
        let table = render_table(&[record("a/b", &["C"], 20, "None")]);
        let width = "number-of-stars".len();

        assert!(table.contains(&format!(" {:>width$} |", "20")));
    }

    #[test]
    fn empty_report_has_only_headers() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(cells(lines[0]), HEADERS);
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![record("a/b", &["Go"], 4, "Apache License 2.0")];
        assert_eq!(render_table(&records), render_table(&records));
    }

    #[test]
    fn write_table_ends_with_newline() {
        let mut out = Vec::new();
        write_table(&[record("a/b", &["Go"], 4, "None")], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("|\n"));
        assert_eq!(text.trim_end(), render_table(&[record("a/b", &["Go"], 4, "None")]));
    }
}
