//! Table model for resource collections
//!
//! The browser views and the CLI render the same `TableView`, so both show
//! identical headers, cell text and row order.

use std::collections::HashSet;

use crate::resources::{Resource, ResourceKind};

/// One body row, keyed by the record id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Render identity, never displayed
    ///
    /// The record id. When that key is already taken in the table, `#n` is
    /// appended with the smallest `n` giving an unused key.
    pub key: String,
    pub cells: Vec<String>,
}

/// A titled table built from a resource collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// An empty table for a kind
    pub fn empty(kind: ResourceKind) -> Self {
        Self {
            title: kind.title(),
            headers: kind.columns(),
            rows: Vec::new(),
        }
    }

    /// Build a table with one row per record, in collection order
    pub fn from_records<R: Resource>(records: &[R]) -> Self {
        let mut emitted: HashSet<String> = HashSet::new();
        let rows = records
            .iter()
            .map(|record| {
                let id = record.id().to_string();
                let mut key = id.clone();
                let mut repeat = 0;
                while !emitted.insert(key.clone()) {
                    repeat += 1;
                    key = format!("{}#{}", id, repeat);
                }

                TableRow {
                    key,
                    cells: record.cells(),
                }
            })
            .collect();

        Self {
            rows,
            ..Self::empty(R::KIND)
        }
    }

    /// Render as fixed-width terminal text: title, header, rule, rows
    pub fn render_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');
        out.push_str(&format_line(self.headers.iter().copied(), &widths));
        out.push_str(&"-".repeat(total_width(&widths)));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_line(row.cells.iter().map(String::as_str), &widths));
        }
        out
    }
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

fn total_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_collection;
    use crate::resources::{Activity, Team, User};

    #[test]
    fn test_row_count_matches_records() {
        let body = r#"[
            {"id": 1, "name": "thundergod"},
            {"id": 2, "name": "metalgeek"},
            {"id": 3, "name": "zerocool"}
        ]"#;
        let users = decode_collection::<User>(body).unwrap();
        let table = TableView::from_records(&users);

        assert_eq!(table.title, "Users");
        assert_eq!(table.headers, &["User Name"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].key, "2");
        assert_eq!(table.rows[1].cells, vec!["metalgeek"]);
    }

    #[test]
    fn test_empty_collection_has_no_rows() {
        let table = TableView::from_records::<Activity>(&[]);
        assert!(table.rows.is_empty());
        assert_eq!(table, TableView::empty(ResourceKind::Activities));
    }

    #[test]
    fn test_team_row_flattens_members() {
        let body = r#"[{"id": "t1", "name": "Blue Team", "members": ["Alice", "Bob"]}]"#;
        let teams = decode_collection::<Team>(body).unwrap();
        let table = TableView::from_records(&teams);

        assert_eq!(table.rows[0].key, "t1");
        assert_eq!(table.rows[0].cells, vec!["Blue Team", "Alice, Bob"]);
    }

    #[test]
    fn test_repeated_ids_keep_every_row() {
        let body = r#"[
            {"id": 1, "name": "zerocool"},
            {"id": 1, "name": "crashoverride"},
            {"id": 1, "name": "acidburn"}
        ]"#;
        let users = decode_collection::<User>(body).unwrap();
        let table = TableView::from_records(&users);

        let keys: Vec<&str> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "1#1", "1#2"]);
        assert_eq!(table.rows[2].cells, vec!["acidburn"]);
    }

    #[test]
    fn test_repeat_keys_skip_ids_already_present() {
        let body = r#"[
            {"id": 1, "name": "zerocool"},
            {"id": 1, "name": "crashoverride"},
            {"id": "1#1", "name": "acidburn"},
            {"id": "1", "name": "cerealkiller"}
        ]"#;
        let users = decode_collection::<User>(body).unwrap();
        let table = TableView::from_records(&users);

        let keys: Vec<&str> = table.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "1#1", "1#1#1", "1#2"]);

        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), users.len());
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let body = r#"[
            {"id": 1, "name": "Cycling", "duration": 60},
            {"id": 2, "name": "Strength", "duration": 30}
        ]"#;
        let activities = decode_collection::<Activity>(body).unwrap();
        let text = TableView::from_records(&activities).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Activities");
        assert_eq!(lines[1], "Activity Name  Duration");
        assert_eq!(lines[2], "-".repeat(23));
        assert_eq!(lines[3], "Cycling        60");
        assert_eq!(lines[4], "Strength       30");
        assert_eq!(lines.len(), 5);
    }
}
