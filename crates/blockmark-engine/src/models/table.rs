use serde::{Deserialize, Serialize};

use super::inline::InlineSegment;

/// Row/cell matrix held by a table block.
///
/// The first row is the header row by convention. The markup separator line
/// that follows it is never stored; the serializer re-creates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "tableContent", rename_all = "camelCase")]
pub struct TableContent {
    /// Cell count of the first row.
    pub column_count: usize,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: Vec<InlineSegment>,
}

impl TableContent {
    /// Builds a table from rows, taking `column_count` from the first row.
    ///
    /// Rows are stored as given: a row shorter or longer than the first one is
    /// neither padded nor truncated.
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        let column_count = rows.first().map_or(0, |r| r.cells.len());
        Self { column_count, rows }
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Returns true if every row has exactly `column_count` cells.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.cells.len() == self.column_count)
    }
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

impl TableCell {
    pub fn new(content: Vec<InlineSegment>) -> Self {
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(texts: &[&str]) -> TableRow {
        TableRow::new(
            texts
                .iter()
                .map(|t| TableCell::new(vec![InlineSegment::plain(*t)]))
                .collect(),
        )
    }

    #[test]
    fn column_count_comes_from_first_row() {
        let table = TableContent::from_rows(vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
        assert_eq!(table.column_count, 3);
        assert!(table.is_rectangular());
    }

    #[test]
    fn ragged_rows_are_kept_as_is() {
        let table = TableContent::from_rows(vec![row(&["a", "b"]), row(&["1"])]);
        assert_eq!(table.column_count, 2);
        assert_eq!(table.rows[1].cells.len(), 1);
        assert!(!table.is_rectangular());
    }

    #[test]
    fn wire_form_is_tagged() {
        let table = TableContent::from_rows(vec![row(&["a"])]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["type"], "tableContent");
        assert_eq!(json["columnCount"], 1);
        assert_eq!(json["rows"][0]["cells"][0]["content"][0]["text"], "a");
    }
}
