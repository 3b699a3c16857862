use std::sync::OnceLock;

use regex::Regex;

use crate::models::{TableCell, TableContent, TableRow};
use crate::parsing::inline::tokenize;
use crate::serialize::compose;

/// Pipe table: a contiguous run of lines starting with `|`.
pub struct Table;

static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();

fn separator_cell_regex() -> &'static Regex {
    SEPARATOR_CELL
        .get_or_init(|| Regex::new(r"^[\s:]*-[-\s:]*$").expect("Invalid separator regex"))
}

/// A parsed table plus the number of source lines it spans.
#[derive(Debug)]
pub struct Collected {
    pub content: TableContent,
    pub lines: usize,
}

impl Table {
    pub const DELIMITER: char = '|';

    pub fn starts(trimmed: &str) -> bool {
        trimmed.starts_with(Self::DELIMITER)
    }

    /// Splits a row into trimmed cell texts, ignoring one outer pipe on each side.
    pub fn split_row(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::DELIMITER).unwrap_or(t);
        let t = t.strip_suffix(Self::DELIMITER).unwrap_or(t);
        t.split(Self::DELIMITER).map(str::trim).collect()
    }

    /// `| --- | :-: |` style header separator.
    pub fn is_separator(line: &str) -> bool {
        let cells = Self::split_row(line);
        !cells.is_empty() && cells.iter().all(|c| separator_cell_regex().is_match(c))
    }

    /// Consumes table rows from `lines[start..]`.
    ///
    /// Only the second line of the run may be a separator; it is dropped.
    /// Rows are stored with whatever cell count they have.
    pub fn collect(lines: &[&str], start: usize) -> Collected {
        let run: Vec<&str> = lines[start..]
            .iter()
            .take_while(|l| Self::starts(l.trim()))
            .copied()
            .collect();

        let rows = run
            .iter()
            .enumerate()
            .filter(|(i, line)| !(*i == 1 && Self::is_separator(line)))
            .map(|(_, line)| {
                let cells = Self::split_row(line)
                    .into_iter()
                    .map(|text| TableCell::new(tokenize(text)))
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        Collected {
            content: TableContent::from_rows(rows),
            lines: run.len(),
        }
    }

    pub fn format_row(row: &TableRow) -> String {
        let cells: Vec<String> = row.cells.iter().map(|c| compose(&c.content)).collect();
        format!("| {} |", cells.join(" | "))
    }

    pub fn separator(columns: usize) -> String {
        format!("|{}", " --- |".repeat(columns.max(1)))
    }
}
