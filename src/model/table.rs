//! RTF table support.
//!
//! RTF has no table container: a table is a run of paragraphs marked `\intbl`,
//! each row introduced by `\trowd` with its `\cellx` boundaries and ended by
//! `\row`. The document destination assembles those into [`Table`]s.

use super::types::{Alignment, ParagraphContent};

/// A table in an RTF document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a new table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of the table, cells separated by tabs and rows by newlines.
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(Cell::text)
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Row-level properties (`\trowd` group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowProperties {
    /// `\trleft`
    pub left: i32,
    /// `\trgaph`, half the space between cells
    pub gap: i32,
    /// `\trrh`; negative means exact height
    pub height: i32,
    /// `\trhdr`
    pub header: bool,
    /// `\trql` / `\trqr` / `\trqc`
    pub alignment: Alignment,
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
    /// Row properties
    pub properties: RowProperties,
}

impl Row {
    /// Create a new row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row with the given properties.
    pub fn with_properties(properties: RowProperties) -> Self {
        Self {
            cells: Vec::new(),
            properties,
        }
    }

    /// Add a cell to the row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    paragraphs: Vec<ParagraphContent>,
    /// Right boundary in twips (`\cellx`)
    pub right_boundary: Option<i32>,
}

impl Cell {
    /// Create a new cell.
    pub fn new(paragraphs: Vec<ParagraphContent>) -> Self {
        Self {
            paragraphs,
            right_boundary: None,
        }
    }

    /// Set the right boundary.
    pub fn with_boundary(mut self, boundary: i32) -> Self {
        self.right_boundary = Some(boundary);
        self
    }

    /// Paragraphs in the cell.
    pub fn paragraphs(&self) -> &[ParagraphContent] {
        &self.paragraphs
    }

    /// Get the cell text; paragraphs are joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(ParagraphContent::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{Formatting, Paragraph, Run};

    fn cell(text: &str) -> Cell {
        Cell::new(vec![ParagraphContent::new(
            Paragraph::default(),
            vec![Run::new(text, Formatting::default())],
        )])
    }

    #[test]
    fn test_table_text() {
        let mut table = Table::new();
        let mut row = Row::new();
        row.add_cell(cell("a").with_boundary(1000));
        row.add_cell(cell("b").with_boundary(2000));
        table.add_row(row);
        let mut row = Row::new();
        row.add_cell(cell("c"));
        table.add_row(row);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].cells()[1].right_boundary, Some(2000));
        assert_eq!(table.text(), "a\tb\nc");
    }
}
