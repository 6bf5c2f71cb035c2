//! The row walk shared by every template sheet.

use calamine::{DataType, Range};
use indexmap::IndexMap;
use tracing::debug;

use super::cell::CellValue;
use crate::error::{TemplateError, TemplateResult};

/// One data row of a sheet, addressed by zero-indexed column.
pub struct SheetRow<'a> {
    sheet: &'a str,
    /// 1-based, as shown by spreadsheet applications
    number: usize,
    cells: &'a [DataType],
    first_column: usize,
}

impl<'a> SheetRow<'a> {
    pub fn cell(&self, column: usize) -> TemplateResult<CellValue<'a>> {
        // Columns left of the used area are blank in the sheet
        if column < self.first_column {
            return Ok(CellValue::Empty);
        }
        self.cells
            .get(column - self.first_column)
            .map(CellValue::from)
            .ok_or_else(|| TemplateError::missing_column(self.sheet, self.number, column))
    }

    /// Scalar field. Blank cells are `None`; error cells abort the read.
    pub fn text(&self, column: usize) -> TemplateResult<Option<String>> {
        match self.cell(column)? {
            CellValue::Error(e) => Err(TemplateError::malformed_cell(
                self.sheet,
                self.number,
                column,
                format!("cell holds error value {}", e),
            )),
            value => Ok(value.to_scalar()),
        }
    }

    /// `;` delimited list field.
    pub fn list(&self, column: usize) -> TemplateResult<Vec<String>> {
        Ok(self.cell(column)?.to_list())
    }
}

/// Walk the data rows of `range` and collect one record per titled row.
///
/// Row 1 of the worksheet is the header and is skipped without looking at
/// it. When row 1 is blank the range starts further down and every row in
/// it is data, header text included. Rows
/// with a blank title are skipped and the walk carries on. `build` returns
/// `None` to leave a row out. A repeated title replaces the earlier record
/// in place.
pub fn walk_rows<T, F>(
    sheet: &str,
    range: &Range<DataType>,
    title_column: usize,
    mut build: F,
) -> TemplateResult<IndexMap<String, T>>
where
    F: FnMut(&SheetRow<'_>, &str) -> TemplateResult<Option<T>>,
{
    let (first_row, first_column) = range
        .start()
        .map(|(row, column)| (row as usize, column as usize))
        .unwrap_or((0, 0));

    let mut records = IndexMap::new();

    for (offset, cells) in range.rows().enumerate() {
        let absolute_row = first_row + offset;
        if absolute_row == 0 {
            continue;
        }

        let row = SheetRow {
            sheet,
            number: absolute_row + 1,
            cells,
            first_column,
        };

        let Some(title) = row.text(title_column)? else {
            debug!(sheet, row = row.number, "Skipping row without title");
            continue;
        };

        match build(&row, &title)? {
            Some(record) => {
                if records.insert(title, record).is_some() {
                    debug!(sheet, row = row.number, "Row replaced an earlier row with the same title");
                }
            }
            None => debug!(sheet, row = row.number, "Row left out by sheet filter"),
        }
    }

    Ok(records)
}
