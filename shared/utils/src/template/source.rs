//! Worksheet sources.

use calamine::{open_workbook_auto, DataType, Range, Reader, Sheets};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::TemplateConfig;
use crate::error::{TemplateError, TemplateResult};

/// Anything that can hand out a worksheet by name.
pub trait WorkbookSource {
    /// Fails with [`TemplateError::SheetNotFound`] when the workbook has no
    /// sheet of that name.
    fn worksheet(&mut self, sheet: &str) -> TemplateResult<Range<DataType>>;
}

/// An open workbook on disk. Format (xlsx, xls, ods) is picked from the
/// file extension.
pub struct ExcelWorkbook {
    workbook: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    pub fn open(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        let workbook = open_workbook_auto(path)
            .map_err(|e| TemplateError::workbook(path.display().to_string(), e.to_string()))?;

        Ok(Self { workbook })
    }
}

impl WorkbookSource for ExcelWorkbook {
    fn worksheet(&mut self, sheet: &str) -> TemplateResult<Range<DataType>> {
        match self.workbook.worksheet_range(sheet) {
            Some(Ok(range)) => Ok(range),
            Some(Err(e)) => Err(TemplateError::sheet_read(sheet, e.to_string())),
            None => Err(TemplateError::sheet_not_found(sheet)),
        }
    }
}

/// The configured template file. Every worksheet request opens the file
/// again, so reads through a `TemplateFile` never share a handle.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    path: PathBuf,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(config.input_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> TemplateResult<ExcelWorkbook> {
        ExcelWorkbook::open(&self.path)
    }
}

impl WorkbookSource for TemplateFile {
    fn worksheet(&mut self, sheet: &str) -> TemplateResult<Range<DataType>> {
        self.open()?.worksheet(sheet)
    }
}

/// Sheets held in memory, for callers that already have the cell data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: HashMap<String, Range<DataType>>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet whose first row sits at A1. Short rows are padded with
    /// empty cells up to the widest row.
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Vec<DataType>>) -> Self {
        self.insert_range(name, range_from_rows(rows));
        self
    }

    pub fn insert_range(&mut self, name: impl Into<String>, range: Range<DataType>) {
        self.sheets.insert(name.into(), range);
    }
}

impl WorkbookSource for InMemoryWorkbook {
    fn worksheet(&mut self, sheet: &str) -> TemplateResult<Range<DataType>> {
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| TemplateError::sheet_not_found(sheet))
    }
}

fn range_from_rows(rows: Vec<Vec<DataType>>) -> Range<DataType> {
    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 || width == 0 {
        return Range::empty();
    }

    let mut range = Range::new((0, 0), ((height - 1) as u32, (width - 1) as u32));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, value) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), value);
        }
    }
    range
}
