//! Resource Metadata Template Module
//!
//! Maps the sheets of the EJP-RD VP resource metadata workbook onto
//! `vp-models` records. Columns are positional; header text is never read.
//!
//! - `cell`: typed view over raw spreadsheet cells and the `;` list splitter
//! - `source`: where worksheets come from (file on disk, open handle, memory)
//! - `walker`: the shared row walk every sheet goes through
//! - `reader`: one read operation per resource kind

pub mod cell;
pub mod source;
pub mod walker;
pub mod reader;

pub use cell::{split_list, CellValue};
pub use source::{ExcelWorkbook, InMemoryWorkbook, TemplateFile, WorkbookSource};
pub use walker::{walk_rows, SheetRow};
pub use reader::{sheets, TemplateContents, TemplateReader};
