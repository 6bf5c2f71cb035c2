use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TemplateError {
    #[error("Workbook error: {path} - {message}")]
    Workbook { path: String, message: String },

    #[error("Sheet not found: {sheet}")]
    SheetNotFound { sheet: String },

    #[error("Sheet read error: {sheet} - {message}")]
    SheetRead { sheet: String, message: String },

    /// Row is narrower than the sheet layout requires.
    #[error("Missing column: {sheet} row {row} has no column {column}")]
    MissingColumn {
        sheet: String,
        row: usize,
        column: usize,
    },

    #[error("Malformed cell: {sheet} row {row} column {column} - {message}")]
    MalformedCell {
        sheet: String,
        row: usize,
        column: usize,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TemplateError {
    pub fn workbook(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn sheet_not_found(sheet: impl Into<String>) -> Self {
        Self::SheetNotFound {
            sheet: sheet.into(),
        }
    }

    pub fn sheet_read(sheet: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SheetRead {
            sheet: sheet.into(),
            message: message.into(),
        }
    }

    pub fn missing_column(sheet: impl Into<String>, row: usize, column: usize) -> Self {
        Self::MissingColumn {
            sheet: sheet.into(),
            row,
            column,
        }
    }

    pub fn malformed_cell(
        sheet: impl Into<String>,
        row: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedCell {
            sheet: sheet.into(),
            row,
            column,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Workbook { .. } => "WORKBOOK_ERROR",
            Self::SheetNotFound { .. } => "SHEET_NOT_FOUND",
            Self::SheetRead { .. } => "SHEET_READ_ERROR",
            Self::MissingColumn { .. } => "MISSING_COLUMN",
            Self::MalformedCell { .. } => "MALFORMED_CELL",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;

impl From<config::ConfigError> for TemplateError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
