//! Source locator: which published sheet and tab to ingest

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Placeholder sheet id; deployments set their own via config or env
pub const DEFAULT_SHEET_ID: &str = "lapify-catalog";

/// First tab of a new sheet
pub const DEFAULT_TAB_NAME: &str = "Sheet1";

/// Identifies the remote dataset and its sub-partition (tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocator {
    pub sheet_id: String,
    pub tab_name: String,
}

impl SourceLocator {
    pub fn new(sheet_id: impl Into<String>, tab_name: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            tab_name: tab_name.into(),
        }
    }

    /// Reject locators that cannot name a sheet
    ///
    /// Values are trimmed; the sheet id must be non-empty and URL-path safe.
    pub fn validated(self) -> Result<Self> {
        let sheet_id = self.sheet_id.trim().to_string();
        let tab_name = self.tab_name.trim().to_string();

        if sheet_id.is_empty() {
            return Err(Error::InvalidInput("sheet_id must not be empty".to_string()));
        }
        if !sheet_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidInput(format!(
                "sheet_id contains invalid characters: {}",
                sheet_id
            )));
        }
        if tab_name.is_empty() {
            return Err(Error::InvalidInput("tab_name must not be empty".to_string()));
        }

        Ok(Self { sheet_id, tab_name })
    }
}

impl Default for SourceLocator {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_ID, DEFAULT_TAB_NAME)
    }
}
