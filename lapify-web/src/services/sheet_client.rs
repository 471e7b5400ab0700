//! Spreadsheet CSV export client
//!
//! One GET per ingestion. No retry and no client-side timeout: a failed
//! attempt goes straight to the fallback path in [`super::ingest`].

use lapify_common::{Error, Result, SourceLocator};
use reqwest::Url;

/// Public spreadsheet host
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";

const USER_AGENT: &str = concat!("lapify/", env!("CARGO_PKG_VERSION"));

/// Fetches a published sheet tab as CSV text
#[derive(Debug, Clone)]
pub struct SheetClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SheetClient {
    /// Client against `base_url` (tests point this at a mock server)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// `{base}/spreadsheets/d/{sheet_id}/export?format=csv&sheet={tab}`
    pub fn export_url(&self, locator: &SourceLocator) -> Result<Url> {
        let raw = format!(
            "{}/spreadsheets/d/{}/export",
            self.base_url.trim_end_matches('/'),
            locator.sheet_id
        );
        Url::parse_with_params(&raw, &[("format", "csv"), ("sheet", locator.tab_name.as_str())])
            .map_err(|e| Error::Config(format!("Invalid sheet URL {}: {}", raw, e)))
    }

    /// Download the tab's CSV text
    ///
    /// Any non-success status is an error; the body is not inspected.
    pub async fn fetch_csv(&self, locator: &SourceLocator) -> Result<String> {
        let url = self.export_url(locator)?;

        tracing::debug!(url = %url, "Fetching sheet export");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message: "Sheet not accessible. Ensure it is published to the web.".to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_encodes_tab() {
        let client = SheetClient::new("https://docs.google.com/").unwrap();
        let url = client
            .export_url(&SourceLocator::new("abc123", "Laptops & More"))
            .unwrap();

        assert_eq!(url.path(), "/spreadsheets/d/abc123/export");
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("format".to_string(), "csv".to_string()),
                ("sheet".to_string(), "Laptops & More".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_creation() {
        assert!(SheetClient::new(DEFAULT_SHEETS_BASE_URL).is_ok());
    }
}
