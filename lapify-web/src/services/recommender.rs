//! Recommendation text from a Gemini-style text-generation API
//!
//! Best-effort enrichment: a missing key, a transport error, a bad status or
//! an empty answer all degrade to a fixed sentence. Nothing here returns an
//! error to the caller.

use lapify_common::{Error, Laptop, Preferences, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Public generative-language endpoint
pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for recommendation text
pub const DEFAULT_GENAI_MODEL: &str = "gemini-1.5-pro";

/// Substituted when the service fails or is not configured
pub const GENERIC_REASONING: &str =
    "These laptops offer the best specs within your price range and preferences.";

/// Substituted when the service answers with no text
pub const EMPTY_REASONING: &str =
    "Highly recommended for their balance of price and performance based on your requirements.";

/// How many ranked laptops are described
pub const TOP_N: usize = 3;

/// Recommendation client settings
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// No key disables the remote call
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GENAI_MODEL.to_string(),
            base_url: DEFAULT_GENAI_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Text-generation client
#[derive(Debug, Clone)]
pub struct Recommender {
    http_client: reqwest::Client,
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// True when an API key is configured
    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Explain why `top` suits `prefs`, never failing
    pub async fn explain(&self, top: &[&Laptop], prefs: &Preferences) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("Recommendation service not configured, using generic text");
            return GENERIC_REASONING.to_string();
        };

        let prompt = build_prompt(top, prefs);
        match self.generate(api_key, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_REASONING.to_string(),
            Err(e) => {
                warn!(error = %e, "Recommendation request failed");
                GENERIC_REASONING.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

/// Prompt describing the preferences and up to [`TOP_N`] ranked laptops
pub fn build_prompt(top: &[&Laptop], prefs: &Preferences) -> String {
    let summary = top
        .iter()
        .take(TOP_N)
        .map(|l| {
            format!(
                "- {} {}: ${}, {}GB RAM, {}GB Storage, {} CPU, {} GPU.",
                l.brand, l.model, l.price, l.ram_gb, l.storage_gb, l.cpu_brand, l.gpu_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let brand = if prefs.brand.is_empty() {
        "No preference"
    } else {
        prefs.brand.as_str()
    };

    format!(
        "I have a user looking for a laptop with these preferences:\n\
         - Price Range: ${} to ${}\n\
         - Preferred Brands: {}\n\
         - Type: {}\n\
         - Min RAM: {}GB\n\
         - Min Storage: {}GB\n\
         - Min Screen: {}\"\n\
         \n\
         Here are the top {} matches I found:\n\
         {}\n\
         \n\
         Briefly explain why these specific laptops are great choices for this user.\n\
         Focus on value for money and performance in 3-4 concise bullet points.\n\
         Keep it professional but friendly. Do not use Markdown headers.",
        prefs.min_price,
        prefs.max_price,
        brand,
        prefs.laptop_type,
        prefs.min_ram,
        prefs.min_storage,
        prefs.min_screen_size,
        top.len().min(TOP_N),
        summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapify_common::catalog::fallback_laptops;

    #[test]
    fn test_prompt_lists_at_most_three() {
        let laptops: Vec<Laptop> = (0..5)
            .map(|i| Laptop {
                brand: format!("Brand{}", i),
                model: "M".into(),
                ..Laptop::default()
            })
            .collect();
        let refs: Vec<&Laptop> = laptops.iter().collect();
        let prompt = build_prompt(&refs, &Preferences::default());

        assert!(prompt.contains("Brand0 M"));
        assert!(prompt.contains("Brand2 M"));
        assert!(!prompt.contains("Brand3 M"));
        assert!(prompt.contains("top 3 matches"));
        assert!(prompt.contains("Preferred Brands: No preference"));
    }

    #[test]
    fn test_prompt_formats_laptop_line() {
        let laptops = fallback_laptops();
        let refs: Vec<&Laptop> = laptops.iter().collect();
        let prompt = build_prompt(&refs, &Preferences::default());
        assert!(prompt.contains(
            "- ASUS Zenbook 14 OLED: $1099, 16GB RAM, 1024GB Storage, Intel CPU, Integrated GPU."
        ));
        assert!(prompt.contains("Price Range: $0 to $10000"));
    }

    #[tokio::test]
    async fn test_unconfigured_returns_generic_text() {
        let recommender = Recommender::new(RecommenderConfig::default()).unwrap();
        assert!(!recommender.is_enabled());
        let text = recommender.explain(&[], &Preferences::default()).await;
        assert_eq!(text, GENERIC_REASONING);
    }
}
