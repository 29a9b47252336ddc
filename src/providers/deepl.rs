use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{Provider, ProviderUsage};

const FREE_ENDPOINT: &str = "https://api-free.deepl.com";
const PRO_ENDPOINT: &str = "https://api.deepl.com";

/// DeepL answers 456 when the character quota is used up
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// DeepL client for interacting with the DeepL REST API
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL without the `/v2` suffix
    endpoint: Url,
}

/// Translate request body
#[derive(Debug, Serialize)]
pub struct DeepLRequest<'a> {
    /// Texts to translate; this client always sends exactly one
    text: Vec<&'a str>,

    /// Target language code, e.g. "EN-US"
    target_lang: &'a str,

    /// Source language code; DeepL detects it when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

/// Translate response body
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    pub translations: Vec<DeepLTranslation>,
}

/// One translated text
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

/// Usage response body
#[derive(Debug, Deserialize)]
pub struct DeepLUsageResponse {
    pub character_count: u64,
    pub character_limit: u64,
}

impl DeepL {
    /// Create a new DeepL client
    ///
    /// When `endpoint` is `None`, keys ending in `:fx` use the free API host
    /// and every other key uses the pro host.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::AuthenticationError(
                "DeepL API key is empty".to_string(),
            ));
        }

        let endpoint = endpoint
            .map(str::to_string)
            .unwrap_or_else(|| Self::default_endpoint(&api_key).to_string());
        let endpoint = Url::parse(endpoint.trim_end_matches('/'))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid DeepL endpoint '{}': {}", endpoint, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// API host matching the key type
    pub fn default_endpoint(api_key: &str) -> &'static str {
        if api_key.trim().ends_with(":fx") {
            FREE_ENDPOINT
        } else {
            PRO_ENDPOINT
        }
    }

    fn api_url(&self, path: &str) -> Result<Url, ProviderError> {
        let base = format!("{}/", self.endpoint.as_str().trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid DeepL URL: {}", e)))
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }

    /// Map a non-success status to a provider error
    fn status_error(status: StatusCode, body: String) -> ProviderError {
        match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationError(format!("DeepL rejected the API key ({}): {}", status, body)),
            STATUS_QUOTA_EXCEEDED => ProviderError::QuotaExceeded(format!("DeepL character quota exhausted: {}", body)),
            429 => ProviderError::RateLimitExceeded(format!("DeepL throttled the request: {}", body)),
            code => ProviderError::ApiError {
                status_code: code,
                message: body,
            },
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("DeepL API error ({}): {}", status, body);
        Err(Self::status_error(status, body))
    }
}

impl fmt::Debug for DeepL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepL")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Provider for DeepL {
    async fn translate(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let url = self.api_url("v2/translate")?;
        let request = DeepLRequest {
            text: vec![text],
            target_lang: target_language,
            source_lang: source_language,
        };

        debug!("DeepL request: {} chars -> {}", text.chars().count(), target_language);

        let response = self
            .client
            .post(url)
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to send request to DeepL API: {}", e)))?;

        let response = Self::check(response).await?;
        let body = response
            .json::<DeepLResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse DeepL response: {}", e)))?;

        body.translations
            .into_iter()
            .next()
            .map(|translation| translation.text)
            .ok_or_else(|| ProviderError::ParseError("DeepL returned no translations".to_string()))
    }

    async fn usage(&self) -> Result<ProviderUsage, ProviderError> {
        let url = self.api_url("v2/usage")?;
        let response = self
            .client
            .get(url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to reach DeepL API: {}", e)))?;

        let response = Self::check(response).await?;
        let usage = response
            .json::<DeepLUsageResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse DeepL usage: {}", e)))?;

        Ok(ProviderUsage {
            character_count: usage.character_count,
            character_limit: usage.character_limit,
        })
    }

    fn name(&self) -> &str {
        "DeepL"
    }
}
