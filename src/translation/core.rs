/*!
 * Core translation service implementation.
 *
 * `TranslationService` wraps a `Provider` behind a size-bounded interface:
 * empty texts are skipped, long texts are chunked, and provider failures are
 * classified into `TranslationError`. Requests are strictly sequential.
 */

use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::chunking::split_into_chunks;
use crate::app_config::{Config, TranslationConfig};
use crate::errors::TranslationError;
use crate::locale::Locale;
use crate::providers::Provider;

/// Size limits and pacing for provider requests
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Texts at or above this many characters are chunked
    pub max_chars_per_request: usize,

    /// Upper bound on the size of each chunk
    pub chunk_chars: usize,

    /// Pause after each chunk request
    pub request_delay: Duration,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self::from(&TranslationConfig::default())
    }
}

impl From<&TranslationConfig> for TranslationOptions {
    fn from(config: &TranslationConfig) -> Self {
        Self {
            max_chars_per_request: config.max_chars_per_request,
            chunk_chars: config.chunk_chars,
            request_delay: Duration::from_millis(config.request_delay_ms),
        }
    }
}

/// Sleep for `delay` unless it is zero
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Main translation service wrapping one provider
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Locale of the texts being translated
    source: Locale,

    /// Translation options
    pub options: TranslationOptions,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn Provider>, source: Locale, options: TranslationOptions) -> Self {
        Self {
            provider,
            source,
            options,
        }
    }

    /// Create a service using the source locale and limits from `config`
    pub fn from_config(provider: Arc<dyn Provider>, config: &Config) -> Self {
        Self::new(
            provider,
            config.source_locale,
            TranslationOptions::from(&config.translation),
        )
    }

    pub fn source_locale(&self) -> Locale {
        self.source
    }

    /// Translate a text of any length into `target`
    pub async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let length = text.chars().count();
        if length < self.options.max_chars_per_request {
            return self.request(text, target).await;
        }

        let chunks = split_into_chunks(text, self.options.chunk_chars);
        debug!(
            "Text of {} chars split into {} chunks for {}",
            length,
            chunks.len(),
            target
        );

        let mut translated = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            translated.push(self.request(chunk, target).await?);
            pause(self.options.request_delay).await;
        }

        Ok(translated.join(" "))
    }

    async fn request(&self, text: &str, target: Locale) -> Result<String, TranslationError> {
        self.provider
            .translate(
                text,
                Some(self.source.deepl_source_code()),
                target.deepl_target_code(),
            )
            .await
            .map_err(|e| TranslationError::from_provider(e, text))
    }
}
