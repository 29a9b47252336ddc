/*!
 * Provider implementations for the external translation capability.
 *
 * - `deepl`: DeepL REST API client
 * - `mock`: in-memory provider for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Character usage reported by a provider account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderUsage {
    /// Characters translated in the current billing period
    pub character_count: u64,
    /// Characters allowed in the current billing period
    pub character_limit: u64,
}

/// Common trait for translation providers
///
/// The provider sees a single text and a target language code. Chunking,
/// delays and field selection happen above it in `TranslationService`.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate `text` into the language identified by `target_language`
    ///
    /// # Arguments
    /// * `text` - Text to translate, already within the provider's size limit
    /// * `source_language` - Provider code of the source language, if known
    /// * `target_language` - Provider code of the target language
    async fn translate(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Report account usage; also serves as a connection and credential check
    async fn usage(&self) -> Result<ProviderUsage, ProviderError>;

    /// Human readable provider name for logs
    fn name(&self) -> &str;
}

pub mod deepl;
pub mod mock;
