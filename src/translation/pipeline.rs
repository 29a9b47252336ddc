/*!
 * Per-locale document pipeline.
 *
 * One source document becomes one translated document per call: metadata is
 * translated field by field, the body is translated and its internal links
 * moved to the target locale, and a slug is derived from the translated title.
 */

use log::info;
use std::sync::Arc;

use super::core::TranslationService;
use super::fields::FieldTranslator;
use super::links::LinkRewriter;
use super::slug::document_slug;
use crate::app_config::Config;
use crate::document::Document;
use crate::errors::TranslationError;
use crate::locale::Locale;
use crate::providers::Provider;

/// A document produced for one target locale
#[derive(Debug, Clone)]
pub struct TranslatedDocument {
    pub locale: Locale,
    pub document: Document,
    /// File name without extension
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    service: TranslationService,
    fields: FieldTranslator,
}

impl DocumentPipeline {
    pub fn new(service: TranslationService, fields: FieldTranslator) -> Self {
        Self { service, fields }
    }

    pub fn from_config(provider: Arc<dyn Provider>, config: &Config) -> Self {
        Self::new(
            TranslationService::from_config(provider, config),
            FieldTranslator::from_config(config),
        )
    }

    /// Translate `source` into `target`
    ///
    /// `fallback_stem` is the source file stem, used for the slug when the
    /// translated title is missing or has no usable characters.
    pub async fn translate(
        &self,
        source: &Document,
        target: Locale,
        fallback_stem: &str,
    ) -> Result<TranslatedDocument, TranslationError> {
        info!(
            "Translating to {}...",
            target.language_name().unwrap_or(target.code())
        );

        let metadata = self
            .fields
            .translate_metadata(&self.service, &source.metadata, target)
            .await?;

        let content = self.service.translate(&source.content, target).await?;
        let content = LinkRewriter::new(self.service.source_locale(), target).rewrite_links(&content);

        let document = Document::new(metadata, content);
        let slug = document_slug(document.title(), fallback_stem);

        Ok(TranslatedDocument {
            locale: target,
            document,
            slug,
        })
    }
}
