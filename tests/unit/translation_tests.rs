/*!
 * Tests for the document translation pipeline through the public API
 */

use anyhow::Result;
use serde_yaml::Value;
use std::sync::Arc;

use blog_translate::document::Document;
use blog_translate::locale::Locale;
use blog_translate::providers::mock::MockProvider;
use blog_translate::translation::{slugify, DocumentPipeline, LinkRewriter};
use crate::common;

/// Test that every locale's output keeps the source field set and leaves protected terms alone
#[tokio::test]
async fn test_pipeline_withSampleArticle_shouldPreserveFieldsAndVerbatimTerms() -> Result<()> {
    common::init_logger();
    let provider = MockProvider::working();
    let config = common::test_config(std::path::Path::new("unused"));
    let pipeline = DocumentPipeline::from_config(Arc::new(provider.clone()), &config);
    let source = Document::parse(&common::sample_article("Olá Mundo"))?;
    let source_keys: Vec<Value> = source.metadata.keys().cloned().collect();

    for target in [Locale::En, Locale::Es] {
        let translated = pipeline.translate(&source, target, "ola-mundo").await?;
        let metadata = &translated.document.metadata;

        let keys: Vec<Value> = metadata.keys().cloned().collect();
        assert_eq!(keys, source_keys);
        assert_eq!(metadata["locale"], Value::from(target.code()));
        assert_eq!(metadata["canonicalSlug"], Value::from("guia-completo"));
        assert_eq!(metadata["keywords"][0], Value::from("Endomidface"));
        assert_eq!(
            metadata["image"]["src"],
            Value::from(format!("/images/blog/{}/capa.jpg", target.code()))
        );
    }

    assert!(provider.requests().iter().all(|r| r.text != "Endomidface"));

    Ok(())
}

/// Test that the body's internal links move to each target locale
#[tokio::test]
async fn test_pipeline_withInternalLink_shouldRewritePerLocale() -> Result<()> {
    let provider = MockProvider::working().with_custom_response(|req| req.text.clone());
    let config = common::test_config(std::path::Path::new("unused"));
    let pipeline = DocumentPipeline::from_config(Arc::new(provider), &config);
    let source = Document::parse("---\ntitle: Olá Mundo\n---\n\n[Veja mais](/pt/blog/artigo)")?;

    let english = pipeline.translate(&source, Locale::En, "x").await?;
    let spanish = pipeline.translate(&source, Locale::Es, "x").await?;

    assert_eq!(english.document.content, "[Veja mais](/blog/artigo)");
    assert_eq!(spanish.document.content, "[Veja mais](/es/blog/artigo)");

    Ok(())
}

/// Test that a long body is sent in several requests and reassembled in order
#[tokio::test]
async fn test_pipeline_withLongBody_shouldChunkWithinLimit() -> Result<()> {
    let provider = MockProvider::working().with_custom_response(|req| req.text.clone());
    let mut config = common::test_config(std::path::Path::new("unused"));
    config.translation.max_chars_per_request = 500;
    config.translation.chunk_chars = 400;
    let pipeline = DocumentPipeline::from_config(Arc::new(provider.clone()), &config);

    let body = (0..60)
        .map(|i| format!("Esta é a frase número {} do artigo", i))
        .collect::<Vec<_>>()
        .join(". ");
    let source = Document::parse(&format!("---\ntitle: Longo\n---\n\n{}", body))?;

    let translated = pipeline.translate(&source, Locale::Es, "longo").await?;

    assert_eq!(translated.document.content, body);
    let body_requests: Vec<_> = provider
        .requests()
        .into_iter()
        .filter(|r| r.text != "Longo")
        .collect();
    assert!(body_requests.len() > 1);
    assert!(body_requests.iter().all(|r| r.text.chars().count() <= 400));

    Ok(())
}

/// Test that link rewriting is stable when applied to already rewritten text
#[test]
fn test_rewrite_links_appliedTwice_shouldBeIdempotent() {
    let text = "[a](/pt/blog/x) [b](/pt/sobre) [c](/pt/tecnicas/y) [d](https://example.com)";
    for target in [Locale::En, Locale::Es] {
        let rewriter = LinkRewriter::new(Locale::Pt, target);
        let once = rewriter.rewrite_links(text);
        assert_eq!(rewriter.rewrite_links(&once), once);
    }
}

/// Test slug generation for typical translated titles
#[test]
fn test_slugify_withTranslatedTitles_shouldBeUrlSafe() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("Guía de la técnica Endomidface"), "guia-de-la-tecnica-endomidface");
}
