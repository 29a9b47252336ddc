/*!
 * Tests for the document model and writer
 */

use anyhow::Result;
use blog_translate::document::{Document, DocumentWriter};
use blog_translate::errors::DocumentError;
use blog_translate::locale::Locale;
use crate::common;

/// Test that every frontmatter shape of a real article survives a parse
#[test]
fn test_parse_withSampleArticle_shouldExposeAllFields() -> Result<()> {
    let document = Document::parse(&common::sample_article("Olá Mundo"))?;

    assert_eq!(document.title(), Some("Olá Mundo"));
    assert_eq!(document.field_str("canonicalSlug"), Some("guia-completo"));
    assert!(document.metadata.get("faq").and_then(|v| v.as_sequence()).is_some());
    assert!(document.content.starts_with("A técnica"));

    Ok(())
}

/// Test that an empty header yields empty metadata
#[test]
fn test_parse_withEmptyHeader_shouldYieldEmptyMetadata() -> Result<()> {
    let document = Document::parse("---\n---\nTexto")?;
    assert!(document.metadata.is_empty());
    assert_eq!(document.content, "Texto");
    Ok(())
}

/// Test that a list header is rejected
#[test]
fn test_parse_withSequenceHeader_shouldFail() {
    let result = Document::parse("---\n- a\n- b\n---\nTexto");
    assert!(matches!(result, Err(DocumentError::NotAMapping)));
}

/// Test that the writer lays files out by locale and slug
#[test]
fn test_write_shouldCreateLocaleFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let writer = DocumentWriter::new(temp_dir.path(), "mdx");
    let document = Document::parse("---\ntitle: Hello World\nlocale: en\n---\n\nBody")?;

    let path = writer.write(&document, Locale::En, "hello-world")?;

    assert_eq!(path, temp_dir.path().join("en").join("hello-world.mdx"));
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, "---\ntitle: Hello World\nlocale: en\n---\n\nBody");

    Ok(())
}
