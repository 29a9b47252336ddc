/*!
 * Common test utilities for the blog-translate test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

use blog_translate::app_config::{Config, TranslationConfig};

static INIT_LOGGER: Once = Once::new();

/// Route library logs through env_logger once per test binary
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Configuration rooted at `content_root` with every delay disabled
pub fn test_config(content_root: &Path) -> Config {
    Config {
        content_root: content_root.to_path_buf(),
        translation: TranslationConfig::default().without_delays(),
        ..Config::default()
    }
}

/// A Portuguese article with the usual frontmatter fields
pub fn sample_article(title: &str) -> String {
    format!(
        r#"---
title: {title}
description: Um guia completo
locale: pt
canonicalSlug: guia-completo
keywords:
  - Endomidface
  - rejuvenescimento facial
faq:
  - question: Quanto tempo dura?
    answer: Cerca de dez anos.
image:
  src: /images/blog/pt/capa.jpg
  alt: Foto da clínica
---

A técnica foi criada pelo Dr. Robério Brandão. [Veja mais](/pt/blog/artigo).
"#
    )
}

/// Write `sample_article(title)` as `<root>/pt/<filename>`
pub fn create_source_article(content_root: &Path, filename: &str, title: &str) -> Result<PathBuf> {
    create_test_file(&content_root.join("pt"), filename, &sample_article(title))
}

/// Files directly inside `dir`, sorted by name
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
