/*!
 * Integration tests for complete batch runs over a content tree
 */

use anyhow::Result;
use std::sync::Arc;

use blog_translate::app_controller::Controller;
use blog_translate::document::Document;
use blog_translate::errors::AppError;
use blog_translate::providers::mock::{MockProvider, MockRequest};
use crate::common;

fn english_titles(request: &MockRequest) -> String {
    match (request.target_language.as_str(), request.text.as_str()) {
        ("EN-US", "Olá Mundo") => "Hello World".to_string(),
        ("ES", "Olá Mundo") => "Hola Mundo".to_string(),
        _ => MockProvider::tag(&request.text, &request.target_language),
    }
}

/// Test a full run writing one file per target locale
#[tokio::test]
async fn test_run_withSingleArticle_shouldWriteEachLocale() -> Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_source_article(root, "ola-mundo.mdx", "Olá Mundo")?;

    let provider = MockProvider::working().with_custom_response(english_titles);
    let controller = Controller::with_provider(common::test_config(root), Arc::new(provider.clone()));

    let report = controller.run(false).await?;

    assert_eq!(report.total, 1);
    assert_eq!(report.succeeded, 1);
    assert!(report.failed.is_empty());
    assert_eq!(
        report.written,
        vec![root.join("en").join("hello-world.mdx"), root.join("es").join("hola-mundo.mdx")]
    );

    let english = Document::parse(&std::fs::read_to_string(root.join("en/hello-world.mdx"))?)?;
    assert_eq!(english.title(), Some("Hello World"));
    assert_eq!(english.field_str("locale"), Some("en"));
    assert_eq!(english.field_str("canonicalSlug"), Some("guia-completo"));
    assert!(english.content.contains("(/blog/artigo)"));

    let spanish = Document::parse(&std::fs::read_to_string(root.join("es/hola-mundo.mdx"))?)?;
    assert_eq!(spanish.field_str("locale"), Some("es"));
    assert!(spanish.content.contains("(/es/blog/artigo)"));

    // Source is left untouched
    assert_eq!(
        std::fs::read_to_string(root.join("pt/ola-mundo.mdx"))?,
        common::sample_article("Olá Mundo")
    );

    Ok(())
}

/// Test that a dry run neither calls the provider nor writes files
#[tokio::test]
async fn test_run_withDryRun_shouldNotCallProviderOrWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_source_article(root, "a.mdx", "Primeiro")?;
    common::create_source_article(root, "b.mdx", "Segundo")?;

    let provider = MockProvider::working();
    let controller = Controller::with_provider(common::test_config(root), Arc::new(provider.clone()));

    let report = controller.run(true).await?;

    assert!(report.dry_run);
    assert_eq!(report.succeeded, 2);
    assert_eq!(provider.request_count(), 0);
    assert!(report.written.is_empty());
    assert!(!root.join("en").exists());
    assert!(!root.join("es").exists());

    let titles: Vec<_> = report.previews.iter().filter_map(|p| p.title.clone()).collect();
    assert_eq!(titles, vec!["Primeiro", "Segundo"]);

    Ok(())
}

/// Test that a missing source directory aborts before anything is read
#[tokio::test]
async fn test_run_withMissingSourceDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let provider = MockProvider::working();
    let controller =
        Controller::with_provider(common::test_config(temp_dir.path()), Arc::new(provider.clone()));

    let result = controller.run(false).await;

    assert!(matches!(result, Err(AppError::SourceDirMissing(_))));
    assert_eq!(provider.request_count(), 0);

    Ok(())
}

/// Test that an empty source directory reports no input
#[tokio::test]
async fn test_run_withEmptySourceDir_shouldReportNoInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    std::fs::create_dir_all(temp_dir.path().join("pt"))?;
    let controller = Controller::dry_run(common::test_config(temp_dir.path()));

    let report = controller.run(true).await?;

    assert!(report.no_input);
    assert_eq!(report.total, 0);

    Ok(())
}

/// Test that a broken document is reported while the rest of the batch completes
#[tokio::test]
async fn test_run_withInvalidDocument_shouldIsolateFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(&root.join("pt"), "a-quebrado.mdx", "sem frontmatter")?;
    common::create_source_article(root, "b-valido.mdx", "Válido")?;

    let provider = MockProvider::working();
    let controller = Controller::with_provider(common::test_config(root), Arc::new(provider));

    let report = controller.run(false).await?;

    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].path.ends_with("a-quebrado.mdx"));
    assert_eq!(common::list_dir(&root.join("en")).len(), 1);
    assert_eq!(common::list_dir(&root.join("es")).len(), 1);

    Ok(())
}

/// Test that quota exhaustion fails each document without aborting the batch
#[tokio::test]
async fn test_run_withQuotaExceeded_shouldRecordEveryDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_source_article(root, "a.mdx", "Um")?;
    common::create_source_article(root, "b.mdx", "Dois")?;

    let provider = MockProvider::quota_exceeded();
    let controller = Controller::with_provider(common::test_config(root), Arc::new(provider.clone()));

    let report = controller.run(false).await?;

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed.len(), 2);
    assert!(report.failed[0].message.contains("quota"));
    assert_eq!(provider.request_count(), 2);
    assert!(report.written.is_empty());

    Ok(())
}

/// Test that a later locale failing keeps the files already written for earlier ones
#[tokio::test]
async fn test_run_withLaterLocaleFailing_shouldKeepEarlierOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_source_article(root, "ola-mundo.mdx", "Olá Mundo")?;

    let provider = MockProvider::fail_target("ES").with_custom_response(english_titles);
    let controller = Controller::with_provider(common::test_config(root), Arc::new(provider));

    let report = controller.run(false).await?;

    let english = root.join("en").join("hello-world.mdx");
    assert!(english.exists());
    assert_eq!(report.written, vec![english]);
    assert!(common::list_dir(&root.join("es")).is_empty());
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, root.join("pt").join("ola-mundo.mdx"));

    Ok(())
}

/// Test that an unwritable locale folder is reported as a file error
#[tokio::test]
async fn test_run_withLocaleFolderBlocked_shouldRecordFileError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_source_article(root, "ola-mundo.mdx", "Olá Mundo")?;
    std::fs::write(root.join("en"), "not a directory")?;

    let controller = Controller::with_provider(common::test_config(root), Arc::new(MockProvider::working()));

    let report = controller.run(false).await?;

    assert_eq!(report.failed.len(), 1);
    assert!(
        report.failed[0].message.starts_with("File error"),
        "got {}",
        report.failed[0].message
    );

    Ok(())
}
