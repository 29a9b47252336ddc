use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::document::{Document, DocumentWriter};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::locale::Locale;
use crate::providers::Provider;
use crate::translation::core::pause;
use crate::translation::DocumentPipeline;

// @module: Batch controller for blog article translation

/// A document that could not be translated
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub message: String,
}

/// What a dry run would have done with one document
#[derive(Debug, Clone)]
pub struct DocumentPreview {
    pub path: PathBuf,
    pub title: Option<String>,
    pub targets: Vec<Locale>,
}

impl fmt::Display for DocumentPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets = self.targets.iter().map(Locale::code).collect::<Vec<_>>();
        write!(
            f,
            "{} \"{}\" -> {}",
            display_name(&self.path),
            self.title.as_deref().unwrap_or("<untitled>"),
            targets.join(", ")
        )
    }
}

/// Outcome of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Source documents found
    pub total: usize,
    /// Documents translated (or previewed) without error
    pub succeeded: usize,
    pub failed: Vec<DocumentFailure>,
    /// Files written, in write order
    pub written: Vec<PathBuf>,
    pub previews: Vec<DocumentPreview>,
    pub dry_run: bool,
    /// The source directory held no matching files
    pub no_input: bool,
}

impl BatchReport {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: {} of {} documents would be translated ({} unreadable)",
                self.succeeded,
                self.total,
                self.failed.len()
            )
        } else {
            format!(
                "Translated {} of {} documents: {} files written, {} failed",
                self.succeeded,
                self.total,
                self.written.len(),
                self.failed.len()
            )
        }
    }
}

/// Main application controller for the translation batch
pub struct Controller {
    // @field: App configuration
    config: Config,

    /// Absent for dry runs
    pipeline: Option<DocumentPipeline>,

    writer: DocumentWriter,

    show_progress: bool,
}

impl Controller {
    /// Controller that can only preview documents
    pub fn dry_run(config: Config) -> Self {
        let writer = DocumentWriter::new(config.content_root.clone(), config.extension());
        Self {
            config,
            pipeline: None,
            writer,
            show_progress: false,
        }
    }

    // @method: Create a controller translating through `provider`
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Self {
        let pipeline = DocumentPipeline::from_config(provider, &config);
        Self {
            pipeline: Some(pipeline),
            ..Self::dry_run(config)
        }
    }

    /// Show a progress bar over documents
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Translate every source document into every target locale
    ///
    /// Only setup problems are returned as errors. A document that fails is
    /// logged and recorded in the report, and the batch moves on.
    pub async fn run(&self, dry_run: bool) -> Result<BatchReport, AppError> {
        let source_dir = self.config.source_dir();
        if !FileManager::dir_exists(&source_dir) {
            return Err(AppError::SourceDirMissing(source_dir));
        }

        let pipeline = match (&self.pipeline, dry_run) {
            (_, true) => None,
            (Some(pipeline), false) => Some(pipeline),
            (None, false) => {
                return Err(AppError::Config(
                    "A translation provider is required outside dry-run mode".to_string(),
                ))
            }
        };

        let files = FileManager::list_files(&source_dir, self.config.extension()).map_err(AppError::file)?;
        let mut report = BatchReport::new(dry_run);
        if files.is_empty() {
            warn!(
                "No .{} files found in {}",
                self.config.extension(),
                source_dir.display()
            );
            report.no_input = true;
            return Ok(report);
        }

        report.total = files.len();
        info!(
            "Found {} document(s) in {} for {}",
            files.len(),
            source_dir.display(),
            self.targets_label()
        );

        let progress = self.progress_bar(files.len() as u64);
        let document_delay = Duration::from_millis(self.config.translation.document_delay_ms);

        for (index, path) in files.iter().enumerate() {
            let file_name = display_name(path);
            progress.set_message(file_name.clone());

            let outcome = match pipeline {
                None => self.preview(path).map(|preview| report.previews.push(preview)),
                Some(pipeline) => {
                    info!("Processing {}", file_name);
                    self.translate_document(pipeline, path, &mut report.written).await
                }
            };

            match outcome {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    error!("Failed to process {}: {}", file_name, e);
                    if let AppError::Translation(inner) = &e {
                        if inner.is_terminal() {
                            warn!("This error will most likely repeat for the remaining documents");
                        }
                    }
                    report.failed.push(DocumentFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }

            progress.inc(1);
            if pipeline.is_some() && index + 1 < files.len() {
                pause(document_delay).await;
            }
        }

        progress.finish_and_clear();
        Ok(report)
    }

    /// Parse a document and log what would be produced from it
    fn preview(&self, path: &Path) -> Result<DocumentPreview, AppError> {
        let raw = FileManager::read_to_string(path).map_err(AppError::file)?;
        let document = Document::parse(&raw)?;
        let preview = DocumentPreview {
            path: path.to_path_buf(),
            title: document.title().map(str::to_string),
            targets: self.config.target_locales.clone(),
        };

        info!("[dry-run] {}", preview);
        Ok(preview)
    }

    /// Translate one document into every target locale, writing each result
    ///
    /// Files written for earlier locales are kept when a later locale fails.
    async fn translate_document(
        &self,
        pipeline: &DocumentPipeline,
        path: &Path,
        written: &mut Vec<PathBuf>,
    ) -> Result<(), AppError> {
        let raw = FileManager::read_to_string(path).map_err(AppError::file)?;
        let document = Document::parse(&raw)?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let locale_delay = Duration::from_millis(self.config.translation.locale_delay_ms);

        for (index, target) in self.config.target_locales.iter().enumerate() {
            if index > 0 {
                pause(locale_delay).await;
            }

            let translated = pipeline.translate(&document, *target, &stem).await?;
            let output = self
                .writer
                .write(&translated.document, translated.locale, &translated.slug)?;
            info!("Saved: {}", output.display());
            written.push(output);
        }

        debug!("Finished {}", display_name(path));
        Ok(())
    }

    fn targets_label(&self) -> String {
        self.config
            .target_locales
            .iter()
            .map(Locale::code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
