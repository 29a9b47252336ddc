use std::path::PathBuf;

use log::debug;

use super::model::Document;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::locale::Locale;

/// Writes translated documents under `{content_root}/{locale}/{slug}.{ext}`
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    content_root: PathBuf,
    extension: String,
}

impl DocumentWriter {
    pub fn new(content_root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            content_root: content_root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Destination of the article `slug` in `locale`
    pub fn output_path(&self, locale: Locale, slug: &str) -> PathBuf {
        self.content_root
            .join(locale.code())
            .join(format!("{}.{}", slug, self.extension))
    }

    /// Render and atomically write `document`, returning the written path
    pub fn write(&self, document: &Document, locale: Locale, slug: &str) -> Result<PathBuf, AppError> {
        let path = self.output_path(locale, slug);
        let rendered = document.render()?;
        FileManager::write_atomic(&path, &rendered).map_err(AppError::file)?;
        debug!("Wrote {} bytes to {:?}", rendered.len(), path);
        Ok(path)
    }
}
