/*!
 * Error types for the blog-translate application.
 *
 * Every stage of the pipeline has its own error enum, defined with the
 * thiserror crate. `AppError` wraps them at the batch level.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Too many requests in a short period
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The API rejected the credential
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The account's character quota is used up
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),
}

/// Errors raised while reading or writing a frontmatter document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document does not start with a '---' frontmatter delimiter")]
    MissingFrontmatter,

    #[error("Frontmatter block is not closed by a '---' delimiter")]
    UnterminatedFrontmatter,

    #[error("Invalid frontmatter YAML: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("Frontmatter must be a mapping of field names to values")]
    NotAMapping,

    #[error("Failed to serialize frontmatter: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The provider refused the request because the quota is exhausted
    #[error("Translation quota exceeded, check your plan: {0}")]
    QuotaExceeded(String),

    /// The provider rejected the API key
    #[error("Authorization with the translation API failed, check your API key: {0}")]
    AuthorizationFailure(String),

    /// Any other provider failure, with an excerpt of the text being translated
    #[error("Failed to translate \"{excerpt}\": {source}")]
    Failed {
        excerpt: String,
        #[source]
        source: ProviderError,
    },
}

impl TranslationError {
    /// Classify a provider error raised while translating `text`
    pub fn from_provider(error: ProviderError, text: &str) -> Self {
        match error {
            ProviderError::QuotaExceeded(message) => Self::QuotaExceeded(message),
            ProviderError::AuthenticationError(message) => Self::AuthorizationFailure(message),
            other => Self::Failed {
                excerpt: excerpt(text, 60),
                source: other,
            },
        }
    }

    /// Whether the error will repeat for every later request
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_) | Self::AuthorizationFailure(_))
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The directory holding the source articles does not exist
    #[error("Source directory not found: {}", .0.display())]
    SourceDirMissing(PathBuf),

    /// Error from reading or writing a document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Wrap a file-system failure reported through `FileManager`
    pub fn file(error: anyhow::Error) -> Self {
        Self::File(format!("{:#}", error))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
