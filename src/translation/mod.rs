/*!
 * Translation of blog articles into the other site locales.
 *
 * This module is split into several submodules:
 *
 * - `core`: Translator adapter over a `Provider`, with size-bounded requests
 * - `chunking`: Sentence-based splitting of long texts
 * - `fields`: Strategy table and per-field frontmatter translation
 * - `links`: Internal link and asset path rewriting
 * - `slug`: Slug generation from translated titles
 * - `pipeline`: One document into one target locale
 */

// Re-export main types for easier usage
pub use self::core::{TranslationOptions, TranslationService};
pub use self::fields::{FieldStrategy, FieldTable, FieldTranslator};
pub use self::links::LinkRewriter;
pub use self::pipeline::{DocumentPipeline, TranslatedDocument};
pub use self::slug::slugify;

// Submodules
pub mod chunking;
pub mod core;
pub mod fields;
pub mod links;
pub mod pipeline;
pub mod slug;
