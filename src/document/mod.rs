/*!
 * Frontmatter documents: parsing, rendering and writing.
 *
 * - `model`: the `Document` type, its parser and serializer
 * - `writer`: atomic, locale-scoped output of translated documents
 */

pub mod model;
pub mod writer;

pub use model::Document;
pub use writer::DocumentWriter;
