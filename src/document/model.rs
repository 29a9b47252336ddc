/*!
 * Frontmatter document model.
 *
 * A document is a YAML metadata header delimited by `---` lines followed by a
 * Markdown/MDX body. Metadata is kept in a `serde_yaml::Mapping`, which
 * preserves field insertion order on output.
 */

use serde_yaml::{Mapping, Value};

use crate::errors::DocumentError;

const DELIMITER: &str = "---";

/// Metadata header plus content body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Frontmatter fields in source order
    pub metadata: Mapping,
    /// Raw body text following the header
    pub content: String,
}

impl Document {
    pub fn new(metadata: Mapping, content: impl Into<String>) -> Self {
        Self {
            metadata,
            content: content.into(),
        }
    }

    /// Split raw text into metadata and content
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let mut lines = text.split_inclusive('\n');

        let opening = lines.next().ok_or(DocumentError::MissingFrontmatter)?;
        if opening.trim_end() != DELIMITER {
            return Err(DocumentError::MissingFrontmatter);
        }

        let header_start = opening.len();
        let mut offset = header_start;
        let mut split = None;
        for line in lines {
            if line.trim_end() == DELIMITER {
                split = Some((offset, offset + line.len()));
                break;
            }
            offset += line.len();
        }
        let (header_end, body_start) = split.ok_or(DocumentError::UnterminatedFrontmatter)?;

        let metadata = parse_header(&text[header_start..header_end])?;
        let content = text[body_start..].trim_start_matches(['\r', '\n']);

        Ok(Self::new(metadata, content))
    }

    /// Serialize back to `---` header + blank line + content
    pub fn render(&self) -> Result<String, DocumentError> {
        let yaml = if self.metadata.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.metadata).map_err(DocumentError::Serialize)?
        };

        let mut out = String::with_capacity(yaml.len() + self.content.len() + 16);
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(yaml.trim_end());
        out.push('\n');
        out.push_str(DELIMITER);
        out.push_str("\n\n");
        out.push_str(&self.content);
        Ok(out)
    }

    /// String value of a metadata field
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.field_str("title")
    }
}

fn parse_header(header: &str) -> Result<Mapping, DocumentError> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(header).map_err(DocumentError::InvalidYaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(DocumentError::NotAMapping),
    }
}
