use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

/// File name fallback when neither the title nor the source stem yields a slug
pub const FALLBACK_SLUG: &str = "article";

/// URL slug of a title: ASCII, lowercase, words joined by `-`
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug for a translated document: from its title, else from the source file stem
pub fn document_slug(title: Option<&str>, fallback_stem: &str) -> String {
    title
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .or_else(|| Some(slugify(fallback_stem)).filter(|slug| !slug.is_empty()))
        .unwrap_or_else(|| FALLBACK_SLUG.to_string())
}
