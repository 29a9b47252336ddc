/*!
 * Locale-aware rewriting of internal links and asset paths.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::locale::{Locale, Section};

/// Markdown inline link: `[text](url)`
pub static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Rewrites source-locale URLs into their target-locale equivalents
#[derive(Debug, Clone, Copy)]
pub struct LinkRewriter {
    source: Locale,
    target: Locale,
}

impl LinkRewriter {
    pub fn new(source: Locale, target: Locale) -> Self {
        Self { source, target }
    }

    /// Target-locale URL for `url`, or `None` when the URL is not a source-locale path
    pub fn rewrite_url(&self, url: &str) -> Option<String> {
        if self.source == self.target || self.is_foreign(url) {
            return None;
        }

        for section in Section::ALL {
            let from = self.source.section_path(section);
            let to = self.target.section_path(section);
            if section.is_exact() {
                if url == from {
                    return Some(to.to_string());
                }
            } else if let Some(rest) = url.strip_prefix(from) {
                return Some(format!("{}{}", to, rest));
            }
        }

        // Other pages under the source root
        let root = self.source.root_path();
        let rest = url.strip_prefix(root)?;
        let nested_root = root.trim_start_matches('/');
        if rest.starts_with('/') || (!nested_root.is_empty() && rest.starts_with(nested_root)) {
            return None;
        }
        Some(format!("{}{}", self.target.root_path(), rest))
    }

    /// Rewrite the URLs of every Markdown link in `text`
    pub fn rewrite_links(&self, text: &str) -> String {
        LINK_PATTERN
            .replace_all(text, |caps: &Captures| match self.rewrite_url(&caps[2]) {
                Some(url) => format!("[{}]({})", &caps[1], url),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Move an image path into the target locale's folder
    pub fn rewrite_asset_path(&self, path: &str) -> String {
        if self.source == self.target {
            return path.to_string();
        }

        let from = format!("/images/blog/{}/", self.source.code());
        let to = format!("/images/blog/{}/", self.target.code());
        if path.contains(&to) {
            return path.to_string();
        }
        if path.contains(&from) {
            return path.replacen(&from, &to, 1);
        }

        let from = format!("/{}/", self.source.code());
        let to = format!("/{}/", self.target.code());
        if path.contains(&to) {
            return path.to_string();
        }
        path.replacen(&from, &to, 1)
    }

    /// Whether `url` already lives under another locale's root
    fn is_foreign(&self, url: &str) -> bool {
        Locale::ALL
            .iter()
            .filter(|locale| **locale != self.source)
            .map(Locale::root_path)
            .any(|root| root != "/" && url.starts_with(root))
    }
}
