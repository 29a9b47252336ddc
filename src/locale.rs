use anyhow::{anyhow, Result};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// @module: Site locales and their path tables

/// Locales the blog is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Pt,
    En,
    Es,
}

/// Site sections that have a locale-specific path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Blog,
    Techniques,
    Contact,
    About,
    Glossary,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Blog,
        Section::Techniques,
        Section::Contact,
        Section::About,
        Section::Glossary,
    ];

    /// Exact sections are single pages; the others are path prefixes
    pub fn is_exact(&self) -> bool {
        matches!(self, Section::Contact | Section::About)
    }
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pt, Locale::En, Locale::Es];

    // @returns: Code used in paths, file layout and the `locale` field
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    // @returns: DeepL `target_lang` value
    pub fn deepl_target_code(&self) -> &'static str {
        match self {
            Self::Pt => "PT-BR",
            Self::En => "EN-US",
            Self::Es => "ES",
        }
    }

    // @returns: DeepL `source_lang` value (source languages take no region)
    pub fn deepl_source_code(&self) -> &'static str {
        match self {
            Self::Pt => "PT",
            Self::En => "EN",
            Self::Es => "ES",
        }
    }

    /// Root path prefix of the locale; English pages live at the site root
    pub fn root_path(&self) -> &'static str {
        match self {
            Self::Pt => "/pt/",
            Self::En => "/",
            Self::Es => "/es/",
        }
    }

    /// Path of a site section in this locale
    pub fn section_path(&self, section: Section) -> &'static str {
        match (self, section) {
            (Self::Pt, Section::Blog) => "/pt/blog/",
            (Self::Pt, Section::Techniques) => "/pt/tecnicas/",
            (Self::Pt, Section::Contact) => "/pt/contato",
            (Self::Pt, Section::About) => "/pt/sobre",
            (Self::Pt, Section::Glossary) => "/pt/glossario/",
            (Self::En, Section::Blog) => "/blog/",
            (Self::En, Section::Techniques) => "/techniques/",
            (Self::En, Section::Contact) => "/contact",
            (Self::En, Section::About) => "/about",
            (Self::En, Section::Glossary) => "/glossary/",
            (Self::Es, Section::Blog) => "/es/blog/",
            (Self::Es, Section::Techniques) => "/es/tecnicas/",
            (Self::Es, Section::Contact) => "/es/contacto",
            (Self::Es, Section::About) => "/es/sobre",
            (Self::Es, Section::Glossary) => "/es/glossario/",
        }
    }

    /// English name of the locale's language, via ISO 639-1
    pub fn language_name(&self) -> Result<&'static str> {
        Language::from_639_1(self.code())
            .map(|language| language.to_name())
            .ok_or_else(|| anyhow!("Unknown ISO 639-1 language code: {}", self.code()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Self::Pt),
            "en" | "en-us" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(anyhow!("Unsupported locale: {}", s)),
        }
    }
}
