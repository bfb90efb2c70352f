use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A source language the analyzer can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Cpp,
    Go,
    Java,
    JavaScript,
    Python,
    Rust,
}

#[derive(Debug, Error)]
#[error("unknown language: {0:?}")]
pub struct UnknownLanguageError(pub String);

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 7] = [
        Language::C,
        Language::Cpp,
        Language::Go,
        Language::Java,
        Language::JavaScript,
        Language::Python,
        Language::Rust,
    ];

    /// The lowercase name used on the CLI and in serialized output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Rust => "rust",
        }
    }

    /// File extensions handled for this language, without the leading dot.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hxx"],
            Language::Go => &["go"],
            Language::Java => &["java"],
            Language::JavaScript => &["js"],
            Language::Python => &["py"],
            Language::Rust => &["rs"],
        }
    }

    /// Resolve a file extension (without the dot) to a language.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.extensions().contains(&extension))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "golang" survives as an alias from older releases.
        if s == "golang" {
            return Ok(Language::Go);
        }
        Language::ALL
            .into_iter()
            .find(|language| language.name() == s)
            .ok_or_else(|| UnknownLanguageError(s.to_string()))
    }
}
