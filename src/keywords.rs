use std::fs;
use std::path::PathBuf;

use crate::error::{Result, ScanError};

pub const DEFAULT_KEYWORDS_FILE: &str = "words.txt";

/// Where the keyword list comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordSource {
    Inline(Vec<String>),
    /// Plain text, one keyword per line.
    File(PathBuf),
}

impl KeywordSource {
    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            KeywordSource::Inline(words) => Ok(clean(words.iter().map(String::as_str))),
            KeywordSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| ScanError::Keywords {
                    path: path.clone(),
                    source,
                })?;
                let words = clean(content.lines());
                log::info!("loaded {} keywords from {}", words.len(), path.display());
                Ok(words)
            }
        }
    }
}

// Blank entries would match every fragment, so they are dropped here.
fn clean<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    words
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
