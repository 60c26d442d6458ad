//! Comma-separated criteria lists
//!
//! Handles:
//! - Whitespace around separators: `compile , runtime` → `compile,runtime`
//! - Empty input: no tokens, the stage is a no-op
//! - Empty entries (`a,,b`, trailing commas) are skipped

use crate::error::FilterError;
use regex::Regex;
use std::sync::LazyLock;

// Separator with any surrounding whitespace
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Scopes the host recognises
pub const KNOWN_SCOPES: &[&str] = &["compile", "provided", "runtime", "test", "system", "import"];

/// Trim the value and drop whitespace around separators
pub fn clean_tokenized_string(raw: &str) -> String {
    SEPARATOR_RE.replace_all(raw.trim(), ",").into_owned()
}

/// A parsed criteria list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Parse a raw option value. Any entry is accepted; empty ones are dropped.
    pub fn parse(raw: &str) -> Self {
        let tokens = clean_tokenized_string(raw)
            .split(',')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// Parse a list of scope names, rejecting unknown scopes. `option` names
    /// the setting in error messages.
    pub fn parse_scopes(option: &str, raw: &str) -> Result<Self, FilterError> {
        let list = Self::parse(raw);
        if let Some(bad) = list
            .tokens
            .iter()
            .find(|t| !KNOWN_SCOPES.contains(&t.as_str()))
        {
            return Err(FilterError::unknown_scope(option, bad.clone()));
        }
        Ok(list)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Exact match against one of the tokens
    pub fn matches(&self, value: &str) -> bool {
        self.tokens.iter().any(|t| t == value)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
