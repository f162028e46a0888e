//! Symbol → company name lookup

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_SYMBOLS: &str = include_str!("../data/stock_symbols.json");

/// Static table of company display names keyed by ticker symbol.
///
/// Loaded once at startup; lookups are case-sensitive like the symbols
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDirectory {
    names: HashMap<String, String>,
}

impl CompanyDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Parse a JSON object of `symbol: name` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON table from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let directory = Self::from_json(&std::fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), companies = directory.len(), "Loaded company directory");
        Ok(directory)
    }

    /// The table shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SYMBOLS)
    }

    /// Load from `path` when given, otherwise use the bundled table
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.names.get(symbol).map(String::as_str)
    }

    /// Company name, or the raw symbol when it is not in the table
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.lookup(symbol).unwrap_or(symbol)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
