//! Missing value handling for numeric loading

use serde::{Serialize, Deserialize};

/// Classification of one raw text cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Matched a null pattern; stored as NaN
    Missing,
    Number(f64),
    /// Neither null nor numeric
    Text,
}

/// Null value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    /// Patterns to treat as missing
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                String::new(),
                "-".to_string(),
                "?".to_string(),
                "NA".to_string(),
                "N/A".to_string(),
                "NaN".to_string(),
                "null".to_string(),
                "None".to_string(),
            ],
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Add a pattern, builder style
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        self
    }

    /// Check if a value should be treated as missing
    pub fn is_null(&self, value: &str) -> bool {
        let value = self.prepare(value);
        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                value == pattern
            } else {
                value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Classify a raw cell
    pub fn classify(&self, raw: &str) -> Cell {
        if self.is_null(raw) {
            return Cell::Missing;
        }
        match self.prepare(raw).parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            Ok(_) => Cell::Missing,
            Err(_) => Cell::Text,
        }
    }

    fn prepare<'a>(&self, value: &'a str) -> &'a str {
        if self.trim_whitespace {
            value.trim()
        } else {
            value
        }
    }
}
