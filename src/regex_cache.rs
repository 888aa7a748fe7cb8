use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidPatternError(#[from] regex::Error);

/// Cache of compiled, fully-anchored number patterns. Classification walks
/// the same static patterns for every input, so each pattern is compiled at
/// most once per process.
pub struct PatternCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns whether `candidate` matches `pattern` in full. The pattern is
    /// anchored on both ends before compilation.
    pub fn full_match(&self, pattern: &str, candidate: &str) -> Result<bool, InvalidPatternError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().is_match(candidate));
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(&format!("^(?:{pattern})$")).map(Arc::new)
        })?;
        Ok(entry.value().is_match(candidate))
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PatternCache;

    #[test]
    fn anchors_patterns_on_both_ends() {
        let cache = PatternCache::new();
        assert!(cache.full_match("7\\d{9}", "7912345678").unwrap());
        assert!(!cache.full_match("7\\d{9}", "07912345678").unwrap());
        assert!(!cache.full_match("7\\d{9}", "791234567").unwrap());
    }

    #[test]
    fn rejects_invalid_patterns() {
        let cache = PatternCache::new();
        assert!(cache.full_match("(", "anything").is_err());
    }
}
