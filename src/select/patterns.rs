//! Glob patterns matched against file base names

use crate::error::{Error, Result};
use glob::Pattern;

/// A list of glob patterns; a name matches if any pattern does
#[derive(Debug, Clone, Default)]
pub struct NamePatterns {
    patterns: Vec<Pattern>,
}

impl NamePatterns {
    /// Compile patterns, trimming each and dropping blank entries
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .filter_map(|p| {
                let p = p.as_ref().trim();
                (!p.is_empty()).then(|| p.to_string())
            })
            .map(|p| {
                Pattern::new(&p).map_err(|e| Error::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Parse a comma-separated list such as `"*.xml,junit-*.xml"`
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(list.split(','))
    }

    /// Whether the list has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `name` matches at least one pattern
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// Pattern sources, in the order given
    pub fn as_strs(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_blanks() {
        let patterns = NamePatterns::parse_list(" *.xml, ,junit-*.xml,").unwrap();
        assert_eq!(patterns.as_strs().collect::<Vec<_>>(), vec!["*.xml", "junit-*.xml"]);
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let patterns = NamePatterns::parse_list("").unwrap();
        assert!(patterns.is_empty());
        assert!(!patterns.matches("a.xml"));
    }

    #[test]
    fn test_matches_any_pattern() {
        let patterns = NamePatterns::parse_list("foo*.xml,bar.xml").unwrap();
        assert!(patterns.matches("foo_1.xml"));
        assert!(patterns.matches("bar.xml"));
        assert!(!patterns.matches("baz.xml"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        match NamePatterns::parse_list("[.xml") {
            Err(Error::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[.xml"),
            other => panic!("Expected InvalidPattern error, got: {other:?}"),
        }
    }
}
