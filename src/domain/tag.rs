use crate::domain::Version;
use crate::error::{BumpError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Whether the pattern is the bare `{version}` placeholder
    pub fn is_bare(&self) -> bool {
        self.pattern == PLACEHOLDER
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3a1" -> "v1.2.3a1"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    fn regex(&self) -> Result<regex::Regex> {
        if self.pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(BumpError::tag(format!(
                "Pattern '{}' must contain exactly one {} placeholder",
                self.pattern, PLACEHOLDER
            )));
        }

        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(&regex::escape(PLACEHOLDER), "(.+)");

        regex::Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| BumpError::tag(format!("Invalid pattern '{}': {}", self.pattern, e)))
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(tag))
    }

    /// Extract the version carried by a tag
    /// Example: pattern="release-{version}", tag="release-2.0rc1" -> 2.0rc1
    pub fn extract(&self, tag: &str) -> Result<Version> {
        let captures = self.regex()?.captures(tag).ok_or_else(|| {
            BumpError::tag(format!(
                "Tag '{}' does not match pattern '{}'",
                tag, self.pattern
            ))
        })?;

        match captures.get(1) {
            Some(version) => Version::parse(version.as_str()),
            None => Err(BumpError::tag(format!("No version found in tag '{}'", tag))),
        }
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new(PLACEHOLDER)
    }
}
