//! Pre-release segment handling for PEP 440 versions
//!
//! A pre-release is one of alpha, beta or release candidate plus a number.
//! According to PEP 440: https://peps.python.org/pep-0440/#pre-releases

use crate::error::{BumpError, Result};
use pep440_rs::{Prerelease, PrereleaseKind};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type, ordered alpha < beta < rc
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseType {
    /// Parse a pre-release type from a string
    ///
    /// Accepts: "alpha", "a", "beta", "b", "rc", "c", "pre", "preview"
    ///
    /// # Arguments
    /// * `s` - String to parse
    ///
    /// # Returns
    /// * `Ok(PreReleaseType)` - Parsed pre-release type
    /// * `Err` - If the identifier is not one of the PEP 440 spellings
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// The canonical PEP 440 segment for this type (`a`, `b` or `rc`)
    pub fn segment(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "a",
            PreReleaseType::Beta => "b",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for PreReleaseType {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" | "c" | "pre" | "preview" => Ok(PreReleaseType::ReleaseCandidate),
            _ => Err(BumpError::InvalidPreRelease(s.to_string())),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
        }
    }
}

impl From<PrereleaseKind> for PreReleaseType {
    fn from(kind: PrereleaseKind) -> Self {
        match kind {
            PrereleaseKind::Alpha => PreReleaseType::Alpha,
            PrereleaseKind::Beta => PreReleaseType::Beta,
            PrereleaseKind::Rc => PreReleaseType::ReleaseCandidate,
        }
    }
}

impl From<PreReleaseType> for PrereleaseKind {
    fn from(identifier: PreReleaseType) -> Self {
        match identifier {
            PreReleaseType::Alpha => PrereleaseKind::Alpha,
            PreReleaseType::Beta => PrereleaseKind::Beta,
            PreReleaseType::ReleaseCandidate => PrereleaseKind::Rc,
        }
    }
}

/// Pre-release segment of a version, e.g. `a1` or `rc2`
///
/// # Examples
/// - "a1" -> PreRelease { identifier: Alpha, number: 1 }
/// - "rc3" -> PreRelease { identifier: ReleaseCandidate, number: 3 }
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    /// The pre-release identifier (alpha, beta or rc)
    pub identifier: PreReleaseType,
    /// Pre-release number, starting at 1 for a fresh cycle
    pub number: u64,
}

impl PreRelease {
    /// Create a new pre-release segment
    pub fn new(identifier: PreReleaseType, number: u64) -> Self {
        PreRelease { identifier, number }
    }

    /// The first pre-release of a given type (`a1`, `b1`, `rc1`)
    pub fn first(identifier: PreReleaseType) -> Self {
        PreRelease::new(identifier, 1)
    }

    /// Increment the pre-release number, keeping the identifier
    ///
    /// Returns `None` when the number is already `u64::MAX`.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::new(PreReleaseType::Beta, 1);
    /// assert_eq!(pr.increment_number().unwrap().number, 2);
    /// ```
    pub fn increment_number(&self) -> Option<Self> {
        Some(PreRelease {
            identifier: self.identifier,
            number: self.number.checked_add(1)?,
        })
    }
}

impl From<Prerelease> for PreRelease {
    fn from(pre: Prerelease) -> Self {
        PreRelease::new(pre.kind.into(), pre.number)
    }
}

impl From<PreRelease> for Prerelease {
    fn from(pre: PreRelease) -> Self {
        Prerelease {
            kind: pre.identifier.into(),
            number: pre.number,
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.identifier.segment(), self.number)
    }
}
