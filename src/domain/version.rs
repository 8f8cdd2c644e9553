use crate::domain::prerelease::{PreRelease, PreReleaseType};
use crate::error::{BumpError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A PEP 440 version that knows how to compute its successors
///
/// Wraps a parsed [`pep440_rs::Version`]; parsing, ordering and rendering
/// all come from the wrapped value. Every bump returns a new `Version`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    inner: pep440_rs::Version,
}

/// Release component targeted by a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseField {
    Major,
    Minor,
    #[default]
    Micro,
}

impl FromStr for ReleaseField {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(ReleaseField::Major),
            "minor" => Ok(ReleaseField::Minor),
            "micro" => Ok(ReleaseField::Micro),
            _ => Err(BumpError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for ReleaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseField::Major => write!(f, "major"),
            ReleaseField::Minor => write!(f, "minor"),
            ReleaseField::Micro => write!(f, "micro"),
        }
    }
}

/// A requested bump
///
/// Pre-release bumps carry the release field used when a new pre-release
/// cycle has to be started from a version that is not a pre-release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Micro,
    Alpha(ReleaseField),
    Beta(ReleaseField),
    ReleaseCandidate(ReleaseField),
}

impl VersionBump {
    /// Build a bump from a target name such as `"minor"` or `"rc"`
    pub fn from_target(target: &str, field: ReleaseField) -> Result<Self> {
        match target.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "micro" => Ok(VersionBump::Micro),
            "alpha" | "a" => Ok(VersionBump::Alpha(field)),
            "beta" | "b" => Ok(VersionBump::Beta(field)),
            "rc" | "release-candidate" => Ok(VersionBump::ReleaseCandidate(field)),
            _ => Err(BumpError::InvalidTarget(target.to_string())),
        }
    }
}

impl Version {
    /// Parse a PEP 440 version string
    pub fn parse(version: &str) -> Result<Self> {
        version.parse()
    }

    /// The wrapped `pep440_rs` value
    pub fn as_pep440(&self) -> &pep440_rs::Version {
        &self.inner
    }

    fn release_part(&self, index: usize) -> u64 {
        self.inner.release().get(index).copied().unwrap_or(0)
    }

    pub fn major(&self) -> u64 {
        self.release_part(0)
    }

    pub fn minor(&self) -> u64 {
        self.release_part(1)
    }

    pub fn micro(&self) -> u64 {
        self.release_part(2)
    }

    /// The active pre-release segment, if any
    pub fn pre(&self) -> Option<PreRelease> {
        self.inner.pre().map(PreRelease::from)
    }

    /// The dev release number, if any
    pub fn dev(&self) -> Option<u64> {
        self.inner.dev()
    }

    /// `major.minor.micro` without pre, post, dev or local segments
    pub fn base_version(&self) -> Version {
        self.with_release([self.major(), self.minor(), self.micro()], None)
    }

    pub fn is_prerelease(&self) -> bool {
        self.inner.is_pre()
    }

    pub fn is_devrelease(&self) -> bool {
        self.inner.is_dev()
    }

    pub fn is_alpha(&self) -> bool {
        self.pre_type() == Some(PreReleaseType::Alpha)
    }

    pub fn is_beta(&self) -> bool {
        self.pre_type() == Some(PreReleaseType::Beta)
    }

    pub fn is_release_candidate(&self) -> bool {
        self.pre_type() == Some(PreReleaseType::ReleaseCandidate)
    }

    fn pre_type(&self) -> Option<PreReleaseType> {
        self.pre().map(|pre| pre.identifier)
    }

    /// A pre-release or dev version is still working toward a release.
    fn in_progress(&self) -> bool {
        self.is_prerelease() || self.is_devrelease()
    }

    /// The base version, when finalizing in place still moves forward.
    /// `1.2.3.4.dev1` or `1.2.3.post1.dev1` already sort above `1.2.3`.
    fn finalized(&self) -> Option<Version> {
        let base = self.base_version();
        (base > *self).then_some(base)
    }

    fn increment(&self, value: u64, component: &'static str) -> Result<u64> {
        value.checked_add(1).ok_or_else(|| BumpError::Overflow {
            version: self.to_string(),
            component,
        })
    }

    /// Release numbers held fixed through a pre-release cycle, padded to
    /// major.minor.micro.
    fn cycle_release(&self) -> Vec<u64> {
        let mut release = self.inner.release().to_vec();
        if release.len() < 3 {
            release.resize(3, 0);
        }
        release
    }

    /// Builds a sibling version from release numbers.
    /// The epoch is kept, post, dev and local segments are dropped.
    fn with_release<I>(&self, release: I, pre: Option<PreRelease>) -> Version
    where
        I: IntoIterator<Item = u64>,
    {
        let inner = pep440_rs::Version::new(release)
            .with_epoch(self.inner.epoch())
            .with_pre(pre.map(Into::into));
        Version { inner }
    }

    /// Next major release
    ///
    /// A pre-release or dev version of an `X.0.0` release finalizes to that
    /// release instead of skipping it: `2.0.0rc2` -> `2.0.0`.
    pub fn next_major(&self) -> Result<Version> {
        if self.in_progress() && self.minor() == 0 && self.micro() == 0 {
            if let Some(base) = self.finalized() {
                return Ok(base);
            }
        }
        let major = self.increment(self.major(), "major")?;
        Ok(self.with_release([major, 0, 0], None))
    }

    /// Next minor release
    ///
    /// `1.1.1a1` -> `1.2.0`, but `1.2.0a1` -> `1.2.0`.
    pub fn next_minor(&self) -> Result<Version> {
        if self.in_progress() && self.micro() == 0 {
            if let Some(base) = self.finalized() {
                return Ok(base);
            }
        }
        let minor = self.increment(self.minor(), "minor")?;
        Ok(self.with_release([self.major(), minor, 0], None))
    }

    /// Next micro release
    ///
    /// A dev version without a pre-release finalizes in place
    /// (`1.0.0.dev1` -> `1.0.0`), as does a pre-release of a micro release
    /// (`1.2.1a1` -> `1.2.1`). A pre-release of an `X.Y.0` release moves on
    /// to the following micro (`1.2.0a1` -> `1.2.1`).
    pub fn next_micro(&self) -> Result<Version> {
        let finalizes = match (self.pre(), self.dev()) {
            (None, Some(_)) => true,
            (Some(_), _) => self.micro() != 0,
            (None, None) => false,
        };
        if finalizes {
            if let Some(base) = self.finalized() {
                return Ok(base);
            }
        }
        let micro = self.increment(self.micro(), "micro")?;
        Ok(self.with_release([self.major(), self.minor(), micro], None))
    }

    /// Next release for the given field
    pub fn next_release(&self, field: ReleaseField) -> Result<Version> {
        match field {
            ReleaseField::Major => self.next_major(),
            ReleaseField::Minor => self.next_minor(),
            ReleaseField::Micro => self.next_micro(),
        }
    }

    pub fn next_alpha(&self, field: ReleaseField) -> Result<Version> {
        self.next_prerelease(PreReleaseType::Alpha, field)
    }

    pub fn next_beta(&self, field: ReleaseField) -> Result<Version> {
        self.next_prerelease(PreReleaseType::Beta, field)
    }

    pub fn next_release_candidate(&self, field: ReleaseField) -> Result<Version> {
        self.next_prerelease(PreReleaseType::ReleaseCandidate, field)
    }

    /// Next pre-release of the requested type
    ///
    /// Without an active pre-release, the release named by `field` is bumped
    /// first and the cycle starts at 1 (`1.10.2` -> `1.10.3a1`). Inside a
    /// cycle the release is fixed and `field` is ignored: the same type
    /// increments (`a1` -> `a2`), a later type restarts at 1 (`a2` -> `b1`)
    /// and an earlier type is an error.
    pub fn next_prerelease(&self, requested: PreReleaseType, field: ReleaseField) -> Result<Version> {
        let next = match self.pre() {
            None => {
                let release = self.next_release(field)?;
                release.with_release(release.cycle_release(), Some(PreRelease::first(requested)))
            }
            Some(current) => {
                let pre = match requested.cmp(&current.identifier) {
                    Ordering::Equal => current.increment_number().ok_or_else(|| {
                        BumpError::Overflow {
                            version: self.to_string(),
                            component: "pre-release number",
                        }
                    })?,
                    Ordering::Greater => PreRelease::first(requested),
                    Ordering::Less => {
                        return Err(BumpError::BackwardPrerelease {
                            version: self.to_string(),
                            current: current.identifier,
                            requested,
                        })
                    }
                };
                self.with_release(self.cycle_release(), Some(pre))
            }
        };
        debug!(from = %self, to = %next, %requested, %field, "Computed next pre-release");
        Ok(next)
    }

    /// Apply a bump request
    pub fn bump(&self, bump: &VersionBump) -> Result<Version> {
        match *bump {
            VersionBump::Major => self.next_major(),
            VersionBump::Minor => self.next_minor(),
            VersionBump::Micro => self.next_micro(),
            VersionBump::Alpha(field) => self.next_alpha(field),
            VersionBump::Beta(field) => self.next_beta(field),
            VersionBump::ReleaseCandidate(field) => self.next_release_candidate(field),
        }
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(version: &str) -> Result<Self> {
        let inner = pep440_rs::Version::from_str(version)
            .map_err(|err| BumpError::InvalidVersion(version.to_string(), err))?;
        Ok(Version { inner })
    }
}

impl From<pep440_rs::Version> for Version {
    fn from(inner: pep440_rs::Version) -> Self {
        Version { inner }
    }
}

impl From<Version> for pep440_rs::Version {
    fn from(version: Version) -> Self {
        version.inner
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Return true if a version string strictly follows PEP 440
pub fn is_valid_version(version: &str) -> bool {
    Version::parse(version).is_ok()
}
