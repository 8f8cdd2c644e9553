use std::fmt;

use crate::domain::Version;

/// Warnings about parts of an input version that a bump discards.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The input carries a post-release segment
    PostReleaseDropped { version: String, post: u64 },
    /// The input carries a local version label
    LocalSegmentDropped { version: String },
    /// The input release has more than major.minor.micro components
    ReleaseTruncated { version: String, components: usize },
}

impl BoundaryWarning {
    /// Collect the warnings that apply when `version` was bumped to `next`
    ///
    /// Extra release components survive a pre-release bump inside a cycle,
    /// so truncation is only reported when `next` is shorter.
    pub fn detect(version: &Version, next: &Version) -> Vec<BoundaryWarning> {
        let inner = version.as_pep440();
        let mut warnings = Vec::new();

        if let Some(post) = inner.post() {
            warnings.push(BoundaryWarning::PostReleaseDropped {
                version: version.to_string(),
                post,
            });
        }

        if inner.is_local() {
            warnings.push(BoundaryWarning::LocalSegmentDropped {
                version: version.to_string(),
            });
        }

        let components = inner.release().len();
        if components > 3 && next.as_pep440().release().len() < components {
            warnings.push(BoundaryWarning::ReleaseTruncated {
                version: version.to_string(),
                components,
            });
        }

        warnings
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PostReleaseDropped { version, post } => {
                write!(
                    f,
                    "Post-release segment 'post{}' of '{}' is not carried into the next version",
                    post, version
                )
            }
            BoundaryWarning::LocalSegmentDropped { version } => {
                write!(
                    f,
                    "Local version label of '{}' is not carried into the next version",
                    version
                )
            }
            BoundaryWarning::ReleaseTruncated {
                version,
                components,
            } => {
                write!(
                    f,
                    "Release of '{}' has {} components, only major.minor.micro are kept",
                    version, components
                )
            }
        }
    }
}
