//! Domain logic - pure version arithmetic independent of any I/O

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::TagPattern;
pub use version::{is_valid_version, ReleaseField, Version, VersionBump};
