//! pep440-bump - compute the next release or pre-release of a PEP 440 version.
//!
//! Parsing and ordering come from `pep440_rs`; this crate only derives new
//! release and pre-release components from a parsed version.

pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{is_valid_version, PreRelease, PreReleaseType, ReleaseField, Version, VersionBump};
pub use error::{BumpError, Result};
