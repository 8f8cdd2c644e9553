//! Bump workflow orchestration logic
//!
//! Provides a clean separation between CLI argument parsing and the bump
//! itself, so the workflow can be driven programmatically without clap.

use tracing::{debug, warn};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{ReleaseField, Version, VersionBump};
use crate::error::Result;

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Version string or tag to start from
    pub input: String,

    /// Bump target (`major`, `minor`, `micro`, `alpha`, `beta`, `rc`).
    /// `None` only validates the input.
    pub target: Option<String>,

    /// Release field for starting a pre-release cycle, overrides the config
    pub field: Option<ReleaseField>,

    /// Render the result through the configured tag pattern
    pub as_tag: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The parsed input version
    pub current: Version,

    /// The computed version, `None` when only validating
    pub next: Option<Version>,

    /// What to print: the next version, or the normalized input
    pub rendered: String,

    /// Segments of the input that the bump discarded
    pub warnings: Vec<BoundaryWarning>,
}

/// Parse the input as a version, falling back to the configured tag pattern
fn resolve_input(input: &str, config: &Config) -> Result<Version> {
    match Version::parse(input) {
        Ok(version) => Ok(version),
        Err(err) => {
            let pattern = config.output.tag_pattern();
            if pattern.is_bare() {
                return Err(err);
            }
            debug!(input, pattern = %pattern.pattern, "Input is not a version, trying tag pattern");
            pattern.extract(input)
        }
    }
}

/// Main bump workflow
///
/// 1. Resolve the input to a version (directly or through the tag pattern)
/// 2. Build the bump request from target and field
/// 3. Compute the next version and collect boundary warnings
/// 4. Render the result
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let current = resolve_input(args.input.trim(), config)?;
    let pattern = config.output.tag_pattern();
    let render = |version: &Version| {
        if args.as_tag {
            pattern.format(version)
        } else {
            version.to_string()
        }
    };

    let Some(target) = args.target.as_deref() else {
        return Ok(WorkflowResult {
            rendered: render(&current),
            current,
            next: None,
            warnings: Vec::new(),
        });
    };

    let field = args.field.unwrap_or(config.bump.default_field);
    let bump = VersionBump::from_target(target, field)?;
    let next = current.bump(&bump)?;
    debug!(from = %current, to = %next, ?bump, "Bumped version");

    let warnings = BoundaryWarning::detect(&current, &next);
    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(WorkflowResult {
        rendered: render(&next),
        current,
        next: Some(next),
        warnings,
    })
}
