use pep440_bump::boundary::BoundaryWarning;
use pep440_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use pep440_bump::config::Config;
use pep440_bump::{BumpError, ReleaseField};

fn args(input: &str, target: Option<&str>) -> BumpWorkflowArgs {
    BumpWorkflowArgs {
        input: input.to_string(),
        target: target.map(str::to_string),
        ..Default::default()
    }
}

fn tagged_config(pattern: &str) -> Config {
    let mut config = Config::default();
    config.output.tag_pattern = pattern.to_string();
    config
}

#[test]
fn test_validate_only() {
    let result = run_bump_workflow(&args("1.0.0RC1", None), &Config::default()).unwrap();
    assert_eq!(result.next, None);
    assert_eq!(result.rendered, "1.0.0rc1");
    assert!(result.current.is_release_candidate());
}

#[test]
fn test_bump_micro() {
    let result = run_bump_workflow(&args("1.10.2", Some("micro")), &Config::default()).unwrap();
    assert_eq!(result.rendered, "1.10.3");
    assert_eq!(result.next.unwrap().to_string(), "1.10.3");
}

#[test]
fn test_field_defaults_to_config() {
    let mut config = Config::default();
    config.bump.default_field = ReleaseField::Minor;

    let result = run_bump_workflow(&args("1.10.2", Some("alpha")), &config).unwrap();
    assert_eq!(result.rendered, "1.11.0a1");
}

#[test]
fn test_explicit_field_overrides_config() {
    let mut config = Config::default();
    config.bump.default_field = ReleaseField::Minor;

    let mut workflow_args = args("1.10.2", Some("rc"));
    workflow_args.field = Some(ReleaseField::Major);

    let result = run_bump_workflow(&workflow_args, &config).unwrap();
    assert_eq!(result.rendered, "2.0.0rc1");
}

#[test]
fn test_tag_input_and_output() {
    let config = tagged_config("v{version}");
    let mut workflow_args = args("v1.10.3a2", Some("beta"));
    workflow_args.as_tag = true;

    let result = run_bump_workflow(&workflow_args, &config).unwrap();
    assert_eq!(result.current.to_string(), "1.10.3a2");
    assert_eq!(result.rendered, "v1.10.3b1");
}

#[test]
fn test_tag_pattern_with_prefix() {
    let config = tagged_config("release-{version}");
    let result = run_bump_workflow(&args("release-2.0.0rc2", Some("major")), &config).unwrap();
    assert_eq!(result.rendered, "2.0.0");
}

#[test]
fn test_invalid_input_with_bare_pattern() {
    let result = run_bump_workflow(&args("release-2.0.0", Some("major")), &Config::default());
    assert!(matches!(result, Err(BumpError::InvalidVersion(..))));
}

#[test]
fn test_invalid_target() {
    let result = run_bump_workflow(&args("1.0.0", Some("post")), &Config::default());
    assert!(matches!(result, Err(BumpError::InvalidTarget(_))));
}

#[test]
fn test_backward_prerelease() {
    let result = run_bump_workflow(&args("1.0.0rc1", Some("alpha")), &Config::default());
    assert!(matches!(result, Err(BumpError::BackwardPrerelease { .. })));
}

#[test]
fn test_warnings_reported() {
    let result = run_bump_workflow(&args("1.2.0b4.post1", Some("micro")), &Config::default())
        .unwrap();
    assert_eq!(result.rendered, "1.2.1");
    assert!(matches!(
        result.warnings.as_slice(),
        [BoundaryWarning::PostReleaseDropped { post: 1, .. }]
    ));
}

#[test]
fn test_overflow_is_reported() {
    let result = run_bump_workflow(
        &args("18446744073709551615.0.0", Some("major")),
        &Config::default(),
    );
    assert!(matches!(result, Err(BumpError::Overflow { component: "major", .. })));
}
