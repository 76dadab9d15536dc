use git_bump::cli::{plan_release, run_release, ReleaseArgs};
use git_bump::config::Config;
use git_bump::git::MockRunner;
use git_bump::store::MockStore;
use git_bump::GitBumpError;

fn store() -> MockStore {
    MockStore::new()
        .with_file("package.json", "{\n  \"name\": \"app\",\n  \"version\": \"1.4.2\"\n}\n")
        .with_file("package-lock.json", "{\n  \"version\": \"1.4.2\"\n}\n")
}

fn release(release_type: &str) -> ReleaseArgs {
    ReleaseArgs {
        release_type: Some(release_type.to_string()),
        ..ReleaseArgs::default()
    }
}

#[test]
fn test_plan_release_has_no_side_effects() {
    let store = store();
    let planned = plan_release(&release("minor"), &Config::default(), &store).unwrap();

    assert_eq!(planned.current, "1.4.2");
    assert_eq!(planned.next, "1.5.0");
    assert!(store.writes().is_empty());
}

#[test]
fn test_release_bumps_commits_and_tags() {
    let store = store();
    let runner = MockRunner::new();

    let outcome = run_release(&release("patch"), &Config::default(), &store, &runner).unwrap();

    assert_eq!(outcome.versions.next, "1.4.3");
    assert_eq!(outcome.tag.as_deref(), Some("v1.4.3"));
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(store.writes().len(), 2);

    let calls = runner.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[4], vec!["commit", "-m", "Bump to v1.4.3"]);
    assert_eq!(calls[5], vec!["tag", "-a", "v1.4.3", "-m", "Bump to v1.4.3"]);
}

#[test]
fn test_release_uses_configured_message() {
    let store = store();
    let runner = MockRunner::new();
    let mut config = Config::default();
    config.tag.message = "Release %s".to_string();

    run_release(&release("major"), &config, &store, &runner).unwrap();

    assert_eq!(runner.calls()[4], vec!["commit", "-m", "Release 2.0.0"]);
}

#[test]
fn test_release_argument_overrides_configured_message() {
    let store = store();
    let runner = MockRunner::new();
    let mut config = Config::default();
    config.tag.message = "Release %s".to_string();
    let args = ReleaseArgs {
        message: Some("v%s shipped".to_string()),
        ..release("prerelease")
    };

    run_release(&args, &config, &store, &runner).unwrap();

    assert_eq!(runner.calls()[4], vec!["commit", "-m", "v1.4.3-0 shipped"]);
}

#[test]
fn test_dry_run_changes_nothing() {
    let store = store();
    let runner = MockRunner::new();
    let args = ReleaseArgs {
        dry_run: true,
        preid: Some("beta".to_string()),
        ..release("preminor")
    };

    let outcome = run_release(&args, &Config::default(), &store, &runner).unwrap();

    assert_eq!(outcome.versions.next, "1.5.0-beta.0");
    assert_eq!(outcome.tag, None);
    assert!(store.writes().is_empty());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_invalid_release_type_touches_nothing() {
    let store = store();
    let runner = MockRunner::new();

    let err = run_release(&release("next"), &Config::default(), &store, &runner).unwrap_err();

    assert!(err.is_invalid_input());
    assert!(store.reads().is_empty());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_git_failure_after_bump_keeps_written_manifests() {
    let store = store();
    let runner = MockRunner::new();
    runner.push_err("fatal: not a git repository");

    let err = run_release(&release("minor"), &Config::default(), &store, &runner).unwrap_err();

    assert!(matches!(err, GitBumpError::SubprocessFailure { .. }));
    assert!(store
        .contents("package.json")
        .unwrap()
        .contains("\"version\": \"1.5.0\""));
}
