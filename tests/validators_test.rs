use git_bump::validators::{
    is_given, is_not_array, is_not_hash_or_tag, is_not_semver, is_not_semver_release_type,
    is_not_string,
};
use serde_json::{json, Value};

/// Non-string values every string predicate must reject
fn non_strings() -> Vec<Option<Value>> {
    vec![
        Some(json!(123)),
        Some(json!(0)),
        Some(json!(-1.5)),
        Some(json!(true)),
        Some(json!(false)),
        Some(json!([])),
        Some(json!({})),
        Some(Value::Null),
        None,
    ]
}

fn s(value: &str) -> Value {
    Value::String(value.to_string())
}

// ============================================================================
// is_given
// ============================================================================

#[test]
fn test_is_given_true_for_everything_but_absent() {
    for value in [
        json!("str"),
        json!(""),
        json!(123),
        json!(0),
        json!(-0.0),
        json!(true),
        json!(false),
        json!([]),
        json!({}),
    ] {
        assert!(is_given(Some(&value)), "{:?} should be given", value);
    }
}

#[test]
fn test_is_given_false_for_null_and_undefined() {
    assert!(!is_given(Some(&Value::Null)));
    assert!(!is_given(None));
}

// ============================================================================
// is_not_string
// ============================================================================

#[test]
fn test_is_not_string_true_except_non_empty_string() {
    for value in non_strings() {
        assert!(is_not_string(value.as_ref()), "{:?}", value);
    }
    assert!(is_not_string(Some(&s(""))));
}

#[test]
fn test_is_not_string_false_for_non_empty_string() {
    assert!(!is_not_string(Some(&s("str"))));
}

// ============================================================================
// is_not_hash_or_tag
// ============================================================================

#[test]
fn test_is_not_hash_or_tag_rejects_non_strings() {
    for value in non_strings() {
        assert!(is_not_hash_or_tag(value.as_ref()), "{:?}", value);
    }
    assert!(is_not_hash_or_tag(Some(&s(""))));
}

#[test]
fn test_is_not_hash_or_tag_rejects_invalid_hashes() {
    let invalid = [
        "12s4",
        "1.2s.4",
        "a",
        "4ec99f747f787984e7f7e94d56ef6309747b215f5",
        "c71f64b^",
        "c71f64b^^",
        "c71f64b^2",
        "^c71f64b",
        "c71f64b~",
        "c71f64b~~",
        "c71f64b~2",
        "~c71f64b",
        "..",
        "c71f64b..",
        "c71f64b..c71f64b",
        "..c71f64b",
        "...",
        "c71f64b...",
        "c71f64b...c71f64b",
        "...c71f64b",
    ];

    for rev in invalid {
        assert!(is_not_hash_or_tag(Some(&s(rev))), "{} should be rejected", rev);
    }
}

#[test]
fn test_is_not_hash_or_tag_rejects_invalid_tags() {
    for rev in ["v01.02.03", "01.02.03", ".1.3", "3", "123", "head", "v1.2.3..v1.3.0"] {
        assert!(is_not_hash_or_tag(Some(&s(rev))), "{} should be rejected", rev);
    }
}

#[test]
fn test_is_not_hash_or_tag_accepts_hashes() {
    for rev in [
        "4ec99f747f787984e7f7e94d56ef6309747b215f",
        "4ec99f7",
        "4ec99",
    ] {
        assert!(!is_not_hash_or_tag(Some(&s(rev))), "{} should be accepted", rev);
    }
}

#[test]
fn test_is_not_hash_or_tag_accepts_semver_tags() {
    for rev in [
        "v9.9.9",
        "v1.2.3",
        "v1.2.3-next.2.beta.0+build.exp",
        "9.9.9",
        "1.2.3",
        "1.2.3-next.2.beta.0+build.exp",
    ] {
        assert!(!is_not_hash_or_tag(Some(&s(rev))), "{} should be accepted", rev);
    }
}

#[test]
fn test_is_not_hash_or_tag_accepts_head() {
    assert!(!is_not_hash_or_tag(Some(&s("HEAD"))));
}

// ============================================================================
// is_not_semver_release_type
// ============================================================================

#[test]
fn test_release_types_accepted() {
    for release in [
        "major",
        "premajor",
        "minor",
        "preminor",
        "patch",
        "prepatch",
        "prerelease",
    ] {
        assert!(!is_not_semver_release_type(Some(&s(release))), "{}", release);
    }
}

#[test]
fn test_release_types_rejected() {
    for value in non_strings() {
        assert!(is_not_semver_release_type(value.as_ref()), "{:?}", value);
    }

    for release in [
        "",
        "next",
        "new",
        "latest",
        "majority",
        "minority",
        "pat",
        "MAJOR",
        "PREMAJOR",
        "MINOR",
        "PREMINOR",
        "PATCH",
        "PREPATCH",
        "PRERELEASE",
    ] {
        assert!(is_not_semver_release_type(Some(&s(release))), "{}", release);
    }
}

// ============================================================================
// is_not_semver
// ============================================================================

#[test]
fn test_is_not_semver_rejects_non_strings() {
    for value in non_strings() {
        assert!(is_not_semver(value.as_ref()), "{:?}", value);
    }
    assert!(is_not_semver(Some(&s(""))));
}

#[test]
fn test_is_not_semver_rejects_invalid_numbers() {
    for version in ["v01.02.03", "01.02.03", ".1.3", "1.3", "3", "123", "HEAD", "head"] {
        assert!(is_not_semver(Some(&s(version))), "{} should be rejected", version);
    }
}

#[test]
fn test_is_not_semver_accepts_valid_numbers() {
    for version in [
        "v9.9.9",
        "v1.2.3",
        "v1.2.3-next.2.beta.0+build.exp",
        "9.9.9",
        "1.2.3",
        "1.2.3-next.2.beta.0+build.exp",
    ] {
        assert!(!is_not_semver(Some(&s(version))), "{} should be accepted", version);
    }
}

// ============================================================================
// is_not_array
// ============================================================================

#[test]
fn test_is_not_array_true_except_arrays() {
    for value in [
        Some(json!(123)),
        Some(json!(true)),
        Some(json!({})),
        Some(Value::Null),
        None,
        Some(s("")),
    ] {
        assert!(is_not_array(value.as_ref()), "{:?}", value);
    }
}

#[test]
fn test_is_not_array_false_for_arrays() {
    for value in [json!([]), json!(["a", "b", "c"]), json!([1]), json!([[1], [2]])] {
        assert!(!is_not_array(Some(&value)), "{:?}", value);
    }
}
