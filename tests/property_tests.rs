//! Property-based tests for key validation and output interpretation.
//!
//! These tests use proptest to verify invariants hold across randomly
//! generated inputs. Git itself is replaced by a `MockRunner`.

use proptest::prelude::*;

use gitconf::core::repository::Repository;
use gitconf::core::types::{ConfigKey, ConfigValue};
use gitconf::git::GitConfig;
use gitconf::process::{MockRunner, ProcessOutput};

/// Strategy for generating key segments git accepts.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,15}"
}

/// Strategy for `section.name` and `section.subsection.name` keys.
fn valid_key() -> impl Strategy<Value = String> {
    prop_oneof![
        (segment(), segment()).prop_map(|(s, n)| format!("{s}.{n}")),
        (segment(), "[a-z0-9/ _-]{1,12}", segment()).prop_map(|(s, sub, n)| format!("{s}.{sub}.{n}")),
    ]
}

fn read_with_stdout(stdout: String) -> ConfigValue {
    let runner = MockRunner::new().respond(ProcessOutput::new(0, stdout, ""));
    GitConfig::new(runner)
        .get_config_value(&Repository::new("/repo"), &ConfigKey::new("a.b").unwrap())
        .unwrap()
}

proptest! {
    #[test]
    fn valid_keys_are_accepted_verbatim(key in valid_key()) {
        let parsed = ConfigKey::new(key.clone()).unwrap();
        prop_assert_eq!(parsed.as_str(), key.as_str());
    }

    #[test]
    fn keys_without_a_dot_are_rejected(key in "[a-zA-Z0-9-]{1,20}") {
        prop_assert!(ConfigKey::new(key).is_err());
    }

    #[test]
    fn names_not_starting_with_a_letter_are_rejected(
        section in segment(),
        name in "[0-9-][a-zA-Z0-9-]{0,10}",
    ) {
        let key = format!("{section}.{name}");
        prop_assert!(ConfigKey::new(key).is_err());
    }

    #[test]
    fn names_with_other_characters_are_rejected(
        section in segment(),
        head in "[a-zA-Z]",
        bad in "[ _:/@]",
    ) {
        let key = format!("{section}.{head}{bad}x");
        prop_assert!(ConfigKey::new(key).is_err());
    }

    #[test]
    fn exit_one_with_diagnostics_is_a_failure(stderr in "[a-z][a-z :]{0,30}") {
        let runner = MockRunner::new().respond(ProcessOutput::new(1, "", stderr));
        let result = GitConfig::new(runner)
            .get_config_value(&Repository::new("/repo"), &ConfigKey::new("a.b").unwrap());
        prop_assert_eq!(result.unwrap_err().exit_code(), Some(1));
    }

    #[test]
    fn exactly_one_trailing_newline_is_dropped(value in "[^\r]{0,40}") {
        let read = read_with_stdout(format!("{value}\n"));
        prop_assert_eq!(read, ConfigValue::Set(value));
    }

    #[test]
    fn exit_zero_is_never_absent(stdout in ".{0,40}") {
        prop_assert!(read_with_stdout(stdout).is_set());
    }

    #[test]
    fn unexpected_exit_codes_are_failures(code in 2i32..=255, stderr in ".{0,40}") {
        let runner = MockRunner::new().respond(ProcessOutput::new(code, "", stderr));
        let result = GitConfig::new(runner)
            .get_global_config_value(&ConfigKey::new("a.b").unwrap(), None);
        let err = result.unwrap_err();
        prop_assert!(err.is_process_failure());
        prop_assert_eq!(err.exit_code(), Some(code));
    }
}
