// file: src/utils.rs
// version: 1.0.0
// guid: 0b6e8d2c-91f4-4a57-8e3d-7c2a1f9b5e60

//! Helpers shared by the facade operations

use indexmap::IndexMap;
use serde_json::Value;

/// Flag name to value, kept in insertion order so flags render the way they were given
pub type CreateOptions = IndexMap<String, String>;

/// Parse a JSON payload, returning `None` instead of an error on malformed input
pub fn safe_parse(payload: &str) -> Option<Value> {
    serde_json::from_str(payload).ok()
}

/// Wrap a value in double quotes when it contains a space
///
/// Embedded quotes and other shell metacharacters are left alone. Arguments are
/// handed to the tool as a discrete list, so this only affects how a command
/// line is rendered for logs and error messages.
pub fn quotify_arg(arg: &str) -> String {
    if arg.contains(' ') {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Flatten options into `--key value` argument pairs
pub fn flatten_flags(options: &CreateOptions) -> Vec<String> {
    options
        .iter()
        .flat_map(|(key, value)| [format!("--{}", key), value.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_parse_object() {
        let parsed = safe_parse(r#"{"a":1}"#).unwrap();
        assert_eq!(parsed["a"], 1);
    }

    #[test]
    fn test_safe_parse_rejects_garbage() {
        assert!(safe_parse("not json").is_none());
        assert!(safe_parse("").is_none());
    }

    #[test]
    fn test_quotify_arg() {
        assert_eq!(quotify_arg("a b"), "\"a b\"");
        assert_eq!(quotify_arg("ab"), "ab");
    }

    #[test]
    fn test_flatten_flags_keeps_insertion_order() {
        let mut options = CreateOptions::new();
        options.insert("driver".to_string(), "virtualbox".to_string());
        options.insert("virtualbox-memory".to_string(), "2048".to_string());

        assert_eq!(
            flatten_flags(&options),
            vec!["--driver", "virtualbox", "--virtualbox-memory", "2048"]
        );
    }

    #[test]
    fn test_flatten_flags_passes_spaced_values_through() {
        let mut options = CreateOptions::new();
        options.insert("engine-label".to_string(), "env=dev team".to_string());

        assert_eq!(flatten_flags(&options), vec!["--engine-label", "env=dev team"]);
    }
}
