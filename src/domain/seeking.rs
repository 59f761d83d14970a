//! Parsing of the "seeking talent" / "seeking venue" submission field.
//!
//! The web form sends free text. Only the exact token `"Yes"` means true;
//! every other value, including `"yes"`, `"YES"`, `"true"` and the empty
//! string, means false. JSON clients may send a real boolean instead.

use serde::{Deserialize, Deserializer};

/// The only text value that sets a seeking flag.
pub const AFFIRMATIVE: &str = "Yes";

/// Returns `true` only for the exact affirmative token.
#[must_use]
pub fn is_affirmative(value: &str) -> bool {
    value == AFFIRMATIVE
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagInput {
    Bool(bool),
    Text(String),
}

/// Serde adapter for seeking flags: accepts a boolean or free text.
///
/// Use together with `#[serde(default)]` so a missing field reads as false.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither a boolean
/// nor a string.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagInput::deserialize(deserializer)? {
        FlagInput::Bool(flag) => flag,
        FlagInput::Text(text) => is_affirmative(&text),
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Submission {
        #[serde(default, deserialize_with = "deserialize_flag")]
        seeking: bool,
    }

    fn decode_text(value: &str) -> bool {
        let Ok(sub) = serde_json::from_value::<Submission>(serde_json::json!({ "seeking": value }))
        else {
            panic!("decoding failed for {value:?}");
        };
        sub.seeking
    }

    #[test]
    fn exact_token_is_true() {
        assert!(is_affirmative("Yes"));
        assert!(decode_text("Yes"));
    }

    #[test]
    fn case_variants_and_others_are_false() {
        for value in ["yes", "YES", "true", "", "No", " Yes"] {
            assert!(!decode_text(value), "{value:?} must not be affirmative");
        }
    }

    #[test]
    fn json_booleans_are_accepted() {
        let Ok(sub) = serde_json::from_str::<Submission>(r#"{"seeking": true}"#) else {
            panic!("decoding failed");
        };
        assert!(sub.seeking);
    }

    #[test]
    fn missing_field_is_false() {
        let Ok(sub) = serde_json::from_str::<Submission>("{}") else {
            panic!("decoding failed");
        };
        assert!(!sub.seeking);
    }
}
