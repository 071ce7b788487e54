//! Boolean environment variables.

use thiserror::Error;

/// A value that is not one of the recognized boolean spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid boolean value '{value}'")]
pub struct ParseBoolError {
    pub value: String,
}

/// Parse a boolean the way command-line tools usually spell them.
///
/// Accepts `1 yes y true t on` and `0 no n false f off`, case-insensitively.
pub fn parse_boolean(value: &str) -> Result<bool, ParseBoolError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "y" | "true" | "t" | "on" => Ok(true),
        "0" | "no" | "n" | "false" | "f" | "off" => Ok(false),
        _ => Err(ParseBoolError {
            value: value.to_string(),
        }),
    }
}

/// Read `key` with `env_fn` and parse it as a boolean.
///
/// Returns `None` when the variable is unset.
pub fn env_bool<F>(key: &str, env_fn: F) -> Option<Result<bool, ParseBoolError>>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match env_fn(key) {
        Ok(value) => Some(parse_boolean(&value)),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(raw)) => Some(Err(ParseBoolError {
            value: raw.to_string_lossy().into_owned(),
        })),
    }
}
