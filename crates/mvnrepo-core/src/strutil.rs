//! Small string helpers shared by the verifier, the probe and the CLI.

use crate::error::ParseBoolError;
use regex::Regex;

const TRUE_WORDS: [&str; 5] = ["true", "yes", "t", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "no", "f", "n", "0"];

/// Parse a boolean flag value, case-insensitively.
///
/// Accepts `true/yes/t/y/1` and `false/no/f/n/0`; anything else is an error.
pub fn to_bool(s: &str) -> Result<bool, ParseBoolError> {
    let lower = s.to_lowercase();
    if TRUE_WORDS.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(ParseBoolError(s.to_string()))
    }
}

/// Append `/` to `url` unless it already ends with one.
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Translate a `*` glob into a regex pattern.
///
/// Every other character matches literally; there is no `?` or `[...]`
/// support. The pattern is not anchored.
pub fn glob_to_regex(pattern: &str) -> String {
    regex::escape(pattern).replace(r"\*", ".*")
}

/// Compile `pattern` as a glob that must match the whole input.
pub fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^{}$", glob_to_regex(pattern)))
}
