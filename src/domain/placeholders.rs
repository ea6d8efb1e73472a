//! The delimited placeholder vocabulary and whole-string substitution.
//!
//! Tokens are replaced verbatim, every occurrence, with no escaping and no
//! nesting; the vocabulary below is the exact wire format of the template
//! tree and must not drift.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::AppError;

pub const POD_NAME: &str = "${POD_NAME}";
pub const REPO_NAME: &str = "${REPO_NAME}";
pub const USER_NAME: &str = "${USER_NAME}";
pub const USER_EMAIL: &str = "${USER_EMAIL}";
pub const YEAR: &str = "${YEAR}";
pub const DATE: &str = "${DATE}";
pub const TEST_EXAMPLE: &str = "${TEST_EXAMPLE}";
pub const POD_NAME_LOWERCASE: &str = "${POD_NAME_LOWERCASE}";
pub const INCLUDED_PODS: &str = "${INCLUDED_PODS}";
pub const INCLUDED_PREFIXES: &str = "${INCLUDED_PREFIXES}";
pub const NEW_TARGET_GOES_HERE: &str = "${NEW_TARGET_GOES_HERE}";
pub const NEW_POD_GOES_HERE: &str = "${NEW_POD_GOES_HERE}";

/// Fully resolved token-to-value map. Built once, before any file is
/// rewritten; tokens never reference each other, so application order is
/// irrelevant (a BTreeMap keeps it deterministic anyway).
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: BTreeMap<&'static str, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: &'static str, value: impl Into<String>) {
        self.values.insert(token, value.into());
    }

    /// Replace every occurrence of every mapped token.
    pub fn render(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, value) in &self.values {
            out = out.replace(token, value);
        }
        out
    }
}

/// Fail on any `${...}` marker left in `text`, tolerating only `allowed`.
pub fn ensure_no_leftovers(text: &str, file: &Path, allowed: &[&str]) -> Result<(), AppError> {
    for token in leftover_tokens(text) {
        if !allowed.contains(&token.as_str()) {
            return Err(AppError::UnresolvedPlaceholder { token, file: file.to_path_buf() });
        }
    }
    Ok(())
}

fn leftover_tokens(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                found.push(tail[..=end].to_string());
                rest = &tail[end + 1..];
            }
            None => break,
        }
    }
    found
}
