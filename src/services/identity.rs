//! Ambient author-identity resolution.
//!
//! Resolution chain mirrors what the operator's machine already knows:
//! committer environment overrides first, then the default git
//! configuration, then the macOS keychain GitHub account (name only), and
//! finally a literal placeholder the operator can search for after the run.

use std::env;
use std::process::Command;

use crate::ports::{AuthorIdentity, IdentitySource};

const NAME_PLACEHOLDER: &str = "<GITHUB_USERNAME>";
const EMAIL_PLACEHOLDER: &str = "<EMAIL>";

#[derive(Debug, Clone, Default)]
pub struct GitIdentitySource;

impl GitIdentitySource {
    fn env_override(key: &str) -> Option<String> {
        env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
    }

    fn git_config(key: &str) -> Option<String> {
        let config = git2::Config::open_default().ok()?;
        let value = config.get_string(key).ok()?;
        let value = value.trim().to_string();
        (!value.is_empty()).then_some(value)
    }

    /// GitHub account stored in the macOS keychain. Absent on other
    /// platforms; e-mail-shaped accounts are logins, not usernames, and are
    /// rejected.
    fn keychain_github_account() -> Option<String> {
        let output =
            Command::new("security").args(["find-internet-password", "-s", "github.com"]).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let account = stdout.lines().find_map(|line| {
            line.trim().strip_prefix("\"acct\"<blob>=\"")?.strip_suffix('"').map(str::to_string)
        })?;
        (!account.is_empty() && !account.contains('@')).then_some(account)
    }
}

impl IdentitySource for GitIdentitySource {
    fn resolve(&self) -> AuthorIdentity {
        let name = Self::env_override("GIT_COMMITTER_NAME")
            .or_else(|| Self::git_config("user.name"))
            .or_else(Self::keychain_github_account)
            .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
        let email = Self::env_override("GIT_COMMITTER_EMAIL")
            .or_else(|| Self::git_config("user.email"))
            .unwrap_or_else(|| EMAIL_PLACEHOLDER.to_string());
        AuthorIdentity { name, email }
    }
}
