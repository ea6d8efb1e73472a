use std::fmt;

use crate::domain::AppError;

/// Validated pod name. Every name-derived artifact in the run (podspec file,
/// classes folder, MainApp target) comes from this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodName(String);

impl PodName {
    /// Validate a raw name. The name becomes a file and folder name, so it
    /// must be non-empty and free of path separators and relative components.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && !trimmed.starts_with('.')
            && !trimmed.chars().any(|c| matches!(c, '/' | '\\' | ':' | '\0'));
        if !valid {
            return Err(AppError::InvalidPodName(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Repository name: `+` is legal in a pod name but not in a repo name.
    pub fn repo_name(&self) -> String {
        self.0.replace('+', "-")
    }

    /// Lowercase form used for the MainApp dependency reference.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for PodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable state for a single configuration run. Owned by the pipeline and
/// written into by the selected strategy.
#[derive(Debug)]
pub struct Session {
    pod_name: PodName,
    pods_for_podfile: Vec<String>,
    prefixes: Vec<String>,
    main_app_forced: bool,
}

impl Session {
    pub fn new(pod_name: PodName) -> Self {
        Self { pod_name, pods_for_podfile: Vec::new(), prefixes: Vec::new(), main_app_forced: false }
    }

    pub fn pod_name(&self) -> &PodName {
        &self.pod_name
    }

    /// Queue a pod for the `${INCLUDED_PODS}` block of the Example Podfile.
    pub fn add_pod(&mut self, name: &str) {
        self.pods_for_podfile.push(name.to_string());
    }

    pub fn pods(&self) -> &[String] {
        &self.pods_for_podfile
    }

    /// Queue a line for the `${INCLUDED_PREFIXES}` block of the prefix header.
    pub fn add_prefix_line(&mut self, line: &str) {
        self.prefixes.push(line.to_string());
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Skip the MainApp question and opt in unconditionally (Magic bundle).
    pub fn force_main_app(&mut self) {
        self.main_app_forced = true;
    }

    pub fn main_app_forced(&self) -> bool {
        self.main_app_forced
    }
}
