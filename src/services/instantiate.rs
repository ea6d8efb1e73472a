//! Template Instantiation Engine.
//!
//! Rewrites the fixed set of placeholder files in place. A file is written
//! only after its whole substitution pass succeeds, so a fatal error leaves
//! it untouched rather than half-rendered.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::domain::AppError;
use crate::domain::placeholders::{self, Substitutions};
use crate::domain::session::PodName;
use crate::domain::strategy::TestExample;
use crate::ports::AuthorIdentity;
use crate::services::layout::TemplateLayout;

/// Read a file the run cannot proceed without.
pub(crate) fn read_required(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::MissingTemplateFile(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Build the identity/date token map. Resolved once, before any file is
/// touched.
pub fn base_substitutions(pod_name: &PodName, identity: &AuthorIdentity) -> Substitutions {
    let now = Local::now();
    let mut subs = Substitutions::new();
    subs.set(placeholders::POD_NAME, pod_name.as_str());
    subs.set(placeholders::REPO_NAME, pod_name.repo_name());
    subs.set(placeholders::USER_NAME, identity.name.as_str());
    subs.set(placeholders::USER_EMAIL, identity.email.as_str());
    subs.set(placeholders::YEAR, now.format("%Y").to_string());
    subs.set(placeholders::DATE, now.format("%Y-%m-%d").to_string());
    subs
}

/// Substitute `subs` into the file at `path`, then fail on any leftover
/// `${...}` marker not in `allowed`.
pub fn substitute_file(path: &Path, subs: &Substitutions, allowed: &[&str]) -> Result<(), AppError> {
    let text = read_required(path)?;
    let rendered = subs.render(&text);
    placeholders::ensure_no_leftovers(&rendered, path, allowed)?;
    fs::write(path, rendered)?;
    Ok(())
}

/// Rewrite every placeholder file at the template root. Each file is
/// substituted at most once per run; a second pass over an already rendered
/// tree is a no-op since no token remains to match.
pub fn replace_variables_in_files(
    layout: &TemplateLayout,
    subs: &Substitutions,
) -> Result<(), AppError> {
    substitute_file(&layout.pod_license(), subs, &[])?;
    substitute_file(&layout.pod_readme(), subs, &[])?;
    substitute_file(&layout.podspec_template(), subs, &[])?;
    // The pod block is merged later; its marker must survive this pass.
    substitute_file(&layout.example_podfile(), subs, &[placeholders::INCLUDED_PODS])?;
    Ok(())
}

/// Splice the strategy's canned example into the subtree's test file. Runs
/// before the overlay so the spliced file is what lands in the project.
pub fn splice_test_example(
    layout: &TemplateLayout,
    subtree: &str,
    example: TestExample,
) -> Result<(), AppError> {
    let example_body = read_required(&layout.test_example(example))?;
    let tests_path = layout.subtree_tests_file(subtree, example.extension);
    let tests = read_required(&tests_path)?;
    let mut subs = Substitutions::new();
    subs.set(placeholders::TEST_EXAMPLE, example_body);
    fs::write(&tests_path, subs.render(&tests))?;
    Ok(())
}
