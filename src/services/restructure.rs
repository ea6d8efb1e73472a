//! Filesystem Restructurer.
//!
//! Turns the instantiated template tree into the final project shape:
//! overlays the strategy's subtree, deletes the scaffold-only artifacts,
//! renames template-named files and folders, and links the example
//! workspace for Carthage. Cleanup is destructive and must run after every
//! step that still reads `templates/` or `setup/`.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::domain::session::PodName;
use crate::services::layout::TemplateLayout;

const SCAFFOLD_DIRS: &[&str] = &[".git", "templates", "setup"];
const SCAFFOLD_FILES: &[&str] =
    &[".travis.yml", "configure", "_CONFIGURE.rb", "README.md", "LICENSE", "CODE_OF_CONDUCT.md"];

/// Copy `templates/<subtree>/` onto the project root, overwriting files that
/// already exist.
pub fn overlay_subtree(layout: &TemplateLayout, subtree: &str) -> Result<(), AppError> {
    let source = layout.subtree(subtree);
    if !source.exists() {
        return Err(AppError::MissingTemplateFile(source));
    }
    for entry in WalkDir::new(&source) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = match entry.path().strip_prefix(&source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = layout.root().join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
    }
    Ok(())
}

/// Delete every scaffold-only artifact. Non-reversible.
pub fn clean_scaffold(layout: &TemplateLayout) -> Result<(), AppError> {
    for dir in SCAFFOLD_DIRS {
        let path = layout.join(dir);
        if path.exists() {
            fs::remove_dir_all(path)?;
        }
    }
    for file in SCAFFOLD_FILES {
        let path = layout.join(file);
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    remove_gitkeeps(layout.root())
}

fn remove_gitkeeps(root: &Path) -> Result<(), AppError> {
    let keeps: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == ".gitkeep")
        .map(|entry| entry.into_path())
        .collect();
    for keep in keeps {
        fs::remove_file(keep)?;
    }
    Ok(())
}

/// Rename the instantiated template files to their project-derived names.
/// Runs after cleanup so the fresh `README.md` and `LICENSE` cannot be
/// swept up as scaffold originals.
pub fn rename_template_files(layout: &TemplateLayout, pod_name: &PodName) -> Result<(), AppError> {
    fs::rename(layout.pod_readme(), layout.join("README.md"))?;
    fs::rename(layout.pod_license(), layout.join("LICENSE"))?;
    fs::rename(layout.podspec_template(), layout.join(&format!("{}.podspec", pod_name)))?;
    Ok(())
}

/// Rename the `Pod/` source folder to the pod name.
pub fn rename_classes_folder(layout: &TemplateLayout, pod_name: &PodName) -> Result<(), AppError> {
    fs::rename(layout.classes_dir(), layout.join(pod_name.as_str()))?;
    Ok(())
}

/// Link the example workspace project into the root so Carthage consumers
/// can resolve it.
pub fn ensure_carthage_compatibility(layout: &TemplateLayout) -> Result<(), AppError> {
    #[cfg(unix)]
    std::os::unix::fs::symlink("Example/Pods/Pods.xcodeproj", layout.join("_Pods.xcodeproj"))?;
    #[cfg(not(unix))]
    let _ = layout;
    Ok(())
}
