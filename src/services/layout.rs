//! Well-known locations inside the template tree.

use std::path::{Path, PathBuf};

use crate::domain::strategy::TestExample;

/// Every path the pipeline touches, derived from the template root. The
/// layout is the filesystem contract with the template repository; nothing
/// else in the crate spells out a path.
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    root: PathBuf,
}

impl TemplateLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn pod_license(&self) -> PathBuf {
        self.join("POD_LICENSE")
    }

    pub fn pod_readme(&self) -> PathBuf {
        self.join("POD_README.md")
    }

    pub fn podspec_template(&self) -> PathBuf {
        self.join("NAME.podspec")
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.join("Pod")
    }

    pub fn example_dir(&self) -> PathBuf {
        self.join("Example")
    }

    pub fn example_podfile(&self) -> PathBuf {
        self.example_dir().join("Podfile")
    }

    pub fn prefix_header(&self) -> PathBuf {
        self.example_dir().join("Tests").join("Tests-Prefix.pch")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.join("templates")
    }

    pub fn subtree(&self, name: &str) -> PathBuf {
        self.templates_dir().join(name)
    }

    /// Test file inside a subtree, before the overlay moves it into place.
    pub fn subtree_tests_file(&self, subtree: &str, extension: &str) -> PathBuf {
        self.subtree(subtree).join("Example").join("Tests").join(format!("Tests.{}", extension))
    }

    /// Canned test-framework example for a framework/language pair.
    pub fn test_example(&self, example: TestExample) -> PathBuf {
        self.join("setup")
            .join("test_examples")
            .join(format!("{}.{}", example.framework, example.extension))
    }

    pub fn pod_target_template(&self) -> PathBuf {
        self.join("POD_TARGET_TEMPLATE")
    }

    /// The enclosing application's Podfile, two levels up: the template is
    /// checked out at `<MainApp>/Modules/<PodName>`.
    pub fn main_app_podfile(&self) -> PathBuf {
        self.root.join("..").join("..").join("Podfile")
    }

    /// Directory `pod install` runs in for the MainApp pass.
    pub fn main_app_dir(&self) -> PathBuf {
        self.root.join("..").join("..")
    }
}
