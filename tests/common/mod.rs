//! Shared harness for podsetup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated MainApp checkout with the pod template nested inside it.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    template_root: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a fresh template fixture at `<tmp>/MainApp/Modules/PodTemplate`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let template_root = root.path().join("MainApp").join("Modules").join("PodTemplate");
        fs::create_dir_all(&template_root).expect("Failed to create template root");
        write_template_fixture(&template_root);
        write_file(
            &root.path().join("MainApp").join("Podfile"),
            "# ${NEW_TARGET_GOES_HERE}\n\ntarget 'MainApp' do\n  # ${NEW_POD_GOES_HERE}\nend\n",
        );
        Self { root, template_root }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn main_app_podfile(&self) -> PathBuf {
        self.root.path().join("MainApp").join("Podfile")
    }

    /// Build a command for the compiled binary, run inside the template
    /// root with a deterministic author identity.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("podsetup").expect("Failed to locate podsetup binary");
        cmd.current_dir(&self.template_root)
            .env("GIT_COMMITTER_NAME", "Ada Lovelace")
            .env("GIT_COMMITTER_EMAIL", "ada@example.com");
        cmd
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.template_root.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.template_root.join(rel).exists()
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.template_root.join(rel))
            .unwrap_or_else(|e| panic!("Failed to remove {rel}: {e}"));
    }

    pub fn assert_project_shape(&self, pod_name: &str) {
        assert!(self.exists("README.md"), "README.md should exist");
        assert!(self.exists("LICENSE"), "LICENSE should exist");
        assert!(self.exists(&format!("{pod_name}.podspec")), "podspec should be renamed");
        assert!(self.template_root.join(pod_name).is_dir(), "classes folder should be renamed");
        assert!(!self.exists("POD_README.md"), "template readme should be gone");
        assert!(!self.exists("templates"), "templates/ should be cleaned up");
        assert!(!self.exists("setup"), "setup/ should be cleaned up");
        assert!(!self.exists("_CONFIGURE.rb"), "legacy entry point should be cleaned up");
    }
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_template_fixture(root: &Path) {
    write_file(
        &root.join("POD_README.md"),
        "# ${POD_NAME}\n\nHello ${POD_NAME}, by ${USER_NAME} ${YEAR}\nRepo: ${REPO_NAME}\n",
    );
    write_file(&root.join("POD_LICENSE"), "Copyright (c) ${YEAR} ${USER_NAME} <${USER_EMAIL}>\n");
    write_file(
        &root.join("NAME.podspec"),
        "Pod::Spec.new do |s|\n  s.name = '${POD_NAME}'\n  s.author = { '${USER_NAME}' => '${USER_EMAIL}' }\n  s.summary = 'Created ${DATE}.'\nend\n",
    );
    write_file(
        &root.join("Example/Podfile"),
        "use_frameworks!\n\ntarget '${POD_NAME}_Example' do\n    ${INCLUDED_PODS}\nend\n",
    );
    write_file(&root.join("Pod/Classes/.gitkeep"), "");

    for subtree in ["swift", "macos-swift"] {
        write_file(
            &root.join(format!("templates/{subtree}/Example/Tests/Tests.swift")),
            "import XCTest\n\nclass Tests: XCTestCase {\n    ${TEST_EXAMPLE}\n}\n",
        );
    }
    write_file(
        &root.join("templates/objc/Example/Tests/Tests.m"),
        "@import XCTest;\n\n@implementation Tests\n${TEST_EXAMPLE}\n@end\n",
    );
    write_file(
        &root.join("templates/objc/Example/Tests/Tests-Prefix.pch"),
        "#ifdef __OBJC__\n  ${INCLUDED_PREFIXES}\n#endif\n",
    );

    write_file(
        &root.join("setup/test_examples/xctest.swift"),
        "func testExample() {\n        XCTAssert(true, \"works\")\n    }",
    );
    write_file(
        &root.join("setup/test_examples/xctest.m"),
        "- (void)testExample {\n    XCTAssert(YES, @\"works\");\n}",
    );

    write_file(
        &root.join("POD_TARGET_TEMPLATE"),
        "def ${POD_NAME_LOWERCASE}_pod\n  pod '${POD_NAME}', :path => 'Modules/${POD_NAME}'\nend\n\ntarget '${POD_NAME}_Example' do\n  ${POD_NAME_LOWERCASE}_pod\nend\n",
    );

    write_file(&root.join(".travis.yml"), "language: objective-c\n");
    write_file(&root.join("configure"), "#!/bin/sh\n");
    write_file(&root.join("_CONFIGURE.rb"), "# legacy entry point\n");
    write_file(&root.join("README.md"), "# Template repo readme\n");
    write_file(&root.join("LICENSE"), "Template repo license\n");
    write_file(&root.join("CODE_OF_CONDUCT.md"), "Be kind.\n");
}
