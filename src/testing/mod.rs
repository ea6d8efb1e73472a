//! In-crate fakes and fixtures for exercising the pipeline without ambient
//! state.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{AuthorIdentity, IdentitySource, Installer};

/// Identity source returning a fixed name/email pair.
#[derive(Debug, Clone, Default)]
pub struct FakeIdentity;

pub fn fake_identity() -> AuthorIdentity {
    AuthorIdentity { name: "Ada Lovelace".to_string(), email: "ada@example.com".to_string() }
}

impl IdentitySource for FakeIdentity {
    fn resolve(&self) -> AuthorIdentity {
        fake_identity()
    }
}

/// Installer that records requested directories instead of spawning pod.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub calls: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl Installer for RecordingInstaller {
    fn install(&self, dir: &Path) -> Result<(), AppError> {
        self.calls.borrow_mut().push(dir.to_path_buf());
        if self.fail {
            return Err(AppError::InstallFailed {
                dir: dir.display().to_string(),
                details: "forced failure".to_string(),
            });
        }
        Ok(())
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lay down a minimal but complete template tree at `root`, mirroring the
/// pre-run filesystem contract.
pub fn write_template_tree(root: &Path) {
    write(
        root,
        "POD_README.md",
        "# ${POD_NAME}\n\nHello ${POD_NAME}, by ${USER_NAME} ${YEAR}\nRepo: ${REPO_NAME}\n",
    );
    write(root, "POD_LICENSE", "Copyright (c) ${YEAR} ${USER_NAME} <${USER_EMAIL}>\n");
    write(
        root,
        "NAME.podspec",
        concat!(
            "Pod::Spec.new do |s|\n",
            "  s.name    = '${POD_NAME}'\n",
            "  s.author  = { '${USER_NAME}' => '${USER_EMAIL}' }\n",
            "  s.source  = { :git => 'https://github.com/${USER_NAME}/${REPO_NAME}.git' }\n",
            "  s.summary = 'Created ${DATE}.'\n",
            "end\n",
        ),
    );
    write(
        root,
        "Example/Podfile",
        "use_frameworks!\n\ntarget '${POD_NAME}_Example' do\n    ${INCLUDED_PODS}\nend\n",
    );
    write(root, "Pod/Classes/.gitkeep", "");

    for subtree in ["swift", "macos-swift"] {
        write(
            root,
            &format!("templates/{}/Example/Tests/Tests.swift", subtree),
            "import XCTest\n\nclass Tests: XCTestCase {\n    ${TEST_EXAMPLE}\n}\n",
        );
    }
    write(
        root,
        "templates/objc/Example/Tests/Tests.m",
        "@import XCTest;\n\n@implementation Tests\n${TEST_EXAMPLE}\n@end\n",
    );
    write(
        root,
        "templates/objc/Example/Tests/Tests-Prefix.pch",
        "#ifdef __OBJC__\n  ${INCLUDED_PREFIXES}\n#endif\n",
    );

    write(
        root,
        "setup/test_examples/xctest.swift",
        "func testExample() {\n        XCTAssert(true, \"works\")\n    }",
    );
    write(
        root,
        "setup/test_examples/xctest.m",
        "- (void)testExample {\n    XCTAssert(YES, @\"works\");\n}",
    );

    write(
        root,
        "POD_TARGET_TEMPLATE",
        concat!(
            "def ${POD_NAME_LOWERCASE}_pod\n",
            "  pod '${POD_NAME}', :path => 'Modules/${POD_NAME}'\n",
            "end\n",
            "\n",
            "target '${POD_NAME}_Example' do\n",
            "  ${POD_NAME_LOWERCASE}_pod\n",
            "end\n",
        ),
    );

    // Scaffold-only artifacts the cleanup step removes.
    write(root, ".travis.yml", "language: objective-c\n");
    write(root, "configure", "#!/bin/sh\n");
    write(root, "_CONFIGURE.rb", "# legacy entry point\n");
    write(root, "README.md", "# Template repo readme\n");
    write(root, "LICENSE", "Template repo license\n");
    write(root, "CODE_OF_CONDUCT.md", "Be kind.\n");
}

/// Template tree nested inside a MainApp checkout. Returns the template
/// root (`<root>/MainApp/Modules/PodTemplate`).
pub fn write_main_app_tree(root: &Path) -> PathBuf {
    let template_root = root.join("MainApp").join("Modules").join("PodTemplate");
    fs::create_dir_all(&template_root).unwrap();
    write_template_tree(&template_root);
    write(
        root,
        "MainApp/Podfile",
        concat!(
            "# ${NEW_TARGET_GOES_HERE}\n",
            "\n",
            "target 'MainApp' do\n",
            "  # ${NEW_POD_GOES_HERE}\n",
            "end\n",
        ),
    );
    template_root
}
