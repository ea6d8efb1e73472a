//! Configuration strategies and the decision tree that selects one.

use crate::domain::question::Question;
use crate::domain::session::Session;

/// Key of a canned test-framework example spliced into the generated test
/// file, paired with the source-file extension it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestExample {
    pub framework: &'static str,
    pub extension: &'static str,
}

const XCTEST_SWIFT: TestExample = TestExample { framework: "xctest", extension: "swift" };
const XCTEST_OBJC: TestExample = TestExample { framework: "xctest", extension: "m" };

/// One fixed configuration path through the template. The set is closed;
/// every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationStrategy {
    /// Fixed iOS + Swift + XCTest bundle, MainApp opt-in included.
    Magic,
    IosSwiftManual,
    IosObjcManual,
    MacosSwiftManual,
}

impl ConfigurationStrategy {
    pub fn display_name(self) -> &'static str {
        match self {
            ConfigurationStrategy::Magic => "Magic",
            ConfigurationStrategy::IosSwiftManual => "iOS Swift",
            ConfigurationStrategy::IosObjcManual => "iOS ObjC",
            ConfigurationStrategy::MacosSwiftManual => "macOS Swift",
        }
    }

    /// Template subtree the restructurer overlays onto the project root.
    pub fn template_subtree(self) -> &'static str {
        match self {
            ConfigurationStrategy::Magic | ConfigurationStrategy::IosSwiftManual => "swift",
            ConfigurationStrategy::IosObjcManual => "objc",
            ConfigurationStrategy::MacosSwiftManual => "macos-swift",
        }
    }

    /// Canned example spliced into the subtree's test file.
    pub fn test_example(self) -> TestExample {
        match self {
            ConfigurationStrategy::IosObjcManual => XCTEST_OBJC,
            _ => XCTEST_SWIFT,
        }
    }

    /// Write this strategy's pods, prefix lines, and MainApp opt-in into the
    /// session. Runs exactly once per run and never prompts.
    pub fn apply(self, session: &mut Session) {
        match self {
            ConfigurationStrategy::Magic => {
                session.add_pod("Swift-Utils");
                session.force_main_app();
            }
            ConfigurationStrategy::IosSwiftManual => {
                session.add_pod("Swift-Utils");
            }
            ConfigurationStrategy::IosObjcManual => {
                session.add_pod("ObjC-Utils");
                session.add_prefix_line("#import <ObjC-Utils/ObjC-Utils.h>");
            }
            ConfigurationStrategy::MacosSwiftManual => {
                session.add_pod("Swift-Utils");
            }
        }
    }

    /// Whether the MainApp Podfile can take this module as a target. The
    /// macOS path has no MainApp target stanza.
    pub fn supports_main_app(self) -> bool {
        !matches!(self, ConfigurationStrategy::MacosSwiftManual)
    }
}

/// Decision tree over validated prompt answers. Selection is pure; nothing
/// is applied to the session until a strategy is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionState {
    AskMagic,
    AskPlatform,
    AskLanguage,
    Resolved(ConfigurationStrategy),
}

/// What the pipeline should do next for a given decision state.
#[derive(Debug, Clone, Copy)]
pub enum DecisionStep {
    Ask(Question<'static>),
    Resolved(ConfigurationStrategy),
}

impl DecisionState {
    pub fn step(self) -> DecisionStep {
        match self {
            DecisionState::AskMagic => DecisionStep::Ask(Question {
                text: "Do you want to use Magic? If No, proceed at your own risk.",
                answers: &["Yes", "No"],
            }),
            DecisionState::AskPlatform => DecisionStep::Ask(Question {
                text: "What platform do you want to use?",
                answers: &["iOS", "macOS"],
            }),
            DecisionState::AskLanguage => DecisionStep::Ask(Question {
                text: "What language do you want to use?",
                answers: &["Swift", "ObjC"],
            }),
            DecisionState::Resolved(strategy) => DecisionStep::Resolved(strategy),
        }
    }

    /// Advance on an answer already validated against the state's question.
    pub fn advance(self, answer: &str) -> Self {
        match self {
            DecisionState::AskMagic if answer == "yes" => {
                DecisionState::Resolved(ConfigurationStrategy::Magic)
            }
            DecisionState::AskMagic => DecisionState::AskPlatform,
            DecisionState::AskPlatform if answer == "macos" => {
                DecisionState::Resolved(ConfigurationStrategy::MacosSwiftManual)
            }
            DecisionState::AskPlatform => DecisionState::AskLanguage,
            DecisionState::AskLanguage if answer == "swift" => {
                DecisionState::Resolved(ConfigurationStrategy::IosSwiftManual)
            }
            DecisionState::AskLanguage => {
                DecisionState::Resolved(ConfigurationStrategy::IosObjcManual)
            }
            resolved @ DecisionState::Resolved(_) => resolved,
        }
    }
}
