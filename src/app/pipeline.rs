//! The single linear configuration run.
//!
//! Prompts feed the decision tree, the resolved strategy writes into the
//! session, and the filesystem steps then run in strict dependency order:
//! test splice and placeholder substitution first, then the subtree
//! overlay, then the destructive cleanup, then renames and merges.

use std::io::{BufRead, Write};

use crate::app::context::AppContext;
use crate::app::messages;
use crate::domain::AppError;
use crate::domain::question::Question;
use crate::domain::session::{PodName, Session};
use crate::domain::strategy::{ConfigurationStrategy, DecisionState, DecisionStep};
use crate::ports::{IdentitySource, Installer};
use crate::services::layout::TemplateLayout;
use crate::services::prompter::Prompter;
use crate::services::{instantiate, podfile, restructure};

const MAIN_APP_QUESTION: Question<'static> = Question {
    text: "Would you like to add this module on the MainApp Podfile",
    answers: &["Yes", "No"],
};

/// Walk the decision tree until a strategy is resolved. Pure apart from the
/// prompts themselves.
fn resolve_strategy<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<ConfigurationStrategy, AppError> {
    let mut state = DecisionState::AskMagic;
    loop {
        match state.step() {
            DecisionStep::Ask(question) => {
                let answer = prompter.ask_with_answers(&question)?;
                state = state.advance(&answer);
            }
            DecisionStep::Resolved(strategy) => return Ok(strategy),
        }
    }
}

fn report_install(result: Result<(), AppError>) {
    // Install failures are reported only; the scaffolding is already on disk.
    if let Err(e) = result {
        eprintln!("Warning: {}", e);
    }
}

/// Drive one full run against the template tree at `layout`.
pub fn run<R, W, I, N>(
    layout: &TemplateLayout,
    pod_name: PodName,
    prompter: &mut Prompter<R, W>,
    ctx: &AppContext<I, N>,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    I: IdentitySource,
    N: Installer,
{
    let mut session = Session::new(pod_name);

    let strategy = resolve_strategy(prompter)?;
    strategy.apply(&mut session);

    instantiate::splice_test_example(layout, strategy.template_subtree(), strategy.test_example())?;
    let subs = instantiate::base_substitutions(session.pod_name(), &ctx.identity.resolve());
    instantiate::replace_variables_in_files(layout, &subs)?;

    restructure::overlay_subtree(layout, strategy.template_subtree())?;
    restructure::clean_scaffold(layout)?;
    restructure::rename_template_files(layout, session.pod_name())?;

    podfile::add_pods_to_podfile(layout, &session)?;
    podfile::customise_prefix(layout, &session)?;

    restructure::rename_classes_folder(layout, session.pod_name())?;
    restructure::ensure_carthage_compatibility(layout)?;

    report_install(ctx.installer.install(&layout.example_dir()));

    let include_in_main_app = session.main_app_forced()
        || prompter.ask_with_answers(&MAIN_APP_QUESTION)? == "yes";
    if include_in_main_app {
        if !strategy.supports_main_app() {
            return Err(AppError::MainAppUnsupported(strategy.display_name().to_string()));
        }
        podfile::add_pods_to_main_app_podfile(layout, &session)?;
        report_install(ctx.installer.install(&layout.main_app_dir()));
    }

    messages::farewell(session.pod_name().as_str());
    Ok(())
}
