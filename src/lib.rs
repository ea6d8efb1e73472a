//! podsetup: interactive configurator that turns the pod library template
//! into a ready-to-build CocoaPods project.
//!
//! One run is a single linear pass: a short prompt sequence resolves a
//! [`ConfigurationStrategy`], the strategy writes its pods, prefix lines,
//! and template subtree into the session, and the filesystem steps then
//! substitute placeholders, restructure the tree, merge the Podfiles, and
//! invoke `pod install`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::io;
use std::path::PathBuf;

use app::{AppContext, pipeline};
use domain::session::PodName;
use services::{GitIdentitySource, PodInstaller, Prompter, TemplateLayout};

pub use domain::{AppError, ConfigurationStrategy};

/// Configure the template tree at `root` into a pod. When `pod_name` is
/// omitted the operator is prompted for one, re-asking until the name is
/// valid.
pub fn configure(root: PathBuf, pod_name: Option<&str>) -> Result<(), AppError> {
    let layout = TemplateLayout::new(root);
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    app::messages::welcome();

    let pod_name = match pod_name {
        Some(name) => PodName::new(name)?,
        None => loop {
            let answer = prompter.ask("What is your pod name")?;
            match PodName::new(&answer) {
                Ok(name) => break name,
                Err(e) => println!("{}", e),
            }
        },
    };

    let ctx = AppContext::new(GitIdentitySource, PodInstaller);
    pipeline::run(&layout, pod_name, &mut prompter, &ctx)
}
