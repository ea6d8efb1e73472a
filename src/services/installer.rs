//! `pod install` invocation.

use std::path::Path;
use std::process::Command;

use console::style;

use crate::domain::AppError;
use crate::ports::Installer;

/// Runs the real `pod install` with inherited stdio, blocking until the
/// child exits.
#[derive(Debug, Clone, Default)]
pub struct PodInstaller;

impl Installer for PodInstaller {
    fn install(&self, dir: &Path) -> Result<(), AppError> {
        println!("\nRunning {} in {}.", style("pod install").magenta(), dir.display());
        println!();
        let status = Command::new("pod").arg("install").current_dir(dir).status().map_err(|e| {
            AppError::InstallFailed { dir: dir.display().to_string(), details: e.to_string() }
        })?;
        if !status.success() {
            return Err(AppError::InstallFailed {
                dir: dir.display().to_string(),
                details: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}
