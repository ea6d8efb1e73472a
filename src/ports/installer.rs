use std::path::Path;

use crate::domain::AppError;

/// External package-manager install step. Failures are reported by the
/// caller and never abort the run; the scaffolding is already on disk.
pub trait Installer {
    fn install(&self, dir: &Path) -> Result<(), AppError>;
}
