use crate::ports::{IdentitySource, Installer};

/// Injected collaborators for one configuration run.
pub struct AppContext<I, N> {
    pub identity: I,
    pub installer: N,
}

impl<I: IdentitySource, N: Installer> AppContext<I, N> {
    pub fn new(identity: I, installer: N) -> Self {
        Self { identity, installer }
    }
}
