/// Author identity stamped into the generated license, readme, and podspec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorIdentity {
    pub name: String,
    pub email: String,
}

/// Source of the ambient author identity (environment, keychain, git
/// configuration). Injected into the pipeline so tests can supply a fixed
/// identity instead of depending on the operator's machine.
pub trait IdentitySource {
    fn resolve(&self) -> AuthorIdentity;
}
