//! Launch a compiled build tool on behalf of a build generator.
//!
//! A run validates its [`Invocation`] against the caller's working
//! directory, spawns the tool with the remaining arguments, waits for it,
//! and touches the stamp file only when the tool exited with status zero.
//! A nonzero child status is not an error here: it is returned as the
//! [`Outcome`] for the caller to mirror.

pub mod error;
pub mod invocation;
pub mod launch;
pub mod stamp;

pub use error::{ConfigurationError, Error};
pub use invocation::{Invocation, ValidatedInvocation};
pub use launch::{exit_code, launch, Outcome};

use std::path::Path;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate, launch, and stamp on success.
pub fn run(invocation: &Invocation, cwd: &Path) -> Result<Outcome, Error> {
    let validated = invocation.validate(cwd).inspect_err(|err| {
        if err.is_configuration() {
            tracing::warn!(%err, "precondition failed, not launching");
        }
    })?;
    let outcome = launch(&validated)?;
    if outcome.success() {
        if let Some(path) = validated.stamp() {
            stamp::touch(path)?;
        }
    }
    Ok(outcome)
}
