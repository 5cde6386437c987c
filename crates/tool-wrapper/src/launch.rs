//! Child process launch and exit status mapping.

use crate::error::Error;
use crate::invocation::ValidatedInvocation;
use std::process::{Command, ExitStatus};

/// How the child finished, with the status this process should exit with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: ExitStatus,
    pub code: i32,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Spawn the child with inherited stdio and block until it exits.
pub fn launch(invocation: &ValidatedInvocation) -> Result<Outcome, Error> {
    let mut command = Command::new(invocation.program());
    command.args(invocation.args());
    if let Some(dir) = invocation.chdir() {
        command.current_dir(dir);
    }

    tracing::info!(
        program = %invocation.program().display(),
        args = ?invocation.args().collect::<Vec<_>>(),
        chdir = ?invocation.chdir(),
        "launching"
    );
    let status = command.status().map_err(|source| Error::Spawn {
        program: invocation.program().to_path_buf(),
        source,
    })?;
    let code = exit_code(status);
    tracing::info!(code, %status, "child exited");
    Ok(Outcome { status, code })
}

/// The child's own code, or `128 + signal` when it was killed by a signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
