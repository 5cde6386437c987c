use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A precondition that failed before any child process was started.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no command given")]
    EmptyCommand,
    #[error("Cannot chdir to {} from {}", .chdir.display(), .cwd.display())]
    MissingDirectory { chdir: PathBuf, cwd: PathBuf },
    #[error("Cannot find {}", .program.display())]
    MissingExecutable { program: PathBuf },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("cannot resolve an absolute path for {}", .program.display())]
    Resolve { program: PathBuf, source: io::Error },
    #[error("failed to launch {}", .program.display())]
    Spawn { program: PathBuf, source: io::Error },
    #[error("failed to touch stamp file {}", .path.display())]
    Stamp { path: PathBuf, source: io::Error },
}

impl Error {
    /// True when the failure happened before anything was spawned.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
