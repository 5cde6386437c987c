//! Arguments of a single wrapper run and the checks made before spawning.
//!
//! All relative paths are interpreted against the wrapper's own working
//! directory. The `chdir` override only applies to the child, so the
//! executable is looked up before that override takes effect.

use crate::error::{ConfigurationError, Error};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub chdir: Option<PathBuf>,
    pub stamp: Option<PathBuf>,
    /// Executable path followed by its arguments.
    pub cmd: Vec<OsString>,
}

impl Invocation {
    pub fn new<I, S>(cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            chdir: None,
            stamp: None,
            cmd: cmd.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_chdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chdir = Some(dir.into());
        self
    }

    pub fn with_stamp(mut self, path: impl Into<PathBuf>) -> Self {
        self.stamp = Some(path.into());
        self
    }

    /// Check preconditions against `cwd` and resolve every path to an absolute one.
    ///
    /// Order: empty command, then `chdir`, then the executable. An empty
    /// `chdir` or `stamp` counts as not given.
    pub fn validate(&self, cwd: &Path) -> Result<ValidatedInvocation, Error> {
        let (program, args) = self
            .cmd
            .split_first()
            .ok_or(ConfigurationError::EmptyCommand)?;

        let chdir = non_empty(self.chdir.as_deref()).map(|dir| cwd.join(dir));
        if let (Some(given), Some(resolved)) = (self.chdir.as_ref(), chdir.as_ref()) {
            if !resolved.is_dir() {
                return Err(ConfigurationError::MissingDirectory {
                    chdir: given.clone(),
                    cwd: cwd.to_path_buf(),
                }
                .into());
            }
        }

        let program = Path::new(program);
        let joined = cwd.join(program);
        if program.as_os_str().is_empty() || !joined.exists() {
            return Err(ConfigurationError::MissingExecutable {
                program: program.to_path_buf(),
            }
            .into());
        }
        let program = std::path::absolute(&joined).map_err(|source| Error::Resolve {
            program: program.to_path_buf(),
            source,
        })?;

        let validated = ValidatedInvocation {
            program,
            args: args.to_vec(),
            chdir,
            stamp: non_empty(self.stamp.as_deref()).map(|path| cwd.join(path)),
        };
        tracing::debug!(?validated, "validated invocation");
        Ok(validated)
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// An invocation whose preconditions held at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInvocation {
    program: PathBuf,
    args: Vec<OsString>,
    chdir: Option<PathBuf>,
    stamp: Option<PathBuf>,
}

impl ValidatedInvocation {
    /// Absolute path of the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    pub fn chdir(&self) -> Option<&Path> {
        self.chdir.as_deref()
    }

    pub fn stamp(&self) -> Option<&Path> {
        self.stamp.as_deref()
    }
}
