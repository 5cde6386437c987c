use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tool_wrapper::Invocation;

mod logging;

/// Diagnostics from this wrapper are prefixed with this name.
const NAME: &str = "build_tool_wrapper";

#[derive(Parser, Debug)]
#[command(name = "build_tool_wrapper")]
#[command(about = "Invoke a compiled build tool and touch a stamp file when it succeeds")]
#[command(version = tool_wrapper::VERSION)]
struct Cmd {
    /// Working directory for the tool
    #[arg(long, value_name = "DIR")]
    chdir: Option<OsString>,

    /// File to touch when the tool exits with status 0
    #[arg(long, value_name = "FILE")]
    stamp: Option<OsString>,

    /// Tool path followed by its arguments, forwarded verbatim
    #[arg(
        value_name = "CMD",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    cmd: Vec<OsString>,
}

impl Cmd {
    fn into_invocation(self) -> Invocation {
        Invocation {
            chdir: self.chdir.map(PathBuf::from),
            stamp: self.stamp.map(PathBuf::from),
            cmd: self.cmd,
        }
    }
}

fn main() {
    logging::setup(logging::LOG_ENV);
    let cmd = Cmd::parse();
    tracing::debug!(?cmd, "parsed arguments");
    let code = match run(cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{NAME}: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cmd: Cmd) -> Result<i32> {
    let cwd = std::env::current_dir().context("reading the current directory")?;
    let outcome = tool_wrapper::run(&cmd.into_invocation(), &cwd)?;
    Ok(outcome.code)
}
