use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding a target filter such as `info` or `tool_wrapper=debug`.
pub const LOG_ENV: &str = "BUILD_TOOL_WRAPPER_LOG";

/// Install a stderr subscriber if `var_name` holds a valid filter. Returns whether one was installed.
pub fn setup(var_name: &str) -> bool {
    let Some(targets) = std::env::var(var_name)
        .ok()
        .and_then(|filter| filter.parse::<Targets>().ok())
    else {
        return false;
    };
    let format_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(targets)
        .with(format_layer)
        .init();
    true
}
