use tracing_subscriber::EnvFilter;

/// Initialize tracing with INFO level by default
///
/// Output always goes to stderr: the MCP front-end owns stdout for protocol
/// frames.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
