use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("agentsmith=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agentsmith=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
