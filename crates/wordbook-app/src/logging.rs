use tracing_subscriber::EnvFilter;
use wordbook_config::LogFormat;

/// Install the global subscriber. Logs go to stderr; stdout is for pages.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_ansi(atty::is(atty::Stream::Stderr)).init(),
    }
}
