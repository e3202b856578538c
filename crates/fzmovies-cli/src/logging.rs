use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr log subscriber
///
/// Quiet by default (`warn`); `RUST_LOG=fzmovies_core=debug` shows every hop.
/// Stdout stays reserved for results.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(filter).with(fmt).try_init();
}
