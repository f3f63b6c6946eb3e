//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Directive used for `--verbose`.
pub const VERBOSE_DIRECTIVE: &str = "info,tarab_backend_audio=debug";

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` wins over both defaults. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
