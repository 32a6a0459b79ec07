use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config names a level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the env filter: `RUST_LOG` wins, then the configured level
pub fn build_filter(configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialize tracing on stderr so table output on stdout stays clean
pub fn init_tracing(configured_level: &str) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(configured_level))
        .with(fmt_layer)
        .try_init();

    tracing::debug!(target: "system", "Tracing initialized at {}", configured_level);
}

/// Log a table state change under the `table` target
#[macro_export]
macro_rules! trace_table_op {
    ($op:expr) => {
        tracing::debug!(target: "table", "{}", $op);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing("debug");
        init_tracing("info");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // Only checks construction; the resulting directive depends on RUST_LOG
        let _filter = build_filter("not a [valid] directive");
    }
}
