use std::sync::Once;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` overrides the default filter.
/// Only the first call has any effect.
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Console (stderr) layer with file/line
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_level(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .try_init();

        // Hook panics so they land in the log
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!("{}", info);
            default_hook(info);
        }));
    });
}
