use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_tracing(verbose: bool, json: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            "warn,translit_core=debug,translit_cli=debug"
        } else {
            "warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}
