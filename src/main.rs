//! Weave
//!
//! Visual workflow and UI builder.
//!
//! Entry point for the Dioxus Desktop application. Log output honours
//! `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .pretty()
        .init();

    weave_ui::launch();
}
