use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod ingest;
mod model;
mod ui;
mod util;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    app::run()
}
