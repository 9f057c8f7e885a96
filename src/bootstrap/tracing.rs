use tracing_subscriber::EnvFilter;

pub async fn init_tracing() {
    // `RUST_LOG` controls the level, `info` when unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
