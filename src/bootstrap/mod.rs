mod env;
mod server;
mod tracing;

pub use server::init_server;

/// One-shot process setup: `.env` loading, then the tracing subscriber.
pub async fn init_base() {
    env::init_env().await;
    tracing::init_tracing().await;
}
