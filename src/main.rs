use paygate::{bootstrap, config::AppConfig, docs};
use paygate_core::config::ConfigBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_base().await;

    let config = AppConfig::build()?;

    if std::env::var("GENERATE_API_DOCS").is_ok() {
        docs::generate_docs().await?;
    }

    bootstrap::init_server(config).await
}
