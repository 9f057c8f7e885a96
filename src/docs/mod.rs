use tokio::io::AsyncWriteExt;
use utoipa::OpenApi;

use crate::app::response::{ErrorBody, HealthResponse, WhoamiResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health, crate::routes::whoami),
    components(schemas(HealthResponse, WhoamiResponse, ErrorBody)),
    info(description = "Paygate API Docs")
)]
pub struct MainApiDoc;

/// Writes the OpenAPI document to `api.json`, overwriting any previous one.
pub async fn generate_docs() -> anyhow::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("api.json")
        .await?;

    let docs = MainApiDoc::openapi().to_pretty_json()?;

    file.write_all(docs.as_bytes()).await?;

    Ok(())
}
