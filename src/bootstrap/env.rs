pub async fn init_env() {
    // Deployed environments configure through the process environment only.
    if dotenvy::dotenv().is_err() {
        tracing::debug!("no `.env` file found, using process environment");
    }
}
