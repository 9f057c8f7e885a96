use paygate_core::config::ConfigBuilder;

/// Process configuration, read from the environment once at startup and
/// handed to [`crate::bootstrap::init_server`] explicitly.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub database_url: Option<String>,
}

impl ConfigBuilder for AppConfig {
    fn build() -> anyhow::Result<Self> {
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| {
                tracing::warn!("cannot read `SERVER_PORT` defaulting to `3000`");

                "3000".into()
            })
            .parse()
            .unwrap_or_else(|err| {
                tracing::error!("cannot parse `SERVER_PORT`. defaulting to 3000 {:?}", err);
                3000
            });

        let jwt_secret = std::env::var("APP_JWT_SECRET")
            .map_err(|err| anyhow::anyhow!("cannot read `APP_JWT_SECRET`: {:?}", err))?;

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("cannot read `DATABASE_URL`, persistence is disabled");
        }

        Ok(AppConfig {
            port,
            jwt_secret,
            database_url,
        })
    }
}
