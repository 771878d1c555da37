use sift_config::SiftConfig;
use sift_db::ReviewService;

/// Everything a command handler needs: the store and the loaded configuration.
pub struct AppContext {
    pub service: ReviewService,
    pub config: SiftConfig,
}

impl AppContext {
    pub async fn init(config: SiftConfig) -> anyhow::Result<Self> {
        let service = ReviewService::from_config(&config.store).await?;
        Ok(Self { service, config })
    }
}
