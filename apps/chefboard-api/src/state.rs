use std::{num::NonZeroU32, sync::Arc};

use color_eyre::eyre;

use chefboard_domain::RankOrder;
use chefboard_service::ChefboardService;
use chefboard_storage::db::Db;

/// Parameter defaults and bounds applied before a query reaches the service.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardDefaults {
	pub default_limit: NonZeroU32,
	pub max_limit: NonZeroU32,
	pub default_order: RankOrder,
}
impl LeaderboardDefaults {
	pub fn from_config(cfg: &chefboard_config::Leaderboard) -> color_eyre::Result<Self> {
		let default_limit = NonZeroU32::new(cfg.default_limit)
			.ok_or_else(|| eyre::eyre!("leaderboard.default_limit must be greater than zero."))?;
		let max_limit = NonZeroU32::new(cfg.max_limit)
			.ok_or_else(|| eyre::eyre!("leaderboard.max_limit must be greater than zero."))?;
		let default_order = cfg.default_order.parse::<RankOrder>()?;

		Ok(Self { default_limit, max_limit, default_order })
	}
}
#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ChefboardService>,
	pub leaderboard: LeaderboardDefaults,
}
impl AppState {
	pub async fn new(config: chefboard_config::Config) -> color_eyre::Result<Self> {
		let leaderboard = LeaderboardDefaults::from_config(&config.leaderboard)?;
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = ChefboardService::new(db);

		Ok(Self::with_service(service, leaderboard))
	}

	pub fn with_service(service: ChefboardService, leaderboard: LeaderboardDefaults) -> Self {
		Self { service: Arc::new(service), leaderboard }
	}
}
