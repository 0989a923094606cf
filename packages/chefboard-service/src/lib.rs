pub mod leaderboard;

mod error;

pub use error::{Error, Result};
pub use leaderboard::{LeaderboardRequest, LeaderboardResponse};

use std::sync::Arc;

use chefboard_storage::{ChefStore, db::Db};

/// Read-only leaderboard engine. Holds no per-request state, so one instance serves concurrent
/// requests.
pub struct ChefboardService {
	pub store: Arc<dyn ChefStore>,
}
impl ChefboardService {
	pub fn new(db: Db) -> Self {
		Self { store: Arc::new(db) }
	}

	pub fn with_store(store: Arc<dyn ChefStore>) -> Self {
		Self { store }
	}
}
