use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use chefboard_domain::{EnrichedChef, Pagination, RankOrder, Strategy, aggregate, paginate, rank};
use chefboard_storage::{ChefFilter, StoreWindow};

use crate::{ChefboardService, Result};

#[derive(Debug, Clone, Default)]
pub struct LeaderboardRequest {
	pub search: Option<String>,
	pub pagination: Pagination,
	pub order: RankOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
	pub chefs: Vec<EnrichedChef>,
	pub total_chefs: u64,
	pub total_pages: u64,
	pub current_page: u32,
}

impl ChefboardService {
	pub async fn leaderboard(&self, req: LeaderboardRequest) -> Result<LeaderboardResponse> {
		self.leaderboard_at(req, OffsetDateTime::now_utc()).await
	}

	/// Same as [`Self::leaderboard`] with the year and month windows anchored at `now`.
	pub async fn leaderboard_at(
		&self,
		req: LeaderboardRequest,
		now: OffsetDateTime,
	) -> Result<LeaderboardResponse> {
		let strategy = req.order.strategy();

		tracing::info!(
			search = ?req.search,
			page = req.pagination.page.get(),
			limit = req.pagination.limit.get(),
			order = %req.order,
			?strategy,
			"Fetching chef leaderboard."
		);

		match self.build_leaderboard(&req, strategy, now).await {
			Ok(response) => {
				tracing::info!(
					returned = response.chefs.len(),
					total_chefs = response.total_chefs,
					total_pages = response.total_pages,
					"Fetched chef leaderboard."
				);

				Ok(response)
			},
			Err(err) => {
				tracing::error!(
					error = err.detail(),
					search = ?req.search,
					page = req.pagination.page.get(),
					limit = req.pagination.limit.get(),
					order = %req.order,
					"Failed to fetch chef leaderboard."
				);

				Err(err)
			},
		}
	}

	async fn build_leaderboard(
		&self,
		req: &LeaderboardRequest,
		strategy: Strategy,
		now: OffsetDateTime,
	) -> Result<LeaderboardResponse> {
		let filter = ChefFilter::from_search(req.search.as_deref());
		let window = match strategy {
			Strategy::Stored => req.order.stored_sort().map(|sort| StoreWindow {
				sort,
				skip: req.pagination.skip(),
				take: req.pagination.take(),
			}),
			Strategy::Computed => None,
		};
		let (candidates, total_chefs) = tokio::try_join!(
			self.store.find_chefs(&filter, window),
			self.store.count_chefs(&filter),
		)?;
		let owner_ids: Vec<Uuid> = candidates.iter().map(|chef| chef.chef_id).collect();
		let recipes = if owner_ids.is_empty() {
			Vec::new()
		} else {
			self.store.find_recipes_by_owner_ids(&owner_ids).await?
		};
		let mut chefs = aggregate(candidates, recipes, now);

		rank(&mut chefs, req.order, strategy);

		let chefs = paginate(chefs, req.pagination, strategy);

		Ok(LeaderboardResponse {
			chefs,
			total_chefs,
			total_pages: req.pagination.total_pages(total_chefs),
			current_page: req.pagination.page.get(),
		})
	}
}
