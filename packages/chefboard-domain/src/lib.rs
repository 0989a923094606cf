//! Pure stages of the chef leaderboard: order classification, per-chef aggregation, ranking, and
//! in-memory pagination. Nothing here touches the store.

pub mod chef;
pub mod order;
pub mod ranking;
pub mod stats;

pub use chef::{Chef, RecipeFacts, normalize_categories};
pub use order::{
	ParseRankOrderError, RankOrder, SortDirection, StatKey, StoredField, StoredSort, Strategy,
};
pub use ranking::{Pagination, paginate, rank};
pub use stats::{ChefStatistics, EnrichedChef, aggregate};
