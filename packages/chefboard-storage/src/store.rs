use std::{future::Future, pin::Pin};

use uuid::Uuid;

use chefboard_domain::{Chef, RecipeFacts, StoredSort};

use crate::{Result, db::Db, queries};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Name predicate shared by the candidate and count fetches.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChefFilter {
	pub name_contains: Option<String>,
}
impl ChefFilter {
	/// Trims the search term; blank input means no filter.
	pub fn from_search(search: Option<&str>) -> Self {
		let name_contains =
			search.map(str::trim).filter(|value| !value.is_empty()).map(str::to_string);

		Self { name_contains }
	}

	/// Case-insensitive substring match, for stores that filter in memory. Chefs without a name
	/// only match the empty filter.
	pub fn matches(&self, name: Option<&str>) -> bool {
		let Some(needle) = self.name_contains.as_deref() else {
			return true;
		};

		name.map(|name| name.to_lowercase().contains(&needle.to_lowercase())).unwrap_or(false)
	}
}

/// Store-side ordering and paging for stored orders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoreWindow {
	pub sort: StoredSort,
	pub skip: u64,
	pub take: u64,
}

/// Read access the leaderboard needs from the chef store.
pub trait ChefStore
where
	Self: Send + Sync,
{
	fn find_chefs<'a>(
		&'a self,
		filter: &'a ChefFilter,
		window: Option<StoreWindow>,
	) -> BoxFuture<'a, Result<Vec<Chef>>>;

	fn count_chefs<'a>(&'a self, filter: &'a ChefFilter) -> BoxFuture<'a, Result<u64>>;

	fn find_recipes_by_owner_ids<'a>(
		&'a self,
		owner_ids: &'a [Uuid],
	) -> BoxFuture<'a, Result<Vec<RecipeFacts>>>;
}

impl ChefStore for Db {
	fn find_chefs<'a>(
		&'a self,
		filter: &'a ChefFilter,
		window: Option<StoreWindow>,
	) -> BoxFuture<'a, Result<Vec<Chef>>> {
		Box::pin(queries::find_chefs(&self.pool, filter, window))
	}

	fn count_chefs<'a>(&'a self, filter: &'a ChefFilter) -> BoxFuture<'a, Result<u64>> {
		Box::pin(queries::count_chefs(&self.pool, filter))
	}

	fn find_recipes_by_owner_ids<'a>(
		&'a self,
		owner_ids: &'a [Uuid],
	) -> BoxFuture<'a, Result<Vec<RecipeFacts>>> {
		Box::pin(queries::find_recipes_by_owner_ids(&self.pool, owner_ids))
	}
}
