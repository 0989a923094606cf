use std::{cmp::Ordering, sync::Mutex};

use uuid::Uuid;

use chefboard_domain::{Chef, RecipeFacts, SortDirection, StoredField, StoredSort};
use chefboard_storage::{BoxFuture, ChefFilter, ChefStore, Result, StoreWindow};

/// Store operation recorded by [`MemoryStore`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreCall {
	FindChefs { filter: ChefFilter, window: Option<StoreWindow> },
	CountChefs { filter: ChefFilter },
	FindRecipes { owner_ids: Vec<Uuid> },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailPoint {
	FindChefs,
	CountChefs,
	FindRecipes,
}

/// In-memory [`ChefStore`] that mirrors the Postgres ordering rules and records every call.
#[derive(Default)]
pub struct MemoryStore {
	chefs: Vec<Chef>,
	recipes: Vec<RecipeFacts>,
	fail_on: Option<FailPoint>,
	calls: Mutex<Vec<StoreCall>>,
}
impl MemoryStore {
	pub fn new(chefs: Vec<Chef>, recipes: Vec<RecipeFacts>) -> Self {
		Self { chefs, recipes, fail_on: None, calls: Mutex::new(Vec::new()) }
	}

	/// Makes the given operation fail with a pool timeout.
	pub fn failing_on(mut self, point: FailPoint) -> Self {
		self.fail_on = Some(point);

		self
	}

	pub fn calls(&self) -> Vec<StoreCall> {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn recipe_fetches(&self) -> usize {
		self.calls().iter().filter(|call| matches!(call, StoreCall::FindRecipes { .. })).count()
	}

	fn record(&self, call: StoreCall) {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).push(call);
	}

	fn check(&self, point: FailPoint) -> Result<()> {
		if self.fail_on == Some(point) {
			return Err(sqlx::Error::PoolTimedOut.into());
		}

		Ok(())
	}

	fn matching(&self, filter: &ChefFilter) -> Vec<Chef> {
		let mut chefs: Vec<Chef> =
			self.chefs.iter().filter(|chef| filter.matches(chef.name.as_deref())).cloned().collect();

		chefs.sort_by_key(|chef| chef.chef_id);

		chefs
	}
}
impl ChefStore for MemoryStore {
	fn find_chefs<'a>(
		&'a self,
		filter: &'a ChefFilter,
		window: Option<StoreWindow>,
	) -> BoxFuture<'a, Result<Vec<Chef>>> {
		Box::pin(async move {
			self.record(StoreCall::FindChefs { filter: filter.clone(), window });
			self.check(FailPoint::FindChefs)?;

			let mut chefs = self.matching(filter);
			let Some(window) = window else {
				return Ok(chefs);
			};

			chefs.sort_by(|a, b| compare_stored(a, b, window.sort));

			let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
			let take = usize::try_from(window.take).unwrap_or(usize::MAX);

			Ok(chefs.into_iter().skip(skip).take(take).collect())
		})
	}

	fn count_chefs<'a>(&'a self, filter: &'a ChefFilter) -> BoxFuture<'a, Result<u64>> {
		Box::pin(async move {
			self.record(StoreCall::CountChefs { filter: filter.clone() });
			self.check(FailPoint::CountChefs)?;

			Ok(self.matching(filter).len() as u64)
		})
	}

	fn find_recipes_by_owner_ids<'a>(
		&'a self,
		owner_ids: &'a [Uuid],
	) -> BoxFuture<'a, Result<Vec<RecipeFacts>>> {
		Box::pin(async move {
			self.record(StoreCall::FindRecipes { owner_ids: owner_ids.to_vec() });
			self.check(FailPoint::FindRecipes)?;

			Ok(self
				.recipes
				.iter()
				.filter(|recipe| owner_ids.contains(&recipe.owner_id))
				.cloned()
				.collect())
		})
	}
}

// Postgres puts NULLs last ascending and first descending; `chef_id` breaks ties.
fn compare_stored(a: &Chef, b: &Chef, sort: StoredSort) -> Ordering {
	let primary = match sort.field {
		StoredField::CreatedAt => a.created_at.cmp(&b.created_at),
		StoredField::Level => a.level.cmp(&b.level),
		StoredField::Name => match (a.name.as_deref(), b.name.as_deref()) {
			(Some(a), Some(b)) => a.cmp(b),
			(None, None) => Ordering::Equal,
			(None, Some(_)) => Ordering::Greater,
			(Some(_), None) => Ordering::Less,
		},
	};
	let primary = match sort.direction {
		SortDirection::Asc => primary,
		SortDirection::Desc => primary.reverse(),
	};

	primary.then_with(|| a.chef_id.cmp(&b.chef_id))
}
