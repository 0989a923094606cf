use std::num::NonZeroU32;

use crate::{
	order::{RankOrder, Strategy},
	stats::EnrichedChef,
};

/// One-based page and a positive page size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pagination {
	pub page: NonZeroU32,
	pub limit: NonZeroU32,
}
impl Pagination {
	pub const DEFAULT_LIMIT: NonZeroU32 = NonZeroU32::new(12).unwrap();

	pub fn new(page: NonZeroU32, limit: NonZeroU32) -> Self {
		Self { page, limit }
	}

	/// Returns `None` when either value is zero.
	pub fn from_raw(page: u32, limit: u32) -> Option<Self> {
		Some(Self { page: NonZeroU32::new(page)?, limit: NonZeroU32::new(limit)? })
	}

	pub fn skip(&self) -> u64 {
		u64::from(self.page.get() - 1) * u64::from(self.limit.get())
	}

	pub fn take(&self) -> u64 {
		u64::from(self.limit.get())
	}

	pub fn total_pages(&self, total: u64) -> u64 {
		total.div_ceil(self.take())
	}
}
impl Default for Pagination {
	fn default() -> Self {
		Self { page: NonZeroU32::MIN, limit: Self::DEFAULT_LIMIT }
	}
}

/// Sorts by the order's derived statistic, highest first. The sort is stable and has no secondary
/// key, so ties keep their incoming order. Stored orders arrive sorted and are left alone.
pub fn rank(chefs: &mut [EnrichedChef], order: RankOrder, strategy: Strategy) {
	if strategy == Strategy::Stored {
		return;
	}

	let Some(key) = order.stat_key() else {
		return;
	};

	chefs.sort_by(|a, b| b.stats.value(key).cmp(&a.stats.value(key)));
}

/// Cuts the requested page out of a fully ranked list. Pages past the end are empty. Stored
/// strategies were already paged by the store and pass through unchanged.
pub fn paginate<T>(items: Vec<T>, pagination: Pagination, strategy: Strategy) -> Vec<T> {
	if strategy == Strategy::Stored {
		return items;
	}

	let skip = usize::try_from(pagination.skip()).unwrap_or(usize::MAX);
	let take = usize::try_from(pagination.take()).unwrap_or(usize::MAX);

	items.into_iter().skip(skip).take(take).collect()
}
