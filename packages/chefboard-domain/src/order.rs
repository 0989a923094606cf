use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error(
	"Unknown rank order '{value}'; expected one of newest, oldest, name_asc, name_desc, level, trending, most_recipes, or most_liked."
)]
pub struct ParseRankOrderError {
	pub value: String,
}

/// Leaderboard ordering requested by a caller.
///
/// The first five variants map onto stored columns; the rest sort by statistics that only exist
/// after aggregation. `Trending` is the default when a caller does not pick one.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
	Newest,
	Oldest,
	NameAsc,
	NameDesc,
	Level,
	#[default]
	Trending,
	MostRecipes,
	MostLiked,
}
impl RankOrder {
	pub const ALL: [Self; 8] = [
		Self::Newest,
		Self::Oldest,
		Self::NameAsc,
		Self::NameDesc,
		Self::Level,
		Self::Trending,
		Self::MostRecipes,
		Self::MostLiked,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Newest => "newest",
			Self::Oldest => "oldest",
			Self::NameAsc => "name_asc",
			Self::NameDesc => "name_desc",
			Self::Level => "level",
			Self::Trending => "trending",
			Self::MostRecipes => "most_recipes",
			Self::MostLiked => "most_liked",
		}
	}

	pub fn strategy(self) -> Strategy {
		match self {
			Self::Newest | Self::Oldest | Self::NameAsc | Self::NameDesc | Self::Level =>
				Strategy::Stored,
			Self::Trending | Self::MostRecipes | Self::MostLiked => Strategy::Computed,
		}
	}

	/// Column and direction the store sorts by. `None` for computed orders.
	pub fn stored_sort(self) -> Option<StoredSort> {
		let (field, direction) = match self {
			Self::Newest => (StoredField::CreatedAt, SortDirection::Desc),
			Self::Oldest => (StoredField::CreatedAt, SortDirection::Asc),
			Self::NameAsc => (StoredField::Name, SortDirection::Asc),
			Self::NameDesc => (StoredField::Name, SortDirection::Desc),
			Self::Level => (StoredField::Level, SortDirection::Desc),
			Self::Trending | Self::MostRecipes | Self::MostLiked => return None,
		};

		Some(StoredSort { field, direction })
	}

	/// Derived statistic the ranker sorts by, descending. `None` for stored orders.
	pub fn stat_key(self) -> Option<StatKey> {
		match self {
			Self::Trending => Some(StatKey::RecipesThisMonth),
			Self::MostRecipes => Some(StatKey::RecipeCount),
			Self::MostLiked => Some(StatKey::TotalLikes),
			Self::Newest | Self::Oldest | Self::NameAsc | Self::NameDesc | Self::Level => None,
		}
	}
}
impl Display for RankOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for RankOrder {
	type Err = ParseRankOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		Self::ALL
			.into_iter()
			.find(|order| order.as_str().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| ParseRankOrderError { value: s.to_string() })
	}
}

/// Which path a request takes through the pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
	/// The store orders, skips, and limits.
	Stored,
	/// The full filtered set is aggregated, then sorted and sliced in memory.
	Computed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoredField {
	CreatedAt,
	Name,
	Level,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
	Asc,
	Desc,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoredSort {
	pub field: StoredField,
	pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatKey {
	RecipesThisMonth,
	RecipeCount,
	TotalLikes,
}
