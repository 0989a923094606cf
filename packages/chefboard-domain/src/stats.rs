use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::{
	chef::{Chef, RecipeFacts},
	order::StatKey,
};

/// Per-request statistics for one chef. Never persisted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChefStatistics {
	pub recipe_count: i64,
	pub total_likes: i64,
	pub recipes_this_year: i64,
	pub recipes_this_month: i64,
	pub total_cooking_time: i64,
	pub avg_likes_per_recipe: i64,
	pub most_used_category: Option<String>,
}
impl ChefStatistics {
	pub fn value(&self, key: StatKey) -> i64 {
		match key {
			StatKey::RecipesThisMonth => self.recipes_this_month,
			StatKey::RecipeCount => self.recipe_count,
			StatKey::TotalLikes => self.total_likes,
		}
	}

	/// Folds one chef's recipes. `today` is the UTC calendar date the year and month windows are
	/// anchored to.
	pub fn from_recipes(recipes: &[RecipeFacts], today: Date) -> Self {
		let mut stats = Self::default();
		let mut tally = CategoryTally::default();

		for recipe in recipes {
			let created = recipe.created_at.to_offset(UtcOffset::UTC).date();

			stats.recipe_count += 1;
			stats.total_likes += recipe.likes;
			stats.total_cooking_time += recipe.duration_minutes;

			if created.year() == today.year() {
				stats.recipes_this_year += 1;

				if created.month() == today.month() {
					stats.recipes_this_month += 1;
				}
			}

			for category in &recipe.categories {
				tally.record(category);
			}
		}

		stats.avg_likes_per_recipe = round_half_up_div(stats.total_likes, stats.recipe_count);
		stats.most_used_category = tally.most_used();

		stats
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnrichedChef {
	#[serde(flatten)]
	pub chef: Chef,
	pub stats: ChefStatistics,
}

/// Occurrence counts kept in first-seen order so ties resolve to the earliest label.
#[derive(Default)]
struct CategoryTally {
	index: HashMap<String, usize>,
	counts: Vec<(String, u64)>,
}
impl CategoryTally {
	fn record(&mut self, label: &str) {
		match self.index.get(label) {
			Some(&slot) => self.counts[slot].1 += 1,
			None => {
				self.index.insert(label.to_string(), self.counts.len());
				self.counts.push((label.to_string(), 1));
			},
		}
	}

	fn most_used(self) -> Option<String> {
		let mut best: Option<(String, u64)> = None;

		for (label, count) in self.counts {
			if best.as_ref().map(|(_, top)| count > *top).unwrap_or(true) {
				best = Some((label, count));
			}
		}

		best.map(|(label, _)| label)
	}
}

/// Enriches every candidate with its statistics. Output keeps the candidates' order and length;
/// chefs without recipes get zeroed statistics.
pub fn aggregate(
	candidates: Vec<Chef>,
	recipes: Vec<RecipeFacts>,
	now: OffsetDateTime,
) -> Vec<EnrichedChef> {
	let today = now.to_offset(UtcOffset::UTC).date();
	let mut by_owner: HashMap<Uuid, Vec<RecipeFacts>> = HashMap::new();

	for recipe in recipes {
		by_owner.entry(recipe.owner_id).or_default().push(recipe);
	}

	candidates
		.into_iter()
		.map(|chef| {
			let stats = by_owner
				.get(&chef.chef_id)
				.map(|recipes| ChefStatistics::from_recipes(recipes, today))
				.unwrap_or_default();

			EnrichedChef { chef, stats }
		})
		.collect()
}

// floor(total / count + 0.5), i.e. halves round toward positive infinity.
fn round_half_up_div(total: i64, count: i64) -> i64 {
	if count <= 0 {
		return 0;
	}

	(2 * total + count).div_euclid(2 * count)
}
