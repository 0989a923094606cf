use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Chef profile as read from the store. Fields other than id, name, level, and creation time are
/// carried through untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Chef {
	pub chef_id: Uuid,
	pub name: Option<String>,
	pub bio: Option<String>,
	pub image_url: Option<String>,
	pub level: i32,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// The slice of a recipe the aggregator needs, with nullable counters already defaulted and the
/// category fields collapsed into one canonical set.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeFacts {
	pub owner_id: Uuid,
	pub likes: i64,
	pub created_at: OffsetDateTime,
	pub duration_minutes: i64,
	pub categories: Vec<String>,
}
impl RecipeFacts {
	pub fn new(
		owner_id: Uuid,
		likes: Option<i32>,
		created_at: OffsetDateTime,
		duration_minutes: Option<i32>,
		legacy_category: Option<String>,
		categories: Option<Vec<String>>,
	) -> Self {
		Self {
			owner_id,
			likes: likes.map(i64::from).unwrap_or(0),
			created_at,
			duration_minutes: duration_minutes.map(i64::from).unwrap_or(0),
			categories: normalize_categories(legacy_category, categories),
		}
	}
}

/// Effective category set of a recipe.
///
/// A non-empty list wins over the legacy scalar; an empty legacy value counts as absent. Duplicate
/// labels collapse to their first occurrence.
pub fn normalize_categories(legacy: Option<String>, list: Option<Vec<String>>) -> Vec<String> {
	let raw = match (list, legacy) {
		(Some(list), _) if !list.is_empty() => list,
		(_, Some(legacy)) if !legacy.is_empty() => vec![legacy],
		_ => return Vec::new(),
	};
	let mut out: Vec<String> = Vec::with_capacity(raw.len());

	for label in raw {
		if !out.contains(&label) {
			out.push(label);
		}
	}

	out
}
