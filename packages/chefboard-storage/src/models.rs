use time::OffsetDateTime;
use uuid::Uuid;

use chefboard_domain::{Chef, RecipeFacts};

#[derive(Debug, sqlx::FromRow)]
pub struct ChefRow {
	pub chef_id: Uuid,
	pub name: Option<String>,
	pub bio: Option<String>,
	pub image_url: Option<String>,
	pub level: i32,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl From<ChefRow> for Chef {
	fn from(row: ChefRow) -> Self {
		Self {
			chef_id: row.chef_id,
			name: row.name,
			bio: row.bio,
			image_url: row.image_url,
			level: row.level,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}

/// Projection of `recipes` used for statistics. Both category columns are read here and collapsed
/// on conversion, so nothing above this layer sees the legacy field.
#[derive(Debug, sqlx::FromRow)]
pub struct RecipeStatsRow {
	pub owner_id: Uuid,
	pub likes: Option<i32>,
	pub created_at: OffsetDateTime,
	pub duration_minutes: Option<i32>,
	pub category: Option<String>,
	pub categories: Option<Vec<String>>,
}
impl From<RecipeStatsRow> for RecipeFacts {
	fn from(row: RecipeStatsRow) -> Self {
		RecipeFacts::new(
			row.owner_id,
			row.likes,
			row.created_at,
			row.duration_minutes,
			row.category,
			row.categories,
		)
	}
}
