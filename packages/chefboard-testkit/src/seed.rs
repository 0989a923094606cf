use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use chefboard_domain::Chef;

use crate::Result;

/// Raw `recipes` row, with both category columns exposed so tests can seed legacy data.
#[derive(Clone, Debug)]
pub struct NewRecipe {
	pub recipe_id: Uuid,
	pub owner_id: Uuid,
	pub title: String,
	pub likes: Option<i32>,
	pub duration_minutes: Option<i32>,
	pub category: Option<String>,
	pub categories: Option<Vec<String>>,
	pub created_at: OffsetDateTime,
}
impl NewRecipe {
	pub fn new(owner_id: Uuid, created_at: OffsetDateTime) -> Self {
		Self {
			recipe_id: Uuid::new_v4(),
			owner_id,
			title: "Untitled".to_string(),
			likes: None,
			duration_minutes: None,
			category: None,
			categories: None,
			created_at,
		}
	}
}

pub async fn insert_chef(pool: &PgPool, chef: &Chef) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO chefs (chef_id, name, bio, image_url, level, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7)",
	)
	.bind(chef.chef_id)
	.bind(chef.name.as_deref())
	.bind(chef.bio.as_deref())
	.bind(chef.image_url.as_deref())
	.bind(chef.level)
	.bind(chef.created_at)
	.bind(chef.updated_at)
	.execute(pool)
	.await?;

	Ok(())
}

pub async fn insert_recipe(pool: &PgPool, recipe: &NewRecipe) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO recipes (
	recipe_id,
	owner_id,
	title,
	likes,
	duration_minutes,
	category,
	categories,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
	)
	.bind(recipe.recipe_id)
	.bind(recipe.owner_id)
	.bind(recipe.title.as_str())
	.bind(recipe.likes)
	.bind(recipe.duration_minutes)
	.bind(recipe.category.as_deref())
	.bind(recipe.categories.as_deref())
	.bind(recipe.created_at)
	.execute(pool)
	.await?;

	Ok(())
}
