use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use chefboard_domain::{Chef, RecipeFacts, SortDirection, StoredField, StoredSort};

use crate::{
	Error, Result,
	models::{ChefRow, RecipeStatsRow},
	store::{ChefFilter, StoreWindow},
};

/// Fetches chefs matching `filter`.
///
/// With a window the store orders, skips, and limits. Without one the whole filtered set comes
/// back in `chef_id` order, which only exists to keep later tie order reproducible.
pub async fn find_chefs(
	pool: &PgPool,
	filter: &ChefFilter,
	window: Option<StoreWindow>,
) -> Result<Vec<Chef>> {
	let mut builder = QueryBuilder::<Postgres>::new(
		"SELECT chef_id, name, bio, image_url, level, created_at, updated_at FROM chefs",
	);

	push_chef_filter(&mut builder, filter);

	match window {
		Some(window) => {
			builder.push(" ORDER BY ");
			builder.push(order_by_sql(window.sort));
			builder.push(", chef_id ASC LIMIT ");
			builder.push_bind(to_i64(window.take, "take")?);
			builder.push(" OFFSET ");
			builder.push_bind(to_i64(window.skip, "skip")?);
		},
		None => {
			builder.push(" ORDER BY chef_id ASC");
		},
	}

	let rows: Vec<ChefRow> = builder.build_query_as().fetch_all(pool).await?;

	Ok(rows.into_iter().map(Chef::from).collect())
}

pub async fn count_chefs(pool: &PgPool, filter: &ChefFilter) -> Result<u64> {
	let mut builder = QueryBuilder::<Postgres>::new("SELECT count(*) FROM chefs");

	push_chef_filter(&mut builder, filter);

	let count: i64 = builder.build_query_scalar().fetch_one(pool).await?;

	u64::try_from(count)
		.map_err(|_| Error::InvalidArgument(format!("Chef count {count} is negative.")))
}

/// Loads the statistics projection for every recipe owned by any of `owner_ids` in one query.
pub async fn find_recipes_by_owner_ids(
	pool: &PgPool,
	owner_ids: &[Uuid],
) -> Result<Vec<RecipeFacts>> {
	if owner_ids.is_empty() {
		return Ok(Vec::new());
	}

	let rows: Vec<RecipeStatsRow> = sqlx::query_as(
		"\
SELECT owner_id, likes, created_at, duration_minutes, category, categories
FROM recipes
WHERE owner_id = ANY($1)
ORDER BY created_at ASC, recipe_id ASC",
	)
	.bind(owner_ids)
	.fetch_all(pool)
	.await?;

	Ok(rows.into_iter().map(RecipeFacts::from).collect())
}

// Shared by the candidate and count queries so both always see the same predicate.
fn push_chef_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ChefFilter) {
	if let Some(needle) = filter.name_contains.as_deref() {
		builder.push(" WHERE name ILIKE ");
		builder.push_bind(format!("%{}%", escape_like(needle)));
		builder.push(" ESCAPE '\\'");
	}
}

fn order_by_sql(sort: StoredSort) -> &'static str {
	match (sort.field, sort.direction) {
		(StoredField::CreatedAt, SortDirection::Asc) => "created_at ASC",
		(StoredField::CreatedAt, SortDirection::Desc) => "created_at DESC",
		(StoredField::Name, SortDirection::Asc) => "name ASC",
		(StoredField::Name, SortDirection::Desc) => "name DESC",
		(StoredField::Level, SortDirection::Asc) => "level ASC",
		(StoredField::Level, SortDirection::Desc) => "level DESC",
	}
}

fn escape_like(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for ch in raw.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}

fn to_i64(value: u64, label: &str) -> Result<i64> {
	i64::try_from(value).map_err(|_| Error::InvalidArgument(format!("{label} {value} is too large.")))
}
