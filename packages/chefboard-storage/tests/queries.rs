use time::{OffsetDateTime, macros::datetime};
use uuid::Uuid;

use chefboard_config::Postgres;
use chefboard_domain::{Chef, RankOrder};
use chefboard_storage::{ChefFilter, ChefStore, StoreWindow, db::Db};
use chefboard_testkit::{
	TestDatabase,
	seed::{self, NewRecipe},
};

fn chef(id: u128, name: Option<&str>, level: i32, created_at: OffsetDateTime) -> Chef {
	Chef {
		chef_id: Uuid::from_u128(id),
		name: name.map(str::to_string),
		bio: None,
		image_url: None,
		level,
		created_at,
		updated_at: created_at,
	}
}

fn window(order: RankOrder, skip: u64, take: u64) -> Option<StoreWindow> {
	let sort = order.stored_sort().expect("Stored order should have a sort.");

	Some(StoreWindow { sort, skip, take })
}

fn ids(chefs: &[Chef]) -> Vec<u128> {
	chefs.iter().map(|chef| chef.chef_id.as_u128()).collect()
}

async fn seeded_db(test_db: &TestDatabase) -> Db {
	let cfg =
		Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2, acquire_timeout_ms: 5_000 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	for chef in [
		chef(1, Some("Maria Rossi"), 3, datetime!(2024-01-01 00:00 UTC)),
		chef(2, Some("Omar Haddad"), 7, datetime!(2024-03-01 00:00 UTC)),
		chef(3, Some("Luis Garcia"), 5, datetime!(2024-02-01 00:00 UTC)),
		chef(4, None, 1, datetime!(2024-04-01 00:00 UTC)),
		chef(5, Some("100%_Vegan"), 2, datetime!(2024-05-01 00:00 UTC)),
	] {
		seed::insert_chef(&db.pool, &chef).await.expect("Failed to insert chef.");
	}

	db
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CHEFBOARD_PG_DSN to run."]
async fn name_filter_is_case_insensitive_and_shared_with_count() {
	let Some(base_dsn) = chefboard_testkit::env_dsn() else {
		eprintln!("Skipping name_filter_is_case_insensitive_and_shared_with_count; set CHEFBOARD_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = seeded_db(&test_db).await;
	let filter = ChefFilter::from_search(Some("MAR"));
	let chefs = db.find_chefs(&filter, None).await.expect("Failed to find chefs.");
	let count = db.count_chefs(&filter).await.expect("Failed to count chefs.");

	assert_eq!(ids(&chefs), vec![1, 2]);
	assert_eq!(count, 2);

	let all = ChefFilter::from_search(Some("   "));

	assert_eq!(db.count_chefs(&all).await.expect("Failed to count chefs."), 5);
	assert_eq!(db.find_chefs(&all, None).await.expect("Failed to find chefs.").len(), 5);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CHEFBOARD_PG_DSN to run."]
async fn like_wildcards_in_search_match_literally() {
	let Some(base_dsn) = chefboard_testkit::env_dsn() else {
		eprintln!("Skipping like_wildcards_in_search_match_literally; set CHEFBOARD_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = seeded_db(&test_db).await;
	let filter = ChefFilter::from_search(Some("%_v"));
	let chefs = db.find_chefs(&filter, None).await.expect("Failed to find chefs.");

	assert_eq!(ids(&chefs), vec![5]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CHEFBOARD_PG_DSN to run."]
async fn stored_window_orders_and_pages() {
	let Some(base_dsn) = chefboard_testkit::env_dsn() else {
		eprintln!("Skipping stored_window_orders_and_pages; set CHEFBOARD_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = seeded_db(&test_db).await;
	let filter = ChefFilter::default();
	let newest = db
		.find_chefs(&filter, window(RankOrder::Newest, 0, 2))
		.await
		.expect("Failed to find chefs.");
	let oldest_page_two = db
		.find_chefs(&filter, window(RankOrder::Oldest, 2, 2))
		.await
		.expect("Failed to find chefs.");
	let by_level = db
		.find_chefs(&filter, window(RankOrder::Level, 0, 3))
		.await
		.expect("Failed to find chefs.");
	let past_end = db
		.find_chefs(&filter, window(RankOrder::NameAsc, 10, 5))
		.await
		.expect("Failed to find chefs.");

	assert_eq!(ids(&newest), vec![5, 4]);
	assert_eq!(ids(&oldest_page_two), vec![2, 4]);
	assert_eq!(ids(&by_level), vec![2, 3, 1]);
	assert!(past_end.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set CHEFBOARD_PG_DSN to run."]
async fn recipes_are_fetched_for_all_owners_with_normalized_categories() {
	let Some(base_dsn) = chefboard_testkit::env_dsn() else {
		eprintln!("Skipping recipes_are_fetched_for_all_owners_with_normalized_categories; set CHEFBOARD_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = seeded_db(&test_db).await;
	let owner_one = Uuid::from_u128(1);
	let owner_two = Uuid::from_u128(2);
	let legacy = NewRecipe {
		likes: Some(5),
		category: Some("Italian".to_string()),
		..NewRecipe::new(owner_one, datetime!(2025-01-01 00:00 UTC))
	};
	let listed = NewRecipe {
		duration_minutes: Some(40),
		category: Some("Baking".to_string()),
		categories: Some(vec!["Italian".to_string(), "Dessert".to_string()]),
		..NewRecipe::new(owner_two, datetime!(2025-02-01 00:00 UTC))
	};
	let foreign = NewRecipe::new(Uuid::from_u128(3), datetime!(2025-03-01 00:00 UTC));

	for recipe in [&legacy, &listed, &foreign] {
		seed::insert_recipe(&db.pool, recipe).await.expect("Failed to insert recipe.");
	}

	let owners = [owner_one, owner_two];
	let recipes = db.find_recipes_by_owner_ids(&owners).await.expect("Failed to fetch recipes.");

	assert_eq!(recipes.len(), 2);
	assert_eq!(recipes[0].owner_id, owner_one);
	assert_eq!(recipes[0].likes, 5);
	assert_eq!(recipes[0].duration_minutes, 0);
	assert_eq!(recipes[0].categories, vec!["Italian".to_string()]);
	assert_eq!(recipes[1].owner_id, owner_two);
	assert_eq!(recipes[1].likes, 0);
	assert_eq!(recipes[1].duration_minutes, 40);
	assert_eq!(recipes[1].categories, vec!["Italian".to_string(), "Dessert".to_string()]);

	let none = db.find_recipes_by_owner_ids(&[]).await.expect("Failed to fetch recipes.");

	assert!(none.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
