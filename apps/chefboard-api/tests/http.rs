use std::sync::Arc;

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use time::macros::datetime;
use tower::util::ServiceExt;
use uuid::Uuid;

use chefboard_api::{
	routes,
	state::{AppState, LeaderboardDefaults},
};
use chefboard_domain::{Chef, RecipeFacts};
use chefboard_service::ChefboardService;
use chefboard_testkit::{FailPoint, MemoryStore};

fn chef(id: u128, name: &str) -> Chef {
	Chef {
		chef_id: Uuid::from_u128(id),
		name: Some(name.to_string()),
		bio: Some("Home cook.".to_string()),
		image_url: None,
		level: id as i32,
		created_at: datetime!(2024-01-01 00:00 UTC) + time::Duration::days(id as i64),
		updated_at: datetime!(2024-06-01 00:00 UTC),
	}
}

fn store() -> MemoryStore {
	let created_at = datetime!(2025-05-05 10:00 UTC);
	let recipe = |owner: u128, likes: i32| {
		RecipeFacts::new(
			Uuid::from_u128(owner),
			Some(likes),
			created_at,
			Some(25),
			Some("Italian".to_string()),
			None,
		)
	};

	MemoryStore::new(
		vec![chef(1, "Maria"), chef(2, "Kenji"), chef(3, "Amara")],
		vec![recipe(1, 5), recipe(1, 10), recipe(3, 7)],
	)
}

fn app(store: MemoryStore) -> Router {
	let defaults = LeaderboardDefaults::from_config(&chefboard_config::Leaderboard::default())
		.expect("Default leaderboard config should be valid.");
	let service = ChefboardService::with_store(Arc::new(store));

	routes::router(AppState::with_service(service, defaults))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call router.");
	let status = response.status();
	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if body.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&body).expect("Failed to parse response.")
	};

	(status, json)
}

#[tokio::test]
async fn health_returns_ok() {
	let (status, _) = get(app(store()), "/health").await;

	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn most_liked_leaderboard_is_paginated_after_ranking() {
	let (status, json) =
		get(app(store()), "/v1/chefs/leaderboard?order=most_liked&page=1&limit=2").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["total_chefs"], 3);
	assert_eq!(json["total_pages"], 2);
	assert_eq!(json["current_page"], 1);
	assert_eq!(json["chefs"][0]["name"], "Maria");
	assert_eq!(json["chefs"][0]["stats"]["total_likes"], 15);
	assert_eq!(json["chefs"][0]["stats"]["avg_likes_per_recipe"], 8);
	assert_eq!(json["chefs"][0]["stats"]["most_used_category"], "Italian");
	assert_eq!(json["chefs"][1]["name"], "Amara");
	assert_eq!(json["chefs"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn stored_order_with_search() {
	let (status, json) = get(app(store()), "/v1/chefs/leaderboard?order=newest&search=MAR").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["total_chefs"], 2);
	assert_eq!(json["chefs"][0]["name"], "Amara");
	assert_eq!(json["chefs"][1]["name"], "Maria");
	assert_eq!(json["chefs"][0]["stats"]["recipe_count"], 1);
}

#[tokio::test]
async fn invalid_parameters_are_rejected() {
	for uri in [
		"/v1/chefs/leaderboard?page=0",
		"/v1/chefs/leaderboard?limit=0",
		"/v1/chefs/leaderboard?limit=1000",
		"/v1/chefs/leaderboard?page=abc",
		"/v1/chefs/leaderboard?order=popular",
	] {
		let (status, json) = get(app(store()), uri).await;

		assert_eq!(status, StatusCode::BAD_REQUEST, "uri={uri}");
		assert_eq!(json["error_code"], "INVALID_REQUEST", "uri={uri}");
	}
}

#[tokio::test]
async fn store_failure_returns_opaque_internal_error() {
	let (status, json) =
		get(app(store().failing_on(FailPoint::CountChefs)), "/v1/chefs/leaderboard").await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "INTERNAL_SERVER_ERROR");
	assert_eq!(json["message"], "Failed to fetch chefs.");
}
