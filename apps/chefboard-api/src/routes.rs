use axum::{
	Json, Router,
	extract::{Query, State, rejection::QueryRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use chefboard_domain::{Pagination, RankOrder};
use chefboard_service::{Error as ServiceError, LeaderboardRequest, LeaderboardResponse};

use crate::state::{AppState, LeaderboardDefaults};

const INVALID_REQUEST: &str = "INVALID_REQUEST";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/chefs/leaderboard", get(leaderboard))
		.with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
	pub search: Option<String>,
	pub page: Option<u32>,
	pub limit: Option<u32>,
	pub order: Option<String>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn leaderboard(
	State(state): State<AppState>,
	query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
	let Query(query) = query.map_err(|err| ApiError::invalid_request(err.body_text()))?;
	let request = leaderboard_request(&state.leaderboard, query)?;
	let response = state.service.leaderboard(request).await?;

	Ok(Json(response))
}

/// Applies defaults and rejects values the engine does not accept.
pub fn leaderboard_request(
	defaults: &LeaderboardDefaults,
	query: LeaderboardQuery,
) -> Result<LeaderboardRequest, ApiError> {
	let page = query.page.unwrap_or(1);
	let limit = query.limit.unwrap_or(defaults.default_limit.get());

	if limit > defaults.max_limit.get() {
		return Err(ApiError::invalid_request(format!(
			"limit must be at most {}.",
			defaults.max_limit
		)));
	}

	let pagination = Pagination::from_raw(page, limit).ok_or_else(|| {
		ApiError::invalid_request("page and limit must be greater than zero.")
	})?;
	let order = match query.order.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
		Some(raw) =>
			raw.parse::<RankOrder>().map_err(|err| ApiError::invalid_request(err.to_string()))?,
		None => defaults.default_order,
	};

	Ok(LeaderboardRequest { search: query.search, pagination, order })
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}

	fn invalid_request(message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, INVALID_REQUEST, message)
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	pub fn error_code(&self) -> &str {
		&self.error_code
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string())
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
