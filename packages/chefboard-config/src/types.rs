use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub leaderboard: Leaderboard,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// Upper bound on waiting for a pooled connection. Store calls inherit it as their timeout.
	#[serde(default = "default_acquire_timeout_ms")]
	pub acquire_timeout_ms: u64,
}

/// Defaults applied by the HTTP layer when a leaderboard query omits a parameter.
#[derive(Debug, Deserialize)]
pub struct Leaderboard {
	#[serde(default = "default_limit")]
	pub default_limit: u32,
	#[serde(default = "default_max_limit")]
	pub max_limit: u32,
	/// One of the rank order identifiers, e.g. "trending" or "newest".
	#[serde(default = "default_order")]
	pub default_order: String,
}
impl Default for Leaderboard {
	fn default() -> Self {
		Self {
			default_limit: default_limit(),
			max_limit: default_max_limit(),
			default_order: default_order(),
		}
	}
}

fn default_acquire_timeout_ms() -> u64 {
	5_000
}

fn default_limit() -> u32 {
	12
}

fn default_max_limit() -> u32 {
	100
}

fn default_order() -> String {
	"trending".to_string()
}
