mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Leaderboard, Postgres, Service, Storage};

use std::{fs, path::Path};

use chefboard_domain::RankOrder;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.postgres.acquire_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.acquire_timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.leaderboard.default_limit == 0 {
		return Err(Error::Validation {
			message: "leaderboard.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.leaderboard.max_limit < cfg.leaderboard.default_limit {
		return Err(Error::Validation {
			message: "leaderboard.max_limit must be at least leaderboard.default_limit."
				.to_string(),
		});
	}
	if let Err(err) = cfg.leaderboard.default_order.parse::<RankOrder>() {
		return Err(Error::Validation {
			message: format!("leaderboard.default_order is invalid: {err}"),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.leaderboard.default_order = cfg.leaderboard.default_order.trim().to_ascii_lowercase();

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
