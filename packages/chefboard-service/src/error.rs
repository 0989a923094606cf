pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure surfaced by the leaderboard. Callers only ever see the opaque display text and
/// [`Error::code`]; the store detail is kept for logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to fetch chefs.")]
	StoreAccess { message: String },
}
impl Error {
	pub const INTERNAL_SERVER_ERROR: &'static str = "INTERNAL_SERVER_ERROR";

	pub fn code(&self) -> &'static str {
		match self {
			Self::StoreAccess { .. } => Self::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn detail(&self) -> &str {
		match self {
			Self::StoreAccess { message } => message,
		}
	}
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::StoreAccess { message: err.to_string() }
	}
}

impl From<chefboard_storage::Error> for Error {
	fn from(err: chefboard_storage::Error) -> Self {
		match err {
			chefboard_storage::Error::Sqlx(inner) => inner.into(),
			chefboard_storage::Error::InvalidArgument(message) => Self::StoreAccess { message },
		}
	}
}
