use derive_more::derive::{Display, Error};

/// Coarse classification callers use to map a [`StoreError`] onto their own
/// transport (HTTP status codes for the web adapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	NotFound,
	InvalidInput,
	Internal,
}

#[derive(Debug, Display, Error)]
pub enum StoreError {
	#[display("Record not found")]
	NotFound,
	#[display("Invalid input: {_0}")]
	InvalidInput(#[error(not(source))] String),
	#[display("Unknown filter type: {_0}")]
	UnknownFilterType(#[error(not(source))] String),
	#[display("Unsupported filter value")]
	UnsupportedFilterValue,
	#[display("Cannot use nil value")]
	NilValue,
	#[display("Something went wrong")]
	SomethingWentWrong,
	#[display("Store lock poisoned")]
	LockPoisoned,
	#[display("Database error while {context}: {source}")]
	Database {
		context: &'static str,
		source:  mongodb::error::Error,
	},
	#[display("Serialization error while {context}: {source}")]
	Serialization {
		context: &'static str,
		source:  serde_json::Error,
	},
	#[display("Encoding error while {context}: {source}")]
	Encoding {
		context: &'static str,
		source:  mongodb::bson::ser::Error,
	},
}

impl StoreError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			StoreError::NotFound => ErrorKind::NotFound,
			StoreError::InvalidInput(_) |
			StoreError::UnknownFilterType(_) |
			StoreError::UnsupportedFilterValue |
			StoreError::NilValue => ErrorKind::InvalidInput,
			StoreError::SomethingWentWrong |
			StoreError::LockPoisoned |
			StoreError::Database { .. } |
			StoreError::Serialization { .. } |
			StoreError::Encoding { .. } => ErrorKind::Internal,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.kind() == ErrorKind::NotFound
	}

	pub fn database(
		context: &'static str,
	) -> impl FnOnce(mongodb::error::Error) -> StoreError {
		move |source| StoreError::Database { context, source }
	}

	pub fn serialization(
		context: &'static str,
	) -> impl FnOnce(serde_json::Error) -> StoreError {
		move |source| StoreError::Serialization { context, source }
	}
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
	fn from(_: std::sync::PoisonError<T>) -> Self {
		StoreError::LockPoisoned
	}
}
