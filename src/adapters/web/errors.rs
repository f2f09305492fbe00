use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use log::error;
use serde::{Deserialize, Serialize};

use crate::adapters::web::jsend::JSend;
use crate::domain::errors::{ErrorKind, StoreError};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ErrorResponse {
	pub error: String,
	pub code:  String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Not found")]
	NotFound,
	#[display("{_0}")]
	BadClientDataError(#[error(not(source))] String),
	#[display("Maintenance is being done on the API")]
	UndergoingMaintenance,
	#[display("Something went wrong")]
	InternalServerError,
}

impl ApiError {
	pub fn code(&self) -> &'static str {
		match self {
			ApiError::NotFound => "not_found",
			ApiError::BadClientDataError(_) => "invalid_input",
			ApiError::UndergoingMaintenance => "undergoing_maintenance",
			ApiError::InternalServerError => "something_went_wrong",
		}
	}

	pub fn bad_input(message: impl Into<String>) -> Self {
		ApiError::BadClientDataError(message.into())
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		JSend::respond(self.status_code(), ErrorResponse {
			error: self.to_string(),
			code:  self.code().to_string(),
		})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound => StatusCode::NOT_FOUND,
			ApiError::BadClientDataError(_) => StatusCode::BAD_REQUEST,
			ApiError::UndergoingMaintenance => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<StoreError> for ApiError {
	fn from(e: StoreError) -> Self {
		match e.kind() {
			ErrorKind::NotFound => ApiError::NotFound,
			ErrorKind::InvalidInput => ApiError::BadClientDataError(e.to_string()),
			ErrorKind::Internal => {
				error!("Store failure: {e}");
				ApiError::InternalServerError
			}
		}
	}
}
