//! JSend response envelope: `{ "data": ..., "code": 200, "status": "success" }`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JSendStatus {
	Success,
	Fail,
	Error,
}

impl JSendStatus {
	pub fn for_status_code(code: StatusCode) -> Self {
		if code.is_server_error() {
			JSendStatus::Error
		} else if code.is_client_error() {
			JSendStatus::Fail
		} else {
			JSendStatus::Success
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JSend<T> {
	pub data:   T,
	pub code:   u16,
	pub status: JSendStatus,
}

impl<T: Serialize> JSend<T> {
	pub fn new(code: StatusCode, data: T) -> Self {
		Self {
			data,
			code: code.as_u16(),
			status: JSendStatus::for_status_code(code),
		}
	}

	pub fn respond(code: StatusCode, data: T) -> HttpResponse {
		HttpResponse::build(code).json(Self::new(code, data))
	}
}
