use uuid::Uuid;

use crate::adapters::web::errors::ApiError;
use crate::domain::filter::Filter;
use crate::domain::payment::Payment;
use crate::use_cases::dto::ListPaymentsQuery;

pub const LIMIT_PARAM: &str = "lim";
pub const OFFSET_PARAM: &str = "off";
pub const FILTER_PARAM: &str = "filter";

/// Builds a list query from raw query pairs. `filter` may repeat and takes
/// the form `<field>:<eq|in>:<value>`; `in` values are comma separated.
pub fn parse_list_query(
	params: &[(String, String)],
) -> Result<ListPaymentsQuery, ApiError> {
	let mut query = ListPaymentsQuery::default();

	for (key, value) in params {
		match key.as_str() {
			LIMIT_PARAM => query.limit = parse_count(LIMIT_PARAM, value)?,
			OFFSET_PARAM => query.offset = parse_count(OFFSET_PARAM, value)?,
			FILTER_PARAM => query.filters.push(parse_filter(value)?),
			_ => {}
		}
	}

	Ok(query)
}

fn parse_count(name: &str, raw: &str) -> Result<usize, ApiError> {
	raw.trim().parse().map_err(|_| {
		ApiError::bad_input(format!(
			"Invalid input: {name} must be a non-negative integer"
		))
	})
}

pub fn parse_filter(raw: &str) -> Result<Filter, ApiError> {
	let mut parts = raw.splitn(3, ':');
	match (parts.next(), parts.next(), parts.next()) {
		(Some(field), Some(kind), Some(value)) if !field.is_empty() => {
			Ok(Filter::parse(field, kind, value)?)
		}
		_ => Err(ApiError::bad_input(format!(
			"Invalid input: malformed filter '{raw}'"
		))),
	}
}

pub fn parse_payment_id(raw: &str) -> Result<Uuid, ApiError> {
	Uuid::parse_str(raw)
		.map_err(|_| ApiError::bad_input("Invalid input: malformed payment id"))
}

pub fn parse_payment_body(body: &[u8]) -> Result<Payment, ApiError> {
	serde_json::from_slice(body).map_err(|e| {
		ApiError::bad_input(format!("Invalid input: malformed payment body: {e}"))
	})
}
