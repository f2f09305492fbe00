use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

/// A bounded slice of a filtered record set plus its count metadata.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedList {
	pub results:   Vec<Payment>,
	/// Records matching the filters, before pagination.
	pub total:     usize,
	pub sub_total: usize,
}

impl PaginatedList {
	pub fn new(results: Vec<Payment>, total: usize) -> Self {
		Self {
			sub_total: results.len(),
			results,
			total,
		}
	}
}

/// Index range selected by `limit`/`offset` over `len` candidates.
///
/// A zero limit means "until the end". An offset past the end yields an
/// empty range, and a window running past the end is clamped.
pub fn window(len: usize, limit: usize, offset: usize) -> Range<usize> {
	if offset >= len {
		return len..len;
	}
	if limit == 0 {
		return offset..len;
	}
	offset..offset.saturating_add(limit).min(len)
}

pub fn paginate(
	mut candidates: Vec<Payment>,
	limit: usize,
	offset: usize,
) -> PaginatedList {
	let total = candidates.len();
	let range = window(total, limit, offset);
	candidates.truncate(range.end);
	let results = candidates.split_off(range.start);
	PaginatedList::new(results, total)
}
