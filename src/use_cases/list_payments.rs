use std::sync::Arc;

use crate::domain::errors::StoreError;
use crate::domain::pagination::PaginatedList;
use crate::domain::repository::PaymentStore;
use crate::use_cases::dto::ListPaymentsQuery;

#[derive(Clone)]
pub struct ListPaymentsUseCase {
	store: Arc<dyn PaymentStore>,
}

impl ListPaymentsUseCase {
	pub fn new(store: Arc<dyn PaymentStore>) -> Self {
		Self { store }
	}

	pub async fn execute(
		&self,
		query: ListPaymentsQuery,
	) -> Result<PaginatedList, StoreError> {
		self.store
			.get_many(query.limit, query.offset, &query.filters)
			.await
	}
}
