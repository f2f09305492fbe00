use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::filter::Filter;
use crate::domain::pagination::PaginatedList;
use crate::domain::payment::Payment;

#[async_trait]
pub trait PaymentStore: Send + Sync + 'static {
	/// Number of stored payments. Backends that cannot answer report 0.
	async fn total(&self) -> usize;

	/// Payments matching every filter, windowed by `limit` and `offset`.
	async fn get_many(
		&self,
		limit: usize,
		offset: usize,
		filters: &[Filter],
	) -> Result<PaginatedList, StoreError>;

	async fn get_by_id(&self, id: Uuid) -> Result<Payment, StoreError>;

	/// Inserts or updates by id and returns the stored payment.
	async fn save(&self, payment: Payment) -> Result<Payment, StoreError>;

	async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

	async fn ping(&self) -> Result<(), StoreError>;
}
