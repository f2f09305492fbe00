use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::repository::PaymentStore;

#[derive(Clone)]
pub struct DeletePaymentUseCase {
	store: Arc<dyn PaymentStore>,
}

impl DeletePaymentUseCase {
	pub fn new(store: Arc<dyn PaymentStore>) -> Self {
		Self { store }
	}

	pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
		self.store.delete(id).await
	}
}
