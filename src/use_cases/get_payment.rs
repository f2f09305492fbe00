use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentStore;

#[derive(Clone)]
pub struct GetPaymentUseCase {
	store: Arc<dyn PaymentStore>,
}

impl GetPaymentUseCase {
	pub fn new(store: Arc<dyn PaymentStore>) -> Self {
		Self { store }
	}

	pub async fn execute(&self, id: Uuid) -> Result<Payment, StoreError> {
		self.store.get_by_id(id).await
	}
}
