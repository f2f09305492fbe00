use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::payment::Validate;
use crate::domain::repository::PaymentStore;
use crate::use_cases::dto::{SavePaymentCommand, SavePaymentResult};

#[derive(Clone)]
pub struct SavePaymentUseCase {
	store: Arc<dyn PaymentStore>,
}

impl SavePaymentUseCase {
	pub fn new(store: Arc<dyn PaymentStore>) -> Self {
		Self { store }
	}

	/// Updates the payment named by `command.id`, which must exist, or
	/// creates a new one under a fresh id.
	pub async fn execute(
		&self,
		command: SavePaymentCommand,
	) -> Result<SavePaymentResult, StoreError> {
		let SavePaymentCommand { id, mut payment } = command;
		payment.validate()?;

		let created = match id {
			Some(id) => {
				let stored = self.store.get_by_id(id).await?;
				payment.id = stored.id;
				payment.created_at = stored.created_at;
				payment.updated_at = stored.updated_at;
				false
			}
			None => {
				payment.id = Uuid::nil();
				payment.created_at = None;
				payment.updated_at = None;
				true
			}
		};

		let payment = self.store.save(payment).await?;
		Ok(SavePaymentResult { payment, created })
	}
}
