use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::filter::Filter;
use crate::domain::pagination::{PaginatedList, paginate};
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentStore;

/// Array-backed store. Records keep their insertion order; identity is the
/// payment id.
#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
	database: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds the store with payments exactly as given, without stamping them.
	pub fn with_payments(payments: Vec<Payment>) -> Self {
		Self {
			database: Arc::new(RwLock::new(payments)),
		}
	}

	fn snapshot(&self) -> Result<Vec<Payment>, StoreError> {
		Ok(self.database.read()?.clone())
	}
}

/// Keeps the payments matching every filter, in store order.
pub fn select(
	payments: Vec<Payment>,
	filters: &[Filter],
) -> Result<Vec<Payment>, StoreError> {
	for filter in filters {
		filter.validate()?;
	}
	if filters.is_empty() {
		return Ok(payments);
	}

	let mut selected = Vec::with_capacity(payments.len());
	for payment in payments {
		let mut keep = true;
		for filter in filters {
			if !filter.matches_payment(&payment)? {
				keep = false;
				break;
			}
		}
		if keep {
			selected.push(payment);
		}
	}
	Ok(selected)
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
	async fn total(&self) -> usize {
		match self.database.read() {
			Ok(database) => database.len(),
			Err(poisoned) => poisoned.into_inner().len(),
		}
	}

	async fn get_many(
		&self,
		limit: usize,
		offset: usize,
		filters: &[Filter],
	) -> Result<PaginatedList, StoreError> {
		let candidates = select(self.snapshot()?, filters)?;
		Ok(paginate(candidates, limit, offset))
	}

	async fn get_by_id(&self, id: Uuid) -> Result<Payment, StoreError> {
		self.database
			.read()?
			.iter()
			.find(|payment| payment.id == id)
			.cloned()
			.ok_or(StoreError::NotFound)
	}

	async fn save(&self, mut payment: Payment) -> Result<Payment, StoreError> {
		let now = Utc::now();
		let mut database = self.database.write()?;

		if payment.has_id() &&
			let Some(stored) = database.iter_mut().find(|p| p.id == payment.id)
		{
			payment.created_at = stored.created_at.or(payment.created_at);
			payment.updated_at = Some(now);
			*stored = payment.clone();
			debug!("Updated payment {}", payment.id);
			return Ok(payment);
		}

		if !payment.has_id() {
			payment.id = Uuid::new_v4();
		}
		payment.created_at = Some(now);
		payment.updated_at = Some(now);
		database.push(payment.clone());
		debug!("Inserted payment {}", payment.id);
		Ok(payment)
	}

	async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
		let mut database = self.database.write()?;
		let position = database
			.iter()
			.position(|payment| payment.id == id)
			.ok_or(StoreError::NotFound)?;
		database.remove(position);
		debug!("Deleted payment {id}");
		Ok(())
	}

	async fn ping(&self) -> Result<(), StoreError> {
		Ok(())
	}
}
