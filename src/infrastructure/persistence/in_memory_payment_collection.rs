use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::pagination::window;
use crate::domain::payment::Payment;
use crate::infrastructure::persistence::collection::{
	DocumentQuery, PaymentCollection,
};

/// Collection double that evaluates queries against each payment's JSON
/// document, the way the database sees it.
#[derive(Clone, Default)]
pub struct InMemoryPaymentCollection {
	documents: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_payments(payments: Vec<Payment>) -> Self {
		Self {
			documents: Arc::new(RwLock::new(payments)),
		}
	}

	fn matching(&self, query: &DocumentQuery) -> Result<Vec<Payment>, StoreError> {
		let documents = self.documents.read()?;
		let mut matching = Vec::new();
		for payment in documents.iter() {
			let document: Value = serde_json::to_value(payment)
				.map_err(StoreError::serialization("encoding payment document"))?;
			if query.accepts(&document) {
				matching.push(payment.clone());
			}
		}
		Ok(matching)
	}
}

#[async_trait]
impl PaymentCollection for InMemoryPaymentCollection {
	async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, StoreError> {
		Ok(self
			.documents
			.read()?
			.iter()
			.find(|payment| payment.id == id)
			.cloned())
	}

	async fn find(
		&self,
		query: &DocumentQuery,
	) -> Result<Vec<Payment>, StoreError> {
		let mut matching = self.matching(query)?;
		let range = window(matching.len(), query.limit, query.skip);
		matching.truncate(range.end);
		Ok(matching.split_off(range.start))
	}

	async fn count(&self, query: &DocumentQuery) -> Result<usize, StoreError> {
		Ok(self.matching(query)?.len())
	}

	async fn upsert(&self, payment: &Payment) -> Result<(), StoreError> {
		let mut documents = self.documents.write()?;
		match documents.iter_mut().find(|stored| stored.id == payment.id) {
			Some(stored) => *stored = payment.clone(),
			None => documents.push(payment.clone()),
		}
		Ok(())
	}

	async fn remove_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
		let mut documents = self.documents.write()?;
		let before = documents.len();
		documents.retain(|payment| payment.id != id);
		Ok(documents.len() != before)
	}

	async fn ping(&self) -> Result<(), StoreError> {
		Ok(())
	}
}
