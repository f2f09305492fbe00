use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::filter::Filter;
use crate::domain::pagination::PaginatedList;
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentStore;
use crate::infrastructure::persistence::collection::{
	DocumentQuery, PaymentCollection,
};

/// Store contract implemented on top of a document collection.
#[derive(Clone)]
pub struct DocumentPaymentStore<C: PaymentCollection> {
	collection: C,
}

impl<C: PaymentCollection> DocumentPaymentStore<C> {
	pub fn new(collection: C) -> Self {
		Self { collection }
	}

	pub fn collection(&self) -> &C {
		&self.collection
	}
}

#[async_trait]
impl<C: PaymentCollection> PaymentStore for DocumentPaymentStore<C> {
	async fn total(&self) -> usize {
		match self.collection.count(&DocumentQuery::default()).await {
			Ok(total) => total,
			Err(e) => {
				error!("Failed to count payments: {e}");
				0
			}
		}
	}

	async fn get_many(
		&self,
		limit: usize,
		offset: usize,
		filters: &[Filter],
	) -> Result<PaginatedList, StoreError> {
		let query = DocumentQuery::from_filters(filters)?;
		let total = self.collection.count(&query).await?;
		if offset >= total {
			return Ok(PaginatedList::new(Vec::new(), total));
		}
		let results = self
			.collection
			.find(&query.skip(offset).limit(limit))
			.await?;
		Ok(PaginatedList::new(results, total))
	}

	async fn get_by_id(&self, id: Uuid) -> Result<Payment, StoreError> {
		self.collection
			.find_by_id(id)
			.await?
			.ok_or(StoreError::NotFound)
	}

	async fn save(&self, mut payment: Payment) -> Result<Payment, StoreError> {
		let now = Utc::now();
		let existing = if payment.has_id() {
			self.collection.find_by_id(payment.id).await?
		} else {
			payment.id = Uuid::new_v4();
			None
		};

		payment.created_at = match existing {
			Some(stored) => stored.created_at.or(payment.created_at),
			None => Some(now),
		};
		payment.updated_at = Some(now);

		self.collection.upsert(&payment).await?;
		debug!("Upserted payment {}", payment.id);
		Ok(payment)
	}

	async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
		if self.collection.remove_by_id(id).await? {
			debug!("Deleted payment {id}");
			Ok(())
		} else {
			Err(StoreError::NotFound)
		}
	}

	async fn ping(&self) -> Result<(), StoreError> {
		self.collection.ping().await
	}
}
