use std::sync::Arc;

use log::info;

use crate::domain::errors::StoreError;
use crate::domain::repository::PaymentStore;
use crate::infrastructure::config::settings::{Config, DatabaseType};
use crate::infrastructure::persistence::document_payment_store::DocumentPaymentStore;
use crate::infrastructure::persistence::in_memory_payment_store::InMemoryPaymentStore;
use crate::infrastructure::persistence::mongo_payment_collection::MongoPaymentCollection;

/// Builds the store selected by `database_type`. A MongoDB store is only
/// returned once the database answered a ping within the retry budget.
pub async fn build_store(
	config: &Config,
) -> Result<Arc<dyn PaymentStore>, StoreError> {
	match config.database_type {
		DatabaseType::InMemory => {
			info!("Using in-memory payment store");
			Ok(Arc::new(InMemoryPaymentStore::new()))
		}
		DatabaseType::Mongo => {
			info!("Using MongoDB payment store at {}", config.mongo.uri);
			let collection =
				MongoPaymentCollection::connect_with_retry(&config.mongo).await?;
			Ok(Arc::new(DocumentPaymentStore::new(collection)))
		}
	}
}
