//! MongoDB-backed [`PaymentCollection`].
//!
//! Payments go through `serde_json::Value` before being converted to BSON,
//! so ids and timestamps are stored as strings and match the JSON filter
//! values. The payment `id` is stored as the document `_id`.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{error, info};
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde_json::Value;
use tokio::time::sleep;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::payment::Payment;
use crate::infrastructure::config::settings::MongoSettings;
use crate::infrastructure::persistence::collection::{
	DocumentQuery, PaymentCollection, QueryClause,
};

const ID_KEY: &str = "id";
const MONGO_ID_KEY: &str = "_id";

fn to_bson(value: &Value, context: &'static str) -> Result<Bson, StoreError> {
	mongodb::bson::to_bson(value)
		.map_err(|source| StoreError::Encoding { context, source })
}

fn payment_to_document(payment: &Payment) -> Result<Document, StoreError> {
	let json = serde_json::to_value(payment)
		.map_err(StoreError::serialization("encoding payment document"))?;

	let mut document = match to_bson(&json, "encoding payment document")? {
		Bson::Document(document) => document,
		other => {
			error!("Payment encoded to a non-document BSON value: {other}");
			return Err(StoreError::SomethingWentWrong);
		}
	};

	if let Some(id) = document.remove(ID_KEY) {
		document.insert(MONGO_ID_KEY, id);
	}
	Ok(document)
}

fn document_to_payment(mut document: Document) -> Result<Payment, StoreError> {
	if let Some(id) = document.remove(MONGO_ID_KEY) {
		document.insert(ID_KEY, id);
	}
	let json = Bson::Document(document).into_relaxed_extjson();
	serde_json::from_value(json)
		.map_err(StoreError::serialization("decoding payment document"))
}

fn id_filter(id: Uuid) -> Document {
	doc! { MONGO_ID_KEY: id.to_string() }
}

fn wire_key(key: &'static str) -> &'static str {
	if key == ID_KEY { MONGO_ID_KEY } else { key }
}

fn clause_to_document(clause: &QueryClause) -> Result<Document, StoreError> {
	let context = "encoding query clause";
	let condition = match clause {
		QueryClause::Equal { value, .. } => to_bson(value, context)?,
		QueryClause::In { values, .. } => {
			let values = values
				.iter()
				.map(|value| to_bson(value, context))
				.collect::<Result<Vec<_>, _>>()?;
			Bson::Document(doc! { "$in": values })
		}
	};
	let mut document = Document::new();
	document.insert(wire_key(clause.key()), condition);
	Ok(document)
}

/// The driver encodes `skip` as a BSON int64, so larger values saturate.
fn cursor_skip(skip: usize) -> u64 {
	u64::try_from(skip).unwrap_or(u64::MAX).min(i64::MAX as u64)
}

/// `None` leaves the cursor unlimited. A negative limit would ask MongoDB for
/// a single batch, so values past `i64::MAX` are treated as unlimited too.
fn cursor_limit(limit: usize) -> Option<i64> {
	match i64::try_from(limit) {
		Ok(0) | Err(_) => None,
		Ok(limit) => Some(limit),
	}
}

/// Translates the query clauses into a MongoDB filter, joined with `$and`.
pub fn query_to_filter(query: &DocumentQuery) -> Result<Document, StoreError> {
	let mut clauses = query
		.clauses
		.iter()
		.map(clause_to_document)
		.collect::<Result<Vec<_>, _>>()?;

	Ok(match clauses.len() {
		0 => Document::new(),
		1 => clauses.remove(0),
		_ => doc! { "$and": clauses },
	})
}

#[derive(Clone)]
pub struct MongoPaymentCollection {
	database:   Database,
	collection: Collection<Document>,
}

impl MongoPaymentCollection {
	pub fn new(database: Database, collection_name: &str) -> Self {
		Self {
			collection: database.collection(collection_name),
			database,
		}
	}

	pub async fn connect(settings: &MongoSettings) -> Result<Self, StoreError> {
		let mut options = ClientOptions::parse(&settings.uri)
			.await
			.map_err(StoreError::database("parsing mongo uri"))?;
		let timeout = Duration::from_millis(settings.connect_timeout_ms);
		options.connect_timeout = Some(timeout);
		options.server_selection_timeout = Some(timeout);

		let client = Client::with_options(options)
			.map_err(StoreError::database("creating mongo client"))?;
		let collection =
			Self::new(client.database(&settings.database), &settings.collection);
		collection.ping().await?;
		Ok(collection)
	}

	/// Dials MongoDB until it answers a ping or the retry budget is spent,
	/// backing off exponentially between attempts.
	pub async fn connect_with_retry(
		settings: &MongoSettings,
	) -> Result<Self, StoreError> {
		let max_attempts = settings.max_retries.max(1);
		let mut attempts = 0;
		let mut delay_ms = settings.retry_initial_delay_ms;

		loop {
			attempts += 1;
			info!("Mongo: connecting (attempt {attempts} of {max_attempts})");
			match Self::connect(settings).await {
				Ok(collection) => {
					info!(
						"Mongo: connected to {}/{}",
						settings.database, settings.collection
					);
					return Ok(collection);
				}
				Err(e) => {
					error!(
						"Mongo: could not connect: {e} (attempt {attempts} of \
						 {max_attempts})"
					);
					if attempts >= max_attempts {
						return Err(e);
					}
				}
			}
			sleep(Duration::from_millis(delay_ms)).await;
			delay_ms = delay_ms.saturating_mul(2).min(settings.retry_max_delay_ms);
		}
	}

	pub async fn drop_collection(&self) -> Result<(), StoreError> {
		self.collection
			.drop()
			.await
			.map_err(StoreError::database("dropping payments collection"))
	}
}

#[async_trait]
impl PaymentCollection for MongoPaymentCollection {
	async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, StoreError> {
		self.collection
			.find_one(id_filter(id))
			.await
			.map_err(StoreError::database("fetching payment"))?
			.map(document_to_payment)
			.transpose()
	}

	async fn find(
		&self,
		query: &DocumentQuery,
	) -> Result<Vec<Payment>, StoreError> {
		let mut find = self
			.collection
			.find(query_to_filter(query)?)
			.sort(doc! { "$natural": 1 })
			.skip(cursor_skip(query.skip));
		if let Some(limit) = cursor_limit(query.limit) {
			find = find.limit(limit);
		}

		let documents: Vec<Document> = find
			.await
			.map_err(StoreError::database("listing payments"))?
			.try_collect()
			.await
			.map_err(StoreError::database("reading payments cursor"))?;

		documents.into_iter().map(document_to_payment).collect()
	}

	async fn count(&self, query: &DocumentQuery) -> Result<usize, StoreError> {
		let count = self
			.collection
			.count_documents(query_to_filter(query)?)
			.await
			.map_err(StoreError::database("counting payments"))?;
		Ok(count as usize)
	}

	async fn upsert(&self, payment: &Payment) -> Result<(), StoreError> {
		self.collection
			.replace_one(id_filter(payment.id), payment_to_document(payment)?)
			.upsert(true)
			.await
			.map_err(StoreError::database("saving payment"))?;
		Ok(())
	}

	async fn remove_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
		let result = self
			.collection
			.delete_one(id_filter(id))
			.await
			.map_err(StoreError::database("deleting payment"))?;
		Ok(result.deleted_count > 0)
	}

	async fn ping(&self) -> Result<(), StoreError> {
		self.database
			.run_command(doc! { "ping": 1 })
			.await
			.map_err(StoreError::database("pinging mongo"))?;
		Ok(())
	}
}
