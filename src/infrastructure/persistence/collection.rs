//! Capability set the document store adapter needs from a collection.
//!
//! Queries address fields by their wire-level key (the serde name of the
//! field), which is what both the mock and the MongoDB collection see.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::filter::{Filter, FilterKind};
use crate::domain::payment::Payment;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
	Equal {
		key:   &'static str,
		value: Value,
	},
	In {
		key:    &'static str,
		values: Vec<Value>,
	},
}

impl QueryClause {
	pub fn key(&self) -> &'static str {
		match self {
			QueryClause::Equal { key, .. } | QueryClause::In { key, .. } => key,
		}
	}

	/// Whether a serialized document satisfies the clause.
	pub fn accepts(&self, document: &Value) -> bool {
		let has = document.get(self.key()).unwrap_or(&Value::Null);
		match self {
			QueryClause::Equal { value, .. } => has == value,
			QueryClause::In { values, .. } => values.iter().any(|v| v == has),
		}
	}
}

impl TryFrom<&Filter> for QueryClause {
	type Error = StoreError;

	fn try_from(filter: &Filter) -> Result<Self, Self::Error> {
		filter.validate()?;
		let key = filter.field.document_key();
		match (filter.kind, &filter.want) {
			(FilterKind::Equal, want) => Ok(QueryClause::Equal {
				key,
				value: want.clone(),
			}),
			(FilterKind::In, Value::Array(values)) => Ok(QueryClause::In {
				key,
				values: values.clone(),
			}),
			(FilterKind::In, _) => Err(StoreError::UnsupportedFilterValue),
		}
	}
}

/// Clauses joined as AND, plus the cursor window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
	pub clauses: Vec<QueryClause>,
	pub skip:    usize,
	/// Zero means no limit.
	pub limit:   usize,
}

impl DocumentQuery {
	pub fn from_filters(filters: &[Filter]) -> Result<Self, StoreError> {
		let clauses = filters
			.iter()
			.map(QueryClause::try_from)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self {
			clauses,
			..Self::default()
		})
	}

	pub fn skip(mut self, skip: usize) -> Self {
		self.skip = skip;
		self
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	pub fn accepts(&self, document: &Value) -> bool {
		self.clauses.iter().all(|clause| clause.accepts(document))
	}
}

#[async_trait]
pub trait PaymentCollection: Send + Sync + 'static {
	/// `Ok(None)` when no document has this id.
	async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, StoreError>;

	/// Matching documents in natural order, skipped then limited.
	async fn find(&self, query: &DocumentQuery)
	-> Result<Vec<Payment>, StoreError>;

	/// Matching documents, ignoring the query window.
	async fn count(&self, query: &DocumentQuery) -> Result<usize, StoreError>;

	async fn upsert(&self, payment: &Payment) -> Result<(), StoreError>;

	/// `Ok(false)` when nothing was removed.
	async fn remove_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

	async fn ping(&self) -> Result<(), StoreError>;
}
