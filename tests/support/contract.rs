//! Behaviour every `PaymentStore` backend must share. Each check expects a
//! store seeded with `fixtures::seed` and nothing else.

use std::time::Duration;

use chrono::Utc;

use payment_api::domain::errors::StoreError;
use payment_api::domain::filter::{Filter, FilterKind, PaymentField};
use payment_api::domain::payment::Payment;
use payment_api::domain::repository::PaymentStore;
use serde_json::Value;
use uuid::Uuid;

use crate::support::fixtures::detailed_payment;

pub async fn total_matches_unpaged_count(store: &dyn PaymentStore) {
	let page = store.get_many(0, 0, &[]).await.unwrap();

	assert_eq!(store.total().await, 3);
	assert_eq!(page.total, 3);
	assert_eq!(page.sub_total, 3);
	assert_eq!(page.results.len(), 3);
}

pub async fn get_by_id_is_idempotent(store: &dyn PaymentStore, seeded: &[Payment]) {
	let first = store.get_by_id(seeded[0].id).await.unwrap();
	let second = store.get_by_id(seeded[0].id).await.unwrap();

	assert_eq!(first, second);
	assert_eq!(first, seeded[0]);
}

pub async fn unknown_id_is_not_found(store: &dyn PaymentStore) {
	let result = store.get_by_id(Uuid::new_v4()).await;
	assert!(matches!(result, Err(StoreError::NotFound)));
}

pub async fn offset_past_the_end_is_empty(store: &dyn PaymentStore) {
	let page = store.get_many(0, 3, &[]).await.unwrap();

	assert!(page.results.is_empty());
	assert_eq!(page.sub_total, 0);
	assert_eq!(page.total, 3);
}

pub async fn huge_window_is_empty_or_everything(store: &dyn PaymentStore) {
	let past_the_end = store.get_many(0, usize::MAX, &[]).await.unwrap();
	assert_eq!(past_the_end.total, 3);
	assert!(past_the_end.results.is_empty());

	let unbounded = store.get_many(usize::MAX, 1, &[]).await.unwrap();
	assert_eq!(unbounded.total, 3);
	assert_eq!(unbounded.sub_total, 2);
}

pub async fn windows_follow_insertion_order(
	store: &dyn PaymentStore,
	seeded: &[Payment],
) {
	for (offset, expected) in seeded.iter().enumerate() {
		let page = store.get_many(1, offset, &[]).await.unwrap();

		assert_eq!(page.total, 3);
		assert_eq!(page.sub_total, 1);
		assert_eq!(page.results[0].id, expected.id);
	}

	let clamped = store.get_many(5, 1, &[]).await.unwrap();
	assert_eq!(clamped.sub_total, 2);
	assert_eq!(clamped.results[0].id, seeded[1].id);
}

pub async fn scheme_filter_selects_matching(store: &dyn PaymentStore) {
	let page = store.get_many(0, 0, &[Filter::is_scheme("A")]).await.unwrap();

	assert_eq!(page.total, 2);
	assert_eq!(page.sub_total, 2);
	assert!(page.results.iter().all(|p| p.scheme == "A"));

	let none = store
		.get_many(0, 0, &[Filter::is_scheme("C")])
		.await
		.unwrap();
	assert_eq!(none.total, 0);
	assert!(none.results.is_empty());
}

pub async fn filters_combine_with_and(store: &dyn PaymentStore) {
	let filters = [
		Filter::is_scheme("A"),
		Filter::one_of(PaymentField::Currency, ["GBP", "USD"]),
	];

	let page = store.get_many(0, 0, &filters).await.unwrap();

	assert_eq!(page.total, 1);
	assert_eq!(page.results[0].scheme, "A");
	assert_eq!(page.results[0].currency, "GBP");
}

pub async fn invalid_filters_are_rejected(store: &dyn PaymentStore) {
	let nil = Filter {
		field: PaymentField::Scheme,
		want:  Value::Null,
		kind:  FilterKind::Equal,
	};
	let scalar_in = Filter {
		field: PaymentField::Scheme,
		want:  Value::from("A"),
		kind:  FilterKind::In,
	};

	assert!(matches!(
		store.get_many(0, 0, &[nil]).await,
		Err(StoreError::NilValue)
	));
	assert!(matches!(
		store.get_many(0, 0, &[scalar_in]).await,
		Err(StoreError::UnsupportedFilterValue)
	));
}

pub async fn delete_removes_payment(store: &dyn PaymentStore, seeded: &[Payment]) {
	store.delete(seeded[1].id).await.unwrap();

	assert_eq!(store.total().await, 2);
	assert!(matches!(
		store.get_by_id(seeded[1].id).await,
		Err(StoreError::NotFound)
	));

	let remaining = store.get_many(0, 0, &[]).await.unwrap();
	let ids: Vec<Uuid> = remaining.results.iter().map(|p| p.id).collect();
	assert_eq!(ids, vec![seeded[0].id, seeded[2].id]);
}

pub async fn delete_unknown_is_not_found(store: &dyn PaymentStore) {
	let result = store.delete(Uuid::new_v4()).await;

	assert!(matches!(result, Err(StoreError::NotFound)));
	assert_eq!(store.total().await, 3);
}

pub async fn upsert_keeps_creation_time(store: &dyn PaymentStore, seeded: &[Payment]) {
	let original = seeded[0].clone();
	tokio::time::sleep(Duration::from_millis(5)).await;

	let updated = store
		.save(original.clone().with_amount("99.99"))
		.await
		.unwrap();
	let stored = store.get_by_id(original.id).await.unwrap();

	assert_eq!(store.total().await, 3);
	assert_eq!(stored.amount, "99.99");
	assert_eq!(stored.created_at, original.created_at);
	assert!(stored.updated_at > original.updated_at);
	assert_eq!(stored, updated);
}

pub async fn save_without_id_assigns_one(store: &dyn PaymentStore) {
	let saved = store
		.save(Payment::new().with_scheme("C").with_amount("1.00"))
		.await
		.unwrap();

	assert!(saved.has_id());
	assert!(saved.created_at.is_some());
	assert!(saved.updated_at.is_some());
	assert_eq!(store.total().await, 4);
	assert_eq!(store.get_by_id(saved.id).await.unwrap(), saved);
}

pub async fn insert_stamps_creation_time(store: &dyn PaymentStore) {
	let backdated = Utc::now() - chrono::Duration::days(365);
	let mut payment = Payment::new().with_id(Uuid::new_v4());
	payment.created_at = Some(backdated);

	let saved = store.save(payment).await.unwrap();
	let stored = store.get_by_id(saved.id).await.unwrap();

	assert_ne!(stored.created_at, Some(backdated));
	assert_eq!(stored.created_at, stored.updated_at);
}

pub async fn nested_fields_round_trip(store: &dyn PaymentStore) {
	let saved = store.save(detailed_payment()).await.unwrap();
	let stored = store.get_by_id(saved.id).await.unwrap();

	assert_eq!(stored, saved);
	assert_eq!(stored.charges_information.sender_charges.len(), 2);
	assert_eq!(stored.beneficiary.name, "Wilfred Jeremiah Owens");

	let by_type = store
		.get_many(0, 0, &[Filter::equal(PaymentField::Type, "Payment")])
		.await
		.unwrap();
	assert_eq!(by_type.total, 1);
	assert_eq!(by_type.results[0].id, saved.id);
}

pub async fn ping_succeeds(store: &dyn PaymentStore) {
	assert!(store.ping().await.is_ok());
}
