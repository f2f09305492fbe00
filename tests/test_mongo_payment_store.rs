use payment_api::domain::repository::PaymentStore;
use payment_api::infrastructure::persistence::document_payment_store::DocumentPaymentStore;
use payment_api::infrastructure::persistence::mongo_payment_collection::MongoPaymentCollection;
use testcontainers::{ContainerAsync, GenericImage};

mod support;

use crate::support::contract;
use crate::support::fixtures::seed;
use crate::support::mongo_container::{
	MongoTestContainer, get_test_mongo_collection,
};

async fn mongo_store() -> (
	ContainerAsync<GenericImage>,
	DocumentPaymentStore<MongoPaymentCollection>,
) {
	let MongoTestContainer {
		collection,
		container,
		..
	} = get_test_mongo_collection().await;
	(container, DocumentPaymentStore::new(collection))
}

#[tokio::test]
async fn test_mongo_store_listing_contract() {
	let (_container, store) = mongo_store().await;
	let seeded = seed(&store).await;

	contract::total_matches_unpaged_count(&store).await;
	contract::get_by_id_is_idempotent(&store, &seeded).await;
	contract::unknown_id_is_not_found(&store).await;
	contract::offset_past_the_end_is_empty(&store).await;
	contract::windows_follow_insertion_order(&store, &seeded).await;
	contract::huge_window_is_empty_or_everything(&store).await;
	contract::scheme_filter_selects_matching(&store).await;
	contract::filters_combine_with_and(&store).await;
	contract::invalid_filters_are_rejected(&store).await;
	contract::ping_succeeds(&store).await;
}

#[tokio::test]
async fn test_mongo_store_delete_contract() {
	let (_container, store) = mongo_store().await;
	let seeded = seed(&store).await;

	contract::delete_unknown_is_not_found(&store).await;
	contract::delete_removes_payment(&store, &seeded).await;
}

#[tokio::test]
async fn test_mongo_store_upsert_keeps_creation_time() {
	let (_container, store) = mongo_store().await;
	let seeded = seed(&store).await;

	contract::upsert_keeps_creation_time(&store, &seeded).await;
}

#[tokio::test]
async fn test_mongo_store_save_without_id_assigns_one() {
	let (_container, store) = mongo_store().await;
	seed(&store).await;

	contract::save_without_id_assigns_one(&store).await;
	contract::insert_stamps_creation_time(&store).await;
}

#[tokio::test]
async fn test_mongo_store_nested_fields_round_trip() {
	let (_container, store) = mongo_store().await;
	seed(&store).await;

	contract::nested_fields_round_trip(&store).await;
}

#[tokio::test]
async fn test_mongo_store_reports_zero_total_when_database_is_gone() {
	let (container, store) = mongo_store().await;
	seed(&store).await;
	assert_eq!(store.total().await, 3);

	// Stop the mongo container to simulate a connection failure
	let _ = container.stop().await;

	assert_eq!(store.total().await, 0);
	assert!(store.ping().await.is_err());
}
