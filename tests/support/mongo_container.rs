use payment_api::infrastructure::config::settings::MongoSettings;
use payment_api::infrastructure::persistence::mongo_payment_collection::MongoPaymentCollection;
use testcontainers::GenericImage;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use uuid::Uuid;

pub struct MongoTestContainer {
	pub collection: MongoPaymentCollection,
	pub settings:   MongoSettings,
	pub container:  testcontainers::ContainerAsync<GenericImage>,
}

pub async fn get_test_mongo_collection() -> MongoTestContainer {
	let container = GenericImage::new("mongo", "8.0")
		.with_exposed_port(ContainerPort::Tcp(27017))
		.with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
		.start()
		.await
		.unwrap();
	let host_port = container.get_host_port_ipv4(27017).await;
	let settings = MongoSettings {
		uri:                    format!("mongodb://127.0.0.1:{}", host_port.unwrap()),
		database:               "payments_test".to_string(),
		collection:             format!("payments_{}", Uuid::new_v4().simple()),
		max_retries:            10,
		connect_timeout_ms:     2000,
		retry_initial_delay_ms: 100,
		retry_max_delay_ms:     1000,
	};
	let collection = MongoPaymentCollection::connect_with_retry(&settings)
		.await
		.expect("Failed to connect to MongoDB");
	// Start every test from an empty collection
	collection
		.drop_collection()
		.await
		.expect("Failed to drop payments collection");
	MongoTestContainer {
		collection,
		settings,
		container,
	}
}
