use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::{Condition, Logger};
use actix_web::{App, HttpServer};
use log::info;

use crate::adapters::web::routes::payment_api;
use crate::domain::health_status::DatasourceHealth;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::persistence::bootstrap::build_store;
use crate::infrastructure::workers::datasource_health_worker::datasource_health_monitor_worker;

pub mod adapters {
	pub mod web {
		pub mod datasource_guard;
		pub mod errors;
		pub mod jsend;
		pub mod payments_handler;
		pub mod ping_handler;
		pub mod routes;
		pub mod schema;
	}
}

pub mod domain {
	pub mod errors;
	pub mod filter;
	pub mod health_status;
	pub mod pagination;
	pub mod payment;
	pub mod repository;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod persistence {
		pub mod bootstrap;
		pub mod collection;
		pub mod document_payment_store;
		pub mod in_memory_payment_collection;
		pub mod in_memory_payment_store;
		pub mod mongo_payment_collection;
	}
	pub mod workers {
		pub mod datasource_health_worker;
	}
}

pub mod use_cases {
	pub mod delete_payment;
	pub mod dto;
	pub mod get_payment;
	pub mod list_payments;
	pub mod save_payment;
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let store = build_store(&config).await.map_err(std::io::Error::other)?;
	let health = DatasourceHealth::default();

	info!(
		"Starting datasource health worker every {}s...",
		config.health_check_interval_secs
	);
	tokio::spawn(datasource_health_monitor_worker(
		store.clone(),
		health.clone(),
		Duration::from_secs(config.health_check_interval_secs),
	));

	let api = payment_api(store, health);
	let dev_mode = config.dev_mode;
	let (host, port) = config.bind_address();

	info!(
		"Starting Actix-Web server {} on {host}:{port}...",
		config.node_name
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Condition::new(dev_mode, Logger::default()))
			.configure(api.clone())
	})
	.bind((host, port))?
	.run()
	.await
}
