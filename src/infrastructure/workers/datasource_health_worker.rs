use std::sync::Arc;

use log::{error, info};
use tokio::time::{Duration, sleep};

use crate::domain::health_status::{DatasourceHealth, HealthStatus};
use crate::domain::repository::PaymentStore;

/// Pings the store once and records the outcome.
pub async fn check_datasource_health(
	store: &dyn PaymentStore,
	health: &DatasourceHealth,
) -> HealthStatus {
	let status = match store.ping().await {
		Ok(()) => HealthStatus::Healthy,
		Err(e) => {
			error!("Datasource: could not ping: {e}");
			HealthStatus::Failing
		}
	};

	match (health.update(status), status) {
		(HealthStatus::Healthy, HealthStatus::Failing) => {
			error!("Datasource: connection lost");
		}
		(HealthStatus::Failing, HealthStatus::Healthy) => {
			info!("Datasource: connection reestablished");
		}
		_ => {}
	}
	status
}

pub async fn datasource_health_monitor_worker(
	store: Arc<dyn PaymentStore>,
	health: DatasourceHealth,
	interval: Duration,
) {
	loop {
		check_datasource_health(store.as_ref(), &health).await;
		sleep(interval).await;
	}
}
