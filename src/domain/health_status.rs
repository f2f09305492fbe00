use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthStatus {
	Healthy,
	Failing,
}

impl HealthStatus {
	pub fn is_healthy(&self) -> bool {
		matches!(self, HealthStatus::Healthy)
	}
}

/// Last known health of the datasource, shared between the monitor worker
/// and the request guard.
#[derive(Debug, Clone)]
pub struct DatasourceHealth {
	healthy: Arc<AtomicBool>,
}

impl DatasourceHealth {
	pub fn new(status: HealthStatus) -> Self {
		Self {
			healthy: Arc::new(AtomicBool::new(status.is_healthy())),
		}
	}

	pub fn status(&self) -> HealthStatus {
		if self.healthy.load(Ordering::Acquire) {
			HealthStatus::Healthy
		} else {
			HealthStatus::Failing
		}
	}

	/// Records the new status and returns the previous one.
	pub fn update(&self, status: HealthStatus) -> HealthStatus {
		if self.healthy.swap(status.is_healthy(), Ordering::AcqRel) {
			HealthStatus::Healthy
		} else {
			HealthStatus::Failing
		}
	}
}

impl Default for DatasourceHealth {
	fn default() -> Self {
		Self::new(HealthStatus::Healthy)
	}
}
