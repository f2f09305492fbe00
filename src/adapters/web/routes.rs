use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::web;

use crate::adapters::web::datasource_guard::datasource_guard;
use crate::adapters::web::payments_handler::{
	create_payment, delete_payment, get_payment, list_payments, not_found,
	update_payment,
};
use crate::adapters::web::ping_handler::ping;
use crate::domain::health_status::DatasourceHealth;
use crate::domain::repository::PaymentStore;
use crate::use_cases::delete_payment::DeletePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::list_payments::ListPaymentsUseCase;
use crate::use_cases::save_payment::SavePaymentUseCase;

pub const API_V1_PREFIX: &str = "/v1";

/// Registers the use cases, the `/v1` routes and the JSend 404 fallback.
pub fn payment_api(
	store: Arc<dyn PaymentStore>,
	health: DatasourceHealth,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
	move |cfg: &mut web::ServiceConfig| {
		cfg.app_data(web::Data::new(ListPaymentsUseCase::new(store.clone())))
			.app_data(web::Data::new(GetPaymentUseCase::new(store.clone())))
			.app_data(web::Data::new(SavePaymentUseCase::new(store.clone())))
			.app_data(web::Data::new(DeletePaymentUseCase::new(store.clone())))
			.app_data(web::Data::new(health.clone()))
			.service(
				web::scope(API_V1_PREFIX)
					.wrap(from_fn(datasource_guard))
					.service(ping)
					.service(list_payments)
					.service(create_payment)
					.service(get_payment)
					.service(update_payment)
					.service(delete_payment),
			)
			.default_service(web::to(not_found));
	}
}
