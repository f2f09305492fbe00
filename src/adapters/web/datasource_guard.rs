use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, ResponseError, web};
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::domain::health_status::DatasourceHealth;

/// Short-circuits every request with `503 undergoing_maintenance` while the
/// datasource is marked failing. Requests pass through when no health
/// handle is registered.
pub async fn datasource_guard<B: MessageBody>(
	req: ServiceRequest,
	next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
	let healthy = req
		.app_data::<web::Data<DatasourceHealth>>()
		.is_none_or(|health| health.status().is_healthy());

	if !healthy {
		warn!("Rejecting {} {}: datasource unavailable", req.method(), req.path());
		let response = ApiError::UndergoingMaintenance.error_response();
		return Ok(req.into_response(response).map_into_right_body());
	}

	next.call(req).await.map(ServiceResponse::map_into_left_body)
}
