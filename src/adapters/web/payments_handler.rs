use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, delete, get, post, route, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::jsend::JSend;
use crate::adapters::web::schema::{
	parse_list_query, parse_payment_body, parse_payment_id,
};
use crate::use_cases::delete_payment::DeletePaymentUseCase;
use crate::use_cases::dto::SavePaymentCommand;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::list_payments::ListPaymentsUseCase;
use crate::use_cases::save_payment::SavePaymentUseCase;

#[get("/payments")]
pub async fn list_payments(
	params: web::Query<Vec<(String, String)>>,
	list_payments_use_case: web::Data<ListPaymentsUseCase>,
) -> Result<HttpResponse, ApiError> {
	let query = parse_list_query(&params)?;
	let page = list_payments_use_case.execute(query).await?;

	Ok(JSend::respond(StatusCode::OK, page))
}

#[post("/payments")]
pub async fn create_payment(
	body: web::Bytes,
	save_payment_use_case: web::Data<SavePaymentUseCase>,
) -> Result<HttpResponse, ApiError> {
	let command = SavePaymentCommand {
		id:      None,
		payment: parse_payment_body(&body)?,
	};

	let result = save_payment_use_case.execute(command).await?;
	info!("Payment created: {}", result.payment.id);

	Ok(JSend::respond(StatusCode::CREATED, result.payment))
}

#[get("/payments/{id}")]
pub async fn get_payment(
	path: web::Path<String>,
	get_payment_use_case: web::Data<GetPaymentUseCase>,
) -> Result<HttpResponse, ApiError> {
	let id = parse_payment_id(&path)?;
	let payment = get_payment_use_case.execute(id).await?;

	Ok(JSend::respond(StatusCode::OK, payment))
}

#[route("/payments/{id}", method = "PUT", method = "POST")]
pub async fn update_payment(
	path: web::Path<String>,
	body: web::Bytes,
	save_payment_use_case: web::Data<SavePaymentUseCase>,
) -> Result<HttpResponse, ApiError> {
	let command = SavePaymentCommand {
		id:      Some(parse_payment_id(&path)?),
		payment: parse_payment_body(&body)?,
	};

	let result = save_payment_use_case.execute(command).await?;
	info!("Payment updated: {}", result.payment.id);

	Ok(JSend::respond(StatusCode::OK, result.payment))
}

#[delete("/payments/{id}")]
pub async fn delete_payment(
	path: web::Path<String>,
	delete_payment_use_case: web::Data<DeletePaymentUseCase>,
) -> Result<HttpResponse, ApiError> {
	let id = parse_payment_id(&path)?;
	delete_payment_use_case.execute(id).await?;
	info!("Payment deleted: {id}");

	Ok(HttpResponse::NoContent().finish())
}

pub async fn not_found() -> HttpResponse {
	ApiError::NotFound.error_response()
}
