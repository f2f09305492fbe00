use actix_web::{HttpResponse, Responder, get};

/// Liveness probe. Answers only while the datasource guard lets traffic in.
#[get("/ping")]
pub async fn ping() -> impl Responder {
	HttpResponse::NoContent().finish()
}
