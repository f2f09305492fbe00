use std::sync::Arc;

use payment_api::infrastructure::config::settings::Config;
use payment_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
