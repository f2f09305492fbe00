use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "APP";
pub const CONFIG_FILE_NAME: &str = "config";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseType {
	#[serde(alias = "inmem", alias = "memory")]
	InMemory,
	#[serde(alias = "mongodb")]
	Mongo,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MongoSettings {
	pub uri:                    String,
	pub database:               String,
	pub collection:             String,
	pub max_retries:            u32,
	pub connect_timeout_ms:     u64,
	pub retry_initial_delay_ms: u64,
	pub retry_max_delay_ms:     u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub node_name:                  String,
	pub host:                       String,
	pub port:                       u16,
	pub dev_mode:                   bool,
	pub database_type:              DatabaseType,
	pub health_check_interval_secs: u64,
	pub mongo:                      MongoSettings,
}

impl Config {
	/// Defaults, then an optional `config.{toml,yaml,json}` file, then
	/// `APP_*` environment variables (`__` separates nested keys).
	pub fn load() -> Result<Self, ConfigError> {
		let builder = Self::defaults()?
			.add_source(File::with_name(CONFIG_FILE_NAME).required(false))
			.add_source(
				Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("_")
					.separator("__"),
			);

		Self::from_builder(builder)
	}

	pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
		config::Config::builder()
			.set_default("node_name", "Payment API")?
			.set_default("host", "127.0.0.1")?
			.set_default("port", 8080)?
			.set_default("dev_mode", true)?
			.set_default("database_type", "in_memory")?
			.set_default("health_check_interval_secs", 1)?
			.set_default("mongo.uri", "mongodb://localhost:27017")?
			.set_default("mongo.database", "payments")?
			.set_default("mongo.collection", "payments")?
			.set_default("mongo.max_retries", 5)?
			.set_default("mongo.connect_timeout_ms", 1000)?
			.set_default("mongo.retry_initial_delay_ms", 100)?
			.set_default("mongo.retry_max_delay_ms", 2000)
	}

	pub fn from_builder(
		builder: ConfigBuilder<DefaultState>,
	) -> Result<Self, ConfigError> {
		builder.build()?.try_deserialize()
	}

	pub fn bind_address(&self) -> (String, u16) {
		(self.host.clone(), self.port)
	}
}
