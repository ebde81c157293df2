use super::{
    cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
    static_config::StaticConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub static_files: StaticConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            static_files: StaticConfig::from_env(),
        })
    }
}
