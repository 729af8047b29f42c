use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub auth: AuthSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub admin_secret: String,
    pub session_duration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// Prefix for every persisted key, so several deployments can share
    /// one backing store.
    pub namespace: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("auth.admin_secret", "change-me-in-production")?
            .set_default("auth.session_duration_hours", 24)?
            .set_default("storage.namespace", "chapterhouse")?
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (with CHAPTERHOUSE__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("CHAPTERHOUSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth: AuthSettings {
                admin_secret: "change-me-in-production".to_string(),
                session_duration_hours: 24,
            },
            storage: StorageSettings {
                namespace: "chapterhouse".to_string(),
            },
        }
    }
}
