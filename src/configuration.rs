use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::PgConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: StoreBackend,

    /// Path of the local database file (created on first run).
    pub local_path: String,

    /// The two remote credentials: a Postgres URL without password plus the
    /// secret key used as one. Both must be present for the remote backend.
    pub remote_url: Option<String>,
    pub remote_key: Option<Secret<String>>,
}

#[derive(serde::Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Local,
    Remote,
}

#[derive(serde::Deserialize, Clone)]
pub struct AuthSettings {
    pub passcode: Secret<String>,
}

impl DatabaseSettings {
    pub fn sqlite_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.local_path)
            .create_if_missing(true)
    }

    /// `Ok(None)` when either remote credential is missing, which puts the
    /// application into the configuration-error state instead of crashing.
    pub fn remote_options(&self) -> Result<Option<PgConnectOptions>, sqlx::Error> {
        let (url, key) = match (self.remote_url.as_deref(), self.remote_key.as_ref()) {
            (Some(url), Some(key)) => (url, key),
            _ => return Ok(None),
        };
        Ok(Some(
            PgConnectOptions::from_str(url)?.password(key.expose_secret()),
        ))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_file = base_path.join("configuration.yaml");

    let mut builder = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", "8080")?
        .set_default("database.backend", "local")?
        .set_default("database.local_path", "feedings.db")?
        .set_default("auth.passcode", "Elliot")?;
    if configuration_file.exists() {
        builder = builder.add_source(config::File::from(configuration_file));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    let mut settings: Settings = settings.try_deserialize()?;

    // Hosting platforms hand out the listen port through PORT.
    if let Ok(port) = std::env::var("PORT") {
        settings.application.port = port
            .parse()
            .map_err(|_| config::ConfigError::Message(format!("invalid PORT value: {port}")))?;
    }

    Ok(settings)
}
