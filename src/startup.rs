use crate::authentication::{SessionGate, SharedPasscode};
use crate::configuration::{DatabaseSettings, Settings, StoreBackend};
use crate::routes::{
    delete_feeding, log_feeding, save_weight, show_configuration_error, show_home, submit_passcode,
};
use crate::store::{PostgresStore, SqliteStore, Store};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = match get_store(&configuration.database).await? {
            StoreSelection::Ready(store) => {
                let gate = SessionGate::new(Box::new(SharedPasscode::new(
                    configuration.auth.passcode.clone(),
                )));
                run(listener, store, gate).await?
            }
            StoreSelection::Misconfigured(message) => {
                tracing::error!("{message}");
                run_misconfigured(listener, message).await?
            }
        };

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

enum StoreSelection {
    Ready(Arc<dyn Store>),
    Misconfigured(String),
}

async fn get_store(configuration: &DatabaseSettings) -> Result<StoreSelection, anyhow::Error> {
    match configuration.backend {
        StoreBackend::Local => {
            let store = SqliteStore::connect(configuration.sqlite_options()).await?;
            tracing::info!("using the local store at {}", configuration.local_path);
            Ok(StoreSelection::Ready(Arc::new(store)))
        }
        StoreBackend::Remote => match configuration.remote_options()? {
            Some(options) => {
                let store = PostgresStore::connect(options).await?;
                tracing::info!("using the remote table store");
                Ok(StoreSelection::Ready(Arc::new(store)))
            }
            None => Ok(StoreSelection::Misconfigured(String::from(
                "Error: the remote table store is selected but its credentials are missing. \
                 Set APP__DATABASE__REMOTE_URL and APP__DATABASE__REMOTE_KEY.",
            ))),
        },
    }
}

/// Message shown by the misconfigured server on every path.
pub struct ConfigurationError(pub String);

async fn run(
    listener: TcpListener,
    store: Arc<dyn Store>,
    gate: SessionGate,
) -> Result<Server, anyhow::Error> {
    let store: Data<dyn Store> = Data::from(store);
    let gate = Data::new(Mutex::new(gate));
    let server = HttpServer::new(move || {
        App::new()
            .route("/", web::get().to(show_home))
            .route("/login", web::post().to(submit_passcode))
            .route("/feedings", web::post().to(log_feeding))
            .route("/feedings/{feeding_id}/delete", web::post().to(delete_feeding))
            .route("/weight", web::post().to(save_weight))
            .app_data(store.clone())
            .app_data(gate.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Missing remote credentials must not crash the process: serve a static
/// error screen instead of the normal application.
async fn run_misconfigured(
    listener: TcpListener,
    message: String,
) -> Result<Server, anyhow::Error> {
    let message = Data::new(ConfigurationError(message));
    let server = HttpServer::new(move || {
        App::new()
            .default_service(web::to(show_configuration_error))
            .app_data(message.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
