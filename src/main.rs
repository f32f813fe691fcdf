use bottle_tally::configuration::get_configuration;
use bottle_tally::startup::Application;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!("listening on port {}", application.port());
    application.run_until_stopped().await?;
    Ok(())
}
