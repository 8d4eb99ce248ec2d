use marketplace::config::configuration;
use marketplace::db::establish_connection;
use marketplace::seed::seed_database;
use marketplace::startup::Application;
use marketplace::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = configuration::Settings::new().expect("Failed to load configurations");

    let subscriber = get_subscriber("marketplace".into(), config.log_level.clone(), std::io::stdout);
    init_subscriber(subscriber);

    let pool = establish_connection(&config.database.url).expect("Failed to set up the database");
    seed_database(&pool).expect("Failed to seed the database");

    let application = Application::build(&config.application, pool)?;
    application.run_until_stopped().await?;
    Ok(())
}
