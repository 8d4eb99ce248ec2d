use marketplace::config::configuration::Settings;
use marketplace::db::{establish_connection, DbPool};
use marketplace::seed::{seed_database, Fixtures};
use marketplace::startup::Application;
use marketplace::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use serde_json::Value;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the subscriber's type, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub db_pool: DbPool,
    pub fixtures: Fixtures,
    pub api_client: reqwest::Client,
}

/// Every app gets its own in-memory store, seeded from the bundled fixtures.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut settings = Settings::new().expect("Failed to load configurations");
    settings.application.host = "127.0.0.1".to_string();
    settings.application.port = 0;
    settings.database.url = ":memory:".to_string();

    let pool = establish_connection(&settings.database.url).expect("Failed to set up database");
    seed_database(&pool).expect("Failed to seed database");

    let application =
        Application::build(&settings.application, pool.clone()).expect("Failed to build application");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        db_pool: pool,
        fixtures: Fixtures::load().expect("Failed to load fixtures"),
        api_client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "GET {} failed", path);
        response.json().await.expect("Response was not JSON")
    }

    pub async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put(&self, path: &str, body: Value) -> reqwest::Response {
        self.api_client
            .put(&format!("{}{}", &self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.api_client
            .delete(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Path from the `Location` header of a 201 response.
pub fn created_location(response: &reqwest::Response) -> String {
    assert_eq!(response.status().as_u16(), 201);
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("Location header missing")
        .to_str()
        .expect("Location header is not ASCII")
        .to_string()
}
