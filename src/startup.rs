use crate::config::configuration::ApplicationSettings;
use crate::db::DbPool;
use crate::errors::custom::CustomError;
use crate::routes::{
    health_check::health_check,
    offer::offer::{create_offer, delete_offer, get_offer, list_offers, update_offer},
    order::order::{create_order, delete_order, get_order, list_orders, update_order},
    user::user::{create_user, delete_user, get_user, list_users, update_user},
};
use actix_web::{dev::Server, error::JsonPayloadError, web, App, HttpRequest, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/**************************************************************/
// Application State re reuse the same code in main and tests
/***************************************************************/
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Port 0 binds an ephemeral port; read it back with [`Application::port`].
    pub fn build(settings: &ApplicationSettings, pool: DbPool) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", settings.host, settings.port);
        let listener = TcpListener::bind(&address)?;
        let actual_port = listener.local_addr()?.port();
        tracing::info!(host = %settings.host, port = actual_port, "Listening");

        let server = run_server(listener, pool)?;
        Ok(Self {
            port: actual_port,
            server,
        })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/******************************************/
// Mapping body extraction failures to 400
/******************************************/
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    CustomError::ValidationError(err.to_string()).into()
}

/******************************************/
// Running Server
/******************************************/
pub fn run_server(listener: TcpListener, pool: DbPool) -> Result<Server, std::io::Error> {
    let pool = web::Data::new(pool);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/users")
                    .route(web::get().to(list_users))
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/users/{id}")
                    .route(web::get().to(get_user))
                    .route(web::put().to(update_user))
                    .route(web::delete().to(delete_user)),
            )
            .service(
                web::resource("/orders")
                    .route(web::get().to(list_orders))
                    .route(web::post().to(create_order)),
            )
            .service(
                web::resource("/orders/{id}")
                    .route(web::get().to(get_order))
                    .route(web::put().to(update_order))
                    .route(web::delete().to(delete_order)),
            )
            .service(
                web::resource("/offers")
                    .route(web::get().to(list_offers))
                    .route(web::post().to(create_offer)),
            )
            .service(
                web::resource("/offers/{id}")
                    .route(web::get().to(get_offer))
                    .route(web::put().to(update_offer))
                    .route(web::delete().to(delete_offer)),
            )
    })
    .listen(listener)?
    .run();
    Ok(server)
}
