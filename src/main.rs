use std::io;

use actix_web::{middleware::Logger, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use civic_hub::config::{StoreBackend, CONFIG};
use civic_hub::repositories::Repositories;
use civic_hub::routes::{self, AppServices};

async fn connect_repositories() -> io::Result<Repositories> {
    match CONFIG.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            Ok(Repositories::memory())
        }
        StoreBackend::Mongo => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&CONFIG.mongodb_uri)
                .await
                .map_err(io::Error::other)?;
            let db = client.database(&CONFIG.database_name);

            db.run_command(doc! { "ping": 1 })
                .await
                .map_err(io::Error::other)?;
            info!("Connected to MongoDB successfully!");

            Repositories::mongo(&db)
                .await
                .map_err(|e| io::Error::other(e.to_string()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let repositories = connect_repositories().await?;
    let services = AppServices::new(&repositories);

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| services.register(cfg))
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
