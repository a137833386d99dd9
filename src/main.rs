use std::io;

use actix_web::{middleware, web, App, HttpServer};
use log::info;
use reviewboard::config::Config;
use reviewboard::db::Database;
use reviewboard::routes::{configure, cors_headers};
use reviewboard::service::ReviewService;

// Startup storage failures end the process; there is no degraded mode.
fn fatal(context: &str) -> impl Fn(reviewboard::db::DbError) -> io::Error + '_ {
    move |e| {
        log::error!("{}: {}", context, e);
        io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, e))
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(fatal("Failed to connect to database"))?;
    db.create_schema()
        .map_err(fatal("Failed to initialize database"))?;
    info!("Schema created successfully!");

    // Seed the id allocator from the highest stored id
    let service = ReviewService::new(db).map_err(fatal("Failed to load highest review ID"))?;
    let service = web::Data::new(service);

    let addr = config.bind_addr();
    info!("Server is listening on {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(cors_headers())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(addr)?
    .run()
    .await
}
