use actix_web::HttpServer;
use leptos::logging::log;
use stayease::app::create_app;
use stayease::config::Config;
use stayease::db::Database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::load();

    // Initialize the database
    let db = Database::new(&config.database_url).map_err(std::io::Error::other)?;
    db.create_schema().await.map_err(std::io::Error::other)?; // Ensure the schema is created
    log!("[SERVER] Schema created successfully!");

    let addr = config.address();
    log!("[SERVER] listening on http://{}", &addr);

    // Start the Actix Web server
    let server_db = db.clone();
    let static_dir = config.static_dir.clone();
    HttpServer::new(move || create_app(server_db.clone(), &static_dir))
        .bind(&addr)?
        .run()
        .await?;

    log!("[SERVER] Server shutting down...");
    db.close().map_err(std::io::Error::other)
}
