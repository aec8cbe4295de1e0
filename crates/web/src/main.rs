use database::{DatabaseConnectionInfo, MemoryDatabase, PgDatabase};
use web::{start_web_server, WebConfig, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = WebConfig::from_env();

    let result = if config.memory_database {
        log::warn!("running on the in-memory database, nothing will be persisted.");
        start_web_server(WebState::new(MemoryDatabase::new()), &config).await
    } else {
        // database
        let database_connection_info = DatabaseConnectionInfo::from_env()
            .expect("expected database connection info in env.");
        let database = PgDatabase::connect(database_connection_info)
            .await
            .expect("could not connect to database.");

        start_web_server(WebState::new(database), &config).await
    };

    if let Err(why) = result {
        log::error!("web server stopped: {}", why);
        std::process::exit(1);
    }
}
