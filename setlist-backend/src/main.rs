use setlist_api::constant;
use setlist_backend::{build, config, init_tracing, migration};

#[tokio::main]
async fn main() {
    let config = config::Config::default();
    init_tracing(&config.log).unwrap();
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    migration::run(&config.database.url).await.unwrap();

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await.unwrap();
    axum::serve(listener, build(&config)).await.unwrap();
}
