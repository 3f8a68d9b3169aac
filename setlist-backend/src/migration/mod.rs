use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Applies every pending embedded migration to the database at `database_url`.
pub async fn run(database_url: &str) -> Result<(), color_eyre::Report> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<usize, color_eyre::Report> {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|error| color_eyre::eyre::eyre!(error))?;
        for version in &applied {
            tracing::info!(%version, "migration applied");
        }
        Ok(applied.len())
    })
    .await??;
    tracing::info!(applied, "database schema is up to date");
    Ok(())
}
