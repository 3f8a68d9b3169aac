use concat_string::concat_string;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use url::Url;
use uuid::Uuid;

use crate::database::Database;
use crate::{config, migration};

/// A freshly migrated temporary database, dropped together with the mock.
pub struct Mock {
    name: String,
    url: String,
    database: Database,
}

impl Mock {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_test_writer()
            .try_init();

        let name = Uuid::new_v4().to_string();
        let mut mock_url = Url::parse(&url).unwrap();
        mock_url.set_path(&name);

        let mut root_conn = AsyncPgConnection::establish(&url).await.unwrap();
        diesel::sql_query(concat_string!("CREATE DATABASE \"", name, "\";"))
            .execute(&mut root_conn)
            .await
            .unwrap();

        let mock_url = mock_url.to_string();
        migration::run(&mock_url).await.unwrap();

        Self {
            name,
            url,
            database: Database::new(&config::Database { url: mock_url, ..Default::default() }),
        }
    }

    pub fn state(&self) -> &Database {
        &self.database
    }
}

impl Drop for Mock {
    fn drop(&mut self) {
        let raw_statement =
            concat_string!("DROP DATABASE IF EXISTS \"", &self.name, "\" WITH (FORCE);");
        let url = self.url.clone();
        let statement = raw_statement.clone();

        // Dropping may happen inside a runtime, so the statement runs on its own thread.
        let result = std::thread::spawn(move || -> Result<(), color_eyre::Report> {
            tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(
                async move {
                    let mut conn = AsyncPgConnection::establish(&url).await?;
                    diesel::sql_query(statement).execute(&mut conn).await?;
                    Ok(())
                },
            )
        })
        .join();

        if !matches!(result, Ok(Ok(()))) {
            println!("Could not drop temporary database because of {result:?}");
            println!("Please drop the database manually with '{raw_statement}'");
        }
    }
}
