use diesel_async::pooled_connection::{deadpool, AsyncDieselConnectionManager};
use diesel_async::scoped_futures::{ScopedBoxFuture, ScopedFutureExt};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::Error;

type Connection = AsyncDieselConnectionManager<AsyncPgConnection>;
type Pool = deadpool::Pool<AsyncPgConnection>;

#[derive(Debug, Clone, Copy)]
struct Timeout {
    lock_ms: u32,
    statement_ms: u32,
}

#[derive(Clone)]
pub struct Database {
    pool: Pool,
    timeout: Timeout,
}

impl Timeout {
    async fn apply(self, conn: &mut AsyncPgConnection) -> Result<(), Error> {
        // `SET` does not accept bind parameters, the values are plain integers.
        diesel::sql_query(format!("SET LOCAL lock_timeout = {}", self.lock_ms))
            .execute(conn)
            .await?;
        diesel::sql_query(format!("SET LOCAL statement_timeout = {}", self.statement_ms))
            .execute(conn)
            .await?;
        Ok(())
    }
}

impl Database {
    pub fn new(config: &crate::config::Database) -> Self {
        let pool = Pool::builder(Connection::new(&config.url))
            .build()
            .expect("Could not build database connection pool");
        Self {
            pool,
            timeout: Timeout {
                lock_ms: config.lock_timeout_ms,
                statement_ms: config.statement_timeout_ms,
            },
        }
    }

    pub async fn get(&self) -> Result<deadpool::Object<AsyncPgConnection>, Error> {
        self.pool.get().await.map_err(|_| Error::CheckoutConnectionPool)
    }

    /// Runs `callback` inside one transaction with the configured timeouts applied.
    ///
    /// The transaction commits only if `callback` returns `Ok`. If the returned future is
    /// dropped before that, the connection is left inside an open transaction, which the pool
    /// treats as broken and discards, so nothing partial is ever committed.
    pub async fn transaction<'a, R, F>(&self, callback: F) -> Result<R, Error>
    where
        F: for<'r> FnOnce(&'r mut AsyncPgConnection) -> ScopedBoxFuture<'a, 'r, Result<R, Error>>
            + Send
            + 'a,
        R: Send + 'a,
    {
        let timeout = self.timeout;
        let mut conn = self.get().await?;
        conn.transaction(move |conn| {
            async move {
                timeout.apply(conn).await?;
                callback(conn).await
            }
            .scope_boxed()
        })
        .await
    }
}
