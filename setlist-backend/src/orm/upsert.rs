use uuid::Uuid;

use crate::database::Database;
use crate::Error;

pub trait Insert {
    async fn insert(&self, database: &Database) -> Result<Uuid, Error>;
}

pub trait Update {
    async fn update(&self, database: &Database, id: Uuid) -> Result<(), Error>;
}
